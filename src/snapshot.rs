//! Serde view of the queue: a head-to-tail sequence of payloads.
//!
//! The slab layout is an implementation detail and never hits the wire;
//! deserialization rebuilds the chain by tail insertion, preserving order.

use std::ffi::CString;
use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::queue::StringQueue;

impl Serialize for StringQueue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct QueueVisitor;

impl<'de> Visitor<'de> for QueueVisitor {
    type Value = StringQueue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of C strings")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut queue = match seq.size_hint() {
            Some(n) => StringQueue::with_capacity(n).map_err(de::Error::custom)?,
            None => StringQueue::new(),
        };
        while let Some(value) = seq.next_element::<CString>()? {
            queue.insert_tail(&value).map_err(de::Error::custom)?;
        }
        Ok(queue)
    }
}

impl<'de> Deserialize<'de> for StringQueue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(QueueVisitor)
    }
}
