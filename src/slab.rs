//! Index-addressed node storage.
//!
//! Variables:
//!   slots : Vec<Slot>        — backing store, occupied or vacant
//!   free  : Option<NodeId>   — head of the vacant-slot list
//!   live  : usize            — occupied slot count
//!
//! Equations:
//!   insert(node): reuse free slot, else try_reserve(1) + push     O(1)
//!   remove(id):   vacate slot, thread onto free list              O(1)
//!   clear():      drop all slots, free list empty                 O(N)
//!
//! A `NodeId` held by the queue always names an occupied slot: slots are
//! vacated only by the remove path that also unlinks the node.

use std::collections::TryReserveError;
use std::ffi::CString;

/// Slot index of a live node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// One queued element: an owned payload plus neighbor links.
pub(crate) struct Node {
    pub(crate) value: CString,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeId> },
}

pub(crate) struct NodeSlab {
    slots: Vec<Slot>,
    free: Option<NodeId>,
    live: usize,
}

impl NodeSlab {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve(capacity)?;
        Ok(Self {
            slots,
            free: None,
            live: 0,
        })
    }

    /// Occupied slot count.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Store `node`, reusing a vacant slot when one exists. The vector only
    /// grows through `try_reserve`, so failure leaves the slab unchanged.
    pub(crate) fn insert(&mut self, node: Node) -> Result<NodeId, TryReserveError> {
        let id = match self.free {
            Some(id) => {
                let Slot::Vacant { next_free } = self.slots[id.index()] else {
                    unreachable!("occupied slot on the free list");
                };
                self.free = next_free;
                self.slots[id.index()] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.try_reserve(1)?;
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        };
        self.live += 1;
        Ok(id)
    }

    /// Vacate `id` and return its node.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node {
        let slot = std::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        let Slot::Occupied(node) = slot else {
            unreachable!("remove of vacant slot {id:?}");
        };
        self.free = Some(id);
        self.live -= 1;
        node
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("read of vacant slot {id:?}"),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("write to vacant slot {id:?}"),
        }
    }

    /// Swap the payloads of two distinct nodes; links stay put.
    pub(crate) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a.index() < b.index() {
            (a.index(), b.index())
        } else {
            (b.index(), a.index())
        };
        let (front, back) = self.slots.split_at_mut(hi);
        match (&mut front[lo], &mut back[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => std::mem::swap(&mut x.value, &mut y.value),
            _ => unreachable!("swap_values on vacant slot"),
        }
    }

    /// Drop every slot, occupied or vacant.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}
