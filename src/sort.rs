//! Top-down merge sort over the node chain.
//!
//! The chain is cut into two severed runs around the midpoint, each run is
//! sorted recursively, and the sorted runs are merged by relinking
//! `prev`/`next` as nodes move; payloads never change slots. Equal keys
//! take the left run's node first, so the sort is stable.
//!
//! O(n log n) comparisons, O(log n) recursion depth, no allocation.

use crate::queue::StringQueue;
use crate::slab::{NodeId, NodeSlab};

/// A severed, non-empty sub-chain: its own head/tail/len over shared slots.
/// The head's `prev` and the tail's `next` are always `None`.
#[derive(Clone, Copy)]
struct Run {
    head: NodeId,
    tail: NodeId,
    len: usize,
}

impl StringQueue {
    /// Sort elements ascending by lexicographic byte order of the payload
    /// (terminator excluded). No-op for fewer than two elements.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return;
        };
        let sorted = sort_run(
            &mut self.nodes,
            Run {
                head,
                tail,
                len: self.len,
            },
        );
        self.head = Some(sorted.head);
        self.tail = Some(sorted.tail);
    }
}

fn sort_run(nodes: &mut NodeSlab, run: Run) -> Run {
    if run.len < 2 {
        return run;
    }
    let (left, right) = split(nodes, run);
    let left = sort_run(nodes, left);
    let right = sort_run(nodes, right);
    merge(nodes, left, right)
}

/// Cut `run` after its first `len / 2` nodes. Both halves come back
/// severed: the left tail's `next` and the right head's `prev` are cleared.
fn split(nodes: &mut NodeSlab, run: Run) -> (Run, Run) {
    let half = run.len / 2;
    let mut mid = run.head;
    for _ in 0..half {
        let Some(next) = nodes.node(mid).next else {
            unreachable!("run shorter than its recorded len");
        };
        mid = next;
    }
    let Some(left_tail) = nodes.node(mid).prev else {
        unreachable!("midpoint collides with run head");
    };
    nodes.node_mut(left_tail).next = None;
    nodes.node_mut(mid).prev = None;

    (
        Run {
            head: run.head,
            tail: left_tail,
            len: half,
        },
        Run {
            head: mid,
            tail: run.tail,
            len: run.len - half,
        },
    )
}

/// Merge two sorted runs into one ascending chain, smaller front first.
fn merge(nodes: &mut NodeSlab, left: Run, right: Run) -> Run {
    let len = left.len + right.len;
    let mut a = Some(left.head);
    let mut b = Some(right.head);

    let head = take_smaller(nodes, &mut a, &mut b);
    nodes.node_mut(head).prev = None;
    let mut tail = head;

    loop {
        match (a, b) {
            (Some(_), Some(_)) => {
                let next = take_smaller(nodes, &mut a, &mut b);
                link(nodes, tail, next);
                tail = next;
            }
            // one run drained: splice the other's remainder on whole
            (Some(rest), None) => {
                link(nodes, tail, rest);
                return Run {
                    head,
                    tail: left.tail,
                    len,
                };
            }
            (None, Some(rest)) => {
                link(nodes, tail, rest);
                return Run {
                    head,
                    tail: right.tail,
                    len,
                };
            }
            (None, None) => unreachable!("both runs drained mid-merge"),
        }
    }
}

/// Pop the lexicographically smaller front of the two runs; ties take from
/// `a`.
fn take_smaller(nodes: &NodeSlab, a: &mut Option<NodeId>, b: &mut Option<NodeId>) -> NodeId {
    let (Some(x), Some(y)) = (*a, *b) else {
        unreachable!("take_smaller needs both fronts");
    };
    if nodes.node(x).value.as_bytes() <= nodes.node(y).value.as_bytes() {
        *a = nodes.node(x).next;
        x
    } else {
        *b = nodes.node(y).next;
        y
    }
}

fn link(nodes: &mut NodeSlab, tail: NodeId, next: NodeId) {
    nodes.node_mut(tail).next = Some(next);
    nodes.node_mut(next).prev = Some(tail);
}
