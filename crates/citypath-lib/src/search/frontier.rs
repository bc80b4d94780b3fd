//! Frontier and candidate-path storage for the best-first search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Candidate paths as parent pointers; one slot per path extension.
#[derive(Debug, Default)]
pub(crate) struct Trail<'a> {
    slots: Vec<TrailSlot<'a>>,
}

#[derive(Debug, Clone, Copy)]
struct TrailSlot<'a> {
    tip: &'a str,
    parent: Option<usize>,
}

impl<'a> Trail<'a> {
    pub(crate) fn push(&mut self, tip: &'a str, parent: Option<usize>) -> usize {
        self.slots.push(TrailSlot { tip, parent });
        self.slots.len() - 1
    }

    /// Location preceding the tip of the path ending at `slot`.
    pub(crate) fn predecessor(&self, slot: usize) -> Option<&'a str> {
        self.slots[slot]
            .parent
            .map(|parent| self.slots[parent].tip)
    }

    /// Whether `name` occurs anywhere on the path ending at `slot`.
    pub(crate) fn contains(&self, slot: usize, name: &str) -> bool {
        let mut current = Some(slot);
        while let Some(index) = current {
            let entry = self.slots[index];
            if entry.tip == name {
                return true;
            }
            current = entry.parent;
        }
        false
    }

    /// Materialise the path ending at `slot`, source first.
    pub(crate) fn path(&self, slot: usize) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(slot);
        while let Some(index) = current {
            let entry = self.slots[index];
            path.push(entry.tip.to_string());
            current = entry.parent;
        }
        path.reverse();
        path
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Frontier entry: one candidate path, identified by its trail slot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) tip: &'a str,
    pub(crate) slot: usize,
    pub(crate) dist_from_source: f64,
    pub(crate) path_cost: f64,
    sequence: u64,
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode<'_> {}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with
        // earlier insertions winning ties.
        other
            .path_cost
            .total_cmp(&self.path_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of candidate paths ordered by `path_cost`.
#[derive(Debug, Default)]
pub(crate) struct Frontier<'a> {
    heap: BinaryHeap<SearchNode<'a>>,
    next_sequence: u64,
}

impl<'a> Frontier<'a> {
    pub(crate) fn push(&mut self, tip: &'a str, slot: usize, dist_from_source: f64, path_cost: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(SearchNode {
            tip,
            slot,
            dist_from_source,
            path_cost,
            sequence,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<SearchNode<'a>> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Keep, for every tip, only the entries whose cost equals the lowest cost
    /// recorded for that tip. Returns how many entries were dropped.
    pub(crate) fn prune_dominated(&mut self) -> usize {
        let mut best: HashMap<&'a str, f64> = HashMap::new();
        for node in self.heap.iter() {
            best.entry(node.tip)
                .and_modify(|cost| *cost = cost.min(node.path_cost))
                .or_insert(node.path_cost);
        }

        let before = self.heap.len();
        self.heap.retain(|node| node.path_cost <= best[node.tip]);
        before - self.heap.len()
    }
}
