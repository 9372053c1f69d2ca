//! Open set for the rectangular A*: a min-priority queue on estimated cost where entries with
//! equal cost come out in the order they were pushed.
use fxhash::FxHashMap;
use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then earliest pushed
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Entries refer to search nodes by arena index. Besides ordering, the frontier remembers the
/// lowest cost queued for each anchor so that [has_open_at_most](Frontier::has_open_at_most)
/// does not need to scan the heap. Entries for an anchor only leave the heap when that anchor is
/// expanded, after which the search no longer asks about it.
pub struct Frontier<K> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    best_open: FxHashMap<Point, K>,
    sequence: usize,
}

impl<K: Ord + Copy> Frontier<K> {
    pub fn new() -> Frontier<K> {
        Frontier {
            heap: BinaryHeap::new(),
            best_open: FxHashMap::default(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, anchor: Point, estimated_cost: K, index: usize) {
        self.best_open
            .entry(anchor)
            .and_modify(|best| {
                if estimated_cost < *best {
                    *best = estimated_cost;
                }
            })
            .or_insert(estimated_cost);
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            sequence: self.sequence,
            index,
        });
        self.sequence += 1;
    }

    /// Removes the entry with the smallest estimated cost and returns its node index.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|holder| holder.index)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether an entry for `anchor` with estimated cost `<= estimated_cost` has been queued.
    pub fn has_open_at_most(&self, anchor: &Point, estimated_cost: K) -> bool {
        self.best_open
            .get(anchor)
            .is_some_and(|best| *best <= estimated_cost)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<K: Ord + Copy> Default for Frontier<K> {
    fn default() -> Self {
        Frontier::new()
    }
}
