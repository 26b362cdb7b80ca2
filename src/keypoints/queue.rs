//! A max-crowding priority structure over the currently active points.
//!
//! Weights are stored as negated crowding sums, so extracting the minimum
//! stored weight yields the most crowded point. There is no decrease-key:
//! updating a point's weight pushes a fresh entry with a bumped generation
//! counter and the stale entry is discarded lazily when it surfaces at pop
//! time.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug, Clone, Copy)]
struct Entry {
    weight: f64,
    index: usize,
    generation: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry, so invert the comparison: the
        // smallest stored weight (the most crowded point) comes out first,
        // with the lower index winning ties to keep runs reproducible.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

struct LiveEntry {
    weight: f64,
    generation: u64,
}

/// The active set and its priority queue. An index popped from the queue is
/// gone for good; re-insertion never happens within a run.
pub struct CrowdingQueue {
    heap: BinaryHeap<Entry>,
    live: HashMap<usize, LiveEntry>,
}

impl CrowdingQueue {
    /// Bulk-load the queue from `(index, weight)` pairs, where each weight is
    /// the negated crowding sum for that index.
    pub fn from_weights(weights: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut queue = Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
        };
        queue.reload(weights);
        queue
    }

    /// Discard all current entries and reload from freshly computed weights.
    /// Used by the periodic full rebuild; the caller is responsible for only
    /// feeding indices that are still active.
    pub fn reload(&mut self, weights: impl IntoIterator<Item = (usize, f64)>) {
        self.heap.clear();
        self.live.clear();
        for (index, weight) in weights {
            self.heap.push(Entry {
                weight,
                index,
                generation: 0,
            });
            self.live.insert(
                index,
                LiveEntry {
                    weight,
                    generation: 0,
                },
            );
        }
    }

    /// The number of active points.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Whether `index` is still active.
    pub fn contains(&self, index: usize) -> bool {
        self.live.contains_key(&index)
    }

    /// Add `delta` to the stored weight of `index`, superseding its current
    /// queue entry. Does nothing if the index has already been popped.
    pub fn bump(&mut self, index: usize, delta: f64) {
        if let Some(entry) = self.live.get_mut(&index) {
            entry.weight += delta;
            entry.generation += 1;
            self.heap.push(Entry {
                weight: entry.weight,
                index,
                generation: entry.generation,
            });
        }
    }

    /// Remove and return the most crowded active point and its stored weight.
    /// Stale entries surfacing from earlier bumps are skipped silently.
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        while let Some(entry) = self.heap.pop() {
            let is_current = self
                .live
                .get(&entry.index)
                .is_some_and(|live| live.generation == entry.generation);
            if is_current {
                self.live.remove(&entry.index);
                return Some((entry.index, entry.weight));
            }
        }
        None
    }

    /// The still-active indices in ascending order.
    pub fn live_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.live.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}
