//! Minimum-priority queue of `(PointId, cost)` pairs with `O(log n)`
//! decrease-key.
//!
//! A linear scan to locate an entry before lowering its key would also
//! satisfy callers at small map sizes; this version instead maintains an
//! auxiliary `PointId → heap-slot` index updated on every swap, trading a
//! little bookkeeping for `O(log n)` `decrease`/`contains` — the map sizes
//! this engine targets make the linear variant a needless bottleneck in the
//! router's inner loop.

use streetmap_core::PointId;

#[derive(Copy, Clone, PartialEq, Debug)]
struct Entry {
    cost: f64,
    id: PointId,
}

/// A min-heap of `(PointId, cost)` keyed on `cost`, with `O(log n)` push,
/// pop-min, and decrease.
///
/// Capacity is fixed at construction to the number of points expected;
/// pushing beyond that capacity is a programmer error and panics rather than
/// returning a `Result` — the caller (the router) always knows its point
/// count up front and sizing the queue to it is not something a user input
/// can get wrong.
pub struct PriorityQueue {
    heap: Vec<Entry>,
    /// `position[point.index()]` is this point's current slot in `heap`, or
    /// `None` if the point is not currently queued.
    position: Vec<Option<usize>>,
    capacity: usize,
}

impl PriorityQueue {
    /// Construct an empty queue with room for `capacity` distinct points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: Vec::with_capacity(capacity), position: vec![None; capacity], capacity }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// `true` iff `id` currently has an entry in the queue.
    pub fn contains(&self, id: PointId) -> bool {
        self.position.get(id.index()).copied().flatten().is_some()
    }

    /// Insert `id` with the given `cost`.
    ///
    /// # Panics
    /// Panics if `id` is out of range for this queue's capacity, if `id` is
    /// already present, or if the queue is already at capacity — all
    /// programmer errors, not user errors (§7).
    pub fn push(&mut self, id: PointId, cost: f64) {
        assert!(id.index() < self.capacity, "PriorityQueue: point id {id} out of range");
        assert!(!self.contains(id), "PriorityQueue: point id {id} already queued, use decrease instead");
        assert!(self.heap.len() < self.capacity, "PriorityQueue: push beyond capacity");

        let slot = self.heap.len();
        self.heap.push(Entry { cost, id });
        self.position[id.index()] = Some(slot);
        self.sift_up(slot);
    }

    /// Remove and return the entry with least cost, ties broken arbitrarily.
    pub fn pop_min(&mut self) -> Option<(PointId, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let Entry { id, cost } = self.heap.pop().expect("just checked non-empty");
        self.position[id.index()] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((id, cost))
    }

    /// Lower `id`'s cost to `new_cost` and restore heap order.
    ///
    /// # Panics
    /// Panics if `id` is not currently in the queue, or if `new_cost` is not
    /// lower than its current cost — both indicate a caller bug (the router
    /// only calls this after confirming a strictly better cost).
    pub fn decrease(&mut self, id: PointId, new_cost: f64) {
        let slot = self.position[id.index()].expect("PriorityQueue::decrease on an id not in the queue");
        assert!(new_cost <= self.heap[slot].cost, "PriorityQueue::decrease given a non-decreasing cost");
        self.heap[slot].cost = new_cost;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].cost <= self.heap[i].cost {
                break;
            }
            self.swap_slots(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < len && self.heap[left].cost < self.heap[smallest].cost {
                smallest = left;
            }
            if right < len && self.heap[right].cost < self.heap[smallest].cost {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap_slots(i, smallest);
            i = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].id.index()] = Some(a);
        self.position[self.heap[b].id.index()] = Some(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_min_returns_ascending_order() {
        let mut q = PriorityQueue::with_capacity(4);
        q.push(PointId(0), 5.0);
        q.push(PointId(1), 1.0);
        q.push(PointId(2), 3.0);

        assert_eq!(q.pop_min(), Some((PointId(1), 1.0)));
        assert_eq!(q.pop_min(), Some((PointId(2), 3.0)));
        assert_eq!(q.pop_min(), Some((PointId(0), 5.0)));
        assert_eq!(q.pop_min(), None);
    }

    #[test]
    fn decrease_reorders_to_new_minimum() {
        let mut q = PriorityQueue::with_capacity(3);
        q.push(PointId(0), 10.0);
        q.push(PointId(1), 20.0);
        q.decrease(PointId(1), 1.0);
        assert_eq!(q.pop_min(), Some((PointId(1), 1.0)));
    }

    #[test]
    fn contains_tracks_membership_through_pops() {
        let mut q = PriorityQueue::with_capacity(2);
        q.push(PointId(0), 1.0);
        assert!(q.contains(PointId(0)));
        assert!(!q.contains(PointId(1)));
        q.pop_min();
        assert!(!q.contains(PointId(0)));
    }

    #[test]
    #[should_panic(expected = "already queued")]
    fn push_duplicate_panics() {
        let mut q = PriorityQueue::with_capacity(1);
        q.push(PointId(0), 1.0);
        q.push(PointId(0), 2.0);
    }

    #[test]
    #[should_panic(expected = "beyond capacity")]
    fn push_beyond_capacity_panics() {
        let mut q = PriorityQueue::with_capacity(1);
        q.push(PointId(0), 1.0);
        q.push(PointId(1), 2.0);
    }
}
