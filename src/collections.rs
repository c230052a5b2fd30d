use std::hash::BuildHasherDefault;
use indexmap::{IndexMap};
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;


/// Payload + priority pair stored in the heap array
#[derive(Debug)]
struct QueueItem<T, P> {
    item: T,
    weight: P,
}


/// Generic max-priority queue backed by a binary heap over a Vec
/// - children of index i live at 2i+1 and 2i+2, parent at (i-1)/2
/// - equal weights never swap on insert, no secondary ordering between ties
/// - popping or peeking an empty queue returns None
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: Vec<QueueItem<T, P>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {

    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: Vec::with_capacity(capacity) }
    }

    /// Insert an item with the given priority weight - O(log n)
    pub fn add(&mut self, item: T, weight: P) {
        self.heap.push(QueueItem { item, weight });

        // Sift up while strictly greater than the parent
        let mut i = self.heap.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].weight > self.heap[parent].weight {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Remove and return the highest-priority item - O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        // Move the last element into the root slot, take the old root out
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let root = self.heap.pop().map(|entry| entry.item);

        // Sift the new root down: swap with the greater child while one of
        // them strictly exceeds the current node, left child wins ties
        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut greatest = i;

            if left < self.heap.len() && self.heap[left].weight > self.heap[greatest].weight {
                greatest = left;
            }
            if right < self.heap.len() && self.heap[right].weight > self.heap[greatest].weight {
                greatest = right;
            }
            if greatest == i {
                break;
            }

            self.heap.swap(i, greatest);
            i = greatest;
        }

        root
    }

    /// Return the highest-priority item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|entry| &entry.item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // Check the heap property over the backing array
    fn assert_heap_invariant<T, P: Ord + std::fmt::Debug>(queue: &PriorityQueue<T, P>) {
        for i in 0..queue.heap.len() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < queue.heap.len() {
                    assert!(
                        queue.heap[i].weight >= queue.heap[child].weight,
                        "heap property violated at index {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: PriorityQueue<&str, i32> = PriorityQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_pop_returns_descending_priorities() {
        let mut queue = PriorityQueue::new();
        for weight in [3, 9, 1, 7, 5, 8, 2, 6, 4, 0] {
            queue.add(weight, weight);
        }

        let mut popped = Vec::new();
        while let Some(item) = queue.pop() {
            popped.push(item);
        }

        assert_eq!(popped, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = PriorityQueue::new();
        queue.add("low", 1);
        queue.add("high", 10);

        assert_eq!(queue.peek(), Some(&"high"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some("high"));
        assert_eq!(queue.pop(), Some("low"));
    }

    #[test]
    fn test_heap_invariant_after_interleaved_ops() {
        let mut queue = PriorityQueue::new();

        for weight in [5, 1, 9, 3, 7] {
            queue.add(weight, weight);
            assert_heap_invariant(&queue);
        }

        queue.pop();
        assert_heap_invariant(&queue);

        for weight in [4, 8, 2, 6] {
            queue.add(weight, weight);
            assert_heap_invariant(&queue);
        }

        while queue.pop().is_some() {
            assert_heap_invariant(&queue);
        }
    }

    #[test]
    fn test_equal_priorities_do_not_swap_on_add() {
        let mut queue = PriorityQueue::new();
        queue.add("first", 1);
        queue.add("second", 1);

        assert_eq!(queue.pop(), Some("first"));
        assert_eq!(queue.pop(), Some("second"));
    }

    #[test]
    fn test_min_order_via_reverse() {
        use std::cmp::Reverse;

        let mut queue = PriorityQueue::new();
        for weight in [4u32, 2, 8, 1, 6] {
            queue.add(weight, Reverse(weight));
        }

        let mut popped = Vec::new();
        while let Some(item) = queue.pop() {
            popped.push(item);
        }

        assert_eq!(popped, vec![1, 2, 4, 6, 8]);
    }
}
