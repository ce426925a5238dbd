//! Binary min-heap with a caller-supplied comparator.
//!
//! The heap never looks inside its entries: ordering comes entirely from the
//! comparator, which must be a strict weak order. Entries that compare equal
//! pop in an unspecified relative order.

use std::cmp::Ordering;

/// Plain function comparator, the default for [`PriorityQueue`].
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A binary min-heap stored in a dense zero-based `Vec`.
///
/// The backing storage never shrinks on its own, so a queue reused across
/// searches stops allocating once it has seen its peak size.
pub struct PriorityQueue<T, C = Comparator<T>> {
    data: Vec<T>,
    compare: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue ordered by `T`'s own [`Ord`] impl.
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue that orders entries with `compare`.
    /// The entry for which `compare` reports [`Ordering::Less`] pops first.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Insert an entry. O(log n).
    pub fn push(&mut self, entry: T) {
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the minimum entry, or `None` when empty. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        // Moves the last entry into the root slot.
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// The minimum entry without removing it. O(1).
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&self.data[index], &self.data[parent]) != Ordering::Less {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < len && (self.compare)(&self.data[right], &self.data[left]) == Ordering::Less
            {
                best = right;
            }
            if (self.compare)(&self.data[best], &self.data[index]) != Ordering::Less {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("peek", &self.data.first())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    #[test]
    fn test_basic_push_pop() {
        let mut q = PriorityQueue::new();
        q.push(3);
        q.push(1);
        q.push(2);

        assert_eq!(q.len(), 3);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(3));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut q: PriorityQueue<u32> = PriorityQueue::default();
        assert_eq!(q.peek(), None);
        assert_eq!(q.pop(), None);
        q.push(7);
        assert_eq!(q.pop(), Some(7));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_custom_comparator_on_payload_field() {
        #[derive(Debug, PartialEq)]
        struct Entry {
            cost: f64,
            index: usize,
        }

        let mut q = PriorityQueue::with_comparator(|a: &Entry, b: &Entry| {
            a.cost.total_cmp(&b.cost)
        });
        q.push(Entry { cost: 2.5, index: 0 });
        q.push(Entry { cost: 0.5, index: 1 });
        q.push(Entry { cost: 1.0, index: 2 });

        let order: Vec<usize> = std::iter::from_fn(|| q.pop()).map(|e| e.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_max_heap_via_reversed_comparator() {
        let mut q = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for v in [4, 9, -2, 9, 0] {
            q.push(v);
        }
        assert_eq!(q.pop(), Some(9));
        assert_eq!(q.pop(), Some(9));
        assert_eq!(q.pop(), Some(4));
    }

    #[test]
    fn test_clear_keeps_working() {
        let mut q = PriorityQueue::new();
        q.push(5);
        q.push(4);
        q.clear();
        assert!(q.is_empty());
        q.push(10);
        assert_eq!(q.pop(), Some(10));
    }

    #[test]
    fn test_random_pushes_pop_non_decreasing() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let mut q = PriorityQueue::new();
            let n = rng.random_range(0..200usize);
            for _ in 0..n {
                q.push(rng.random_range(-50..50i32));
            }
            let mut popped = Vec::with_capacity(n);
            while let Some(v) = q.pop() {
                popped.push(v);
            }
            assert_eq!(popped.len(), n);
            assert!(popped.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut q = PriorityQueue::new();
        q.push(5);
        q.push(1);
        assert_eq!(q.pop(), Some(1));
        q.push(3);
        q.push(0);
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(3));
        q.push(2);
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(5));
        assert_eq!(q.pop(), None);
    }
}
