//! Fixed-capacity ring buffer.
use std::iter::{Chain, FusedIterator};
use std::slice;

/// A fixed-capacity buffer that evicts its oldest item when a new item is pushed while full.
///
/// Storage is allocated once on creation and never grows.
/// Items are addressed by index starting from the oldest item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RingBuffer<T> {
    items: Vec<T>,
    capacity: usize,
    /// Index in `items` of the oldest item. Always `0` while the buffer is not full.
    head: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer with the given capacity.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Append an item, evicting and returning the oldest item if the buffer is full.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.is_full() {
            let evicted = std::mem::replace(&mut self.items[self.head], item);
            self.head = (self.head + 1) % self.capacity;
            Some(evicted)
        } else {
            self.items.push(item);
            None
        }
    }

    /// Remove all items. Keeps the allocated storage.
    pub fn clear(&mut self) {
        self.items.clear();
        self.head = 0;
    }

    /// Get an item by its age order; index `0` is the oldest item.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.items.len() {
            Some(&self.items[(self.head + index) % self.items.len()])
        } else {
            None
        }
    }

    /// The most recently pushed item.
    pub fn newest(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate over the items from oldest to newest.
    pub fn iter(&self) -> Iter<T> {
        let (newer, older) = self.items.split_at(self.head);
        Iter {
            inner: older.iter().chain(newer.iter()),
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Replace the contents with `capacity` copies of `item`.
    pub fn fill(&mut self, item: T) {
        self.clear();
        self.items.resize(self.capacity, item);
    }

    /// Copy the items into a vector ordered from oldest to newest.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the items of a [`RingBuffer`] from oldest to newest.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty() {
        let buffer = RingBuffer::<u8>::with_capacity(3);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.newest(), None);
        assert_eq!(buffer.iter().next(), None);
    }

    #[test]
    #[should_panic]
    fn zero_capacity() {
        let _ = RingBuffer::<u8>::with_capacity(0);
    }

    #[test]
    fn push_below_capacity() {
        let mut buffer = RingBuffer::with_capacity(3);
        assert_eq!(buffer.push(1), None);
        assert_eq!(buffer.push(2), None);
        assert_eq!(buffer.to_vec(), vec![1, 2]);
        assert!(!buffer.is_full());
    }

    #[test]
    fn push_evicts_oldest() {
        let mut buffer = RingBuffer::with_capacity(3);
        for i in 0..3 {
            buffer.push(i);
        }
        assert_eq!(buffer.push(3), Some(0));
        assert_eq!(buffer.push(4), Some(1));
        assert_eq!(buffer.to_vec(), vec![2, 3, 4]);
        assert_eq!(buffer.newest(), Some(&4));
    }

    #[rstest]
    fn len_never_exceeds_capacity(
        #[values(1, 2, 5)] capacity: usize,
        #[values(0, 1, 7, 20)] num_pushes: usize,
    ) {
        let mut buffer = RingBuffer::with_capacity(capacity);
        for i in 0..num_pushes {
            buffer.push(i);
            assert!(buffer.len() <= capacity);
        }
        let expected: Vec<_> = (num_pushes.saturating_sub(capacity)..num_pushes).collect();
        assert_eq!(buffer.to_vec(), expected);
    }

    #[test]
    fn get_by_age() {
        let mut buffer = RingBuffer::with_capacity(2);
        for i in 0..5 {
            buffer.push(i);
        }
        assert_eq!(buffer.get(0), Some(&3));
        assert_eq!(buffer.get(1), Some(&4));
        assert_eq!(buffer.get(2), None);
    }

    #[test]
    fn fill_replaces_contents() {
        let mut buffer = RingBuffer::with_capacity(3);
        buffer.push(7);
        buffer.push(8);
        buffer.push(9);
        buffer.push(10);
        buffer.fill(0);
        assert_eq!(buffer.to_vec(), vec![0, 0, 0]);
        buffer.push(1);
        assert_eq!(buffer.to_vec(), vec![0, 0, 1]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = RingBuffer::with_capacity(2);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.clear();
        assert!(buffer.is_empty());
        buffer.push(4);
        assert_eq!(buffer.to_vec(), vec![4]);
    }

    #[test]
    fn iter_rev() {
        let mut buffer = RingBuffer::with_capacity(3);
        for i in 0..4 {
            buffer.push(i);
        }
        let reversed: Vec<_> = buffer.iter().rev().copied().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
        assert_eq!(buffer.iter().len(), 3);
    }
}
