// Bounded stream service
// Newest-first, capacity-limited record buffer with oldest-first eviction

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct BoundedStream<T> {
    capacity: usize,
    entries: VecDeque<T>,
}

impl<T: Clone> BoundedStream<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Seeds the stream; `entries` must already be newest-first.
    pub fn with_entries(capacity: usize, entries: Vec<T>) -> Self {
        let mut entries: VecDeque<T> = entries.into();
        entries.truncate(capacity);
        Self { capacity, entries }
    }

    /// Prepends the record, evicting the oldest entries past capacity.
    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Returns a newest-first copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
