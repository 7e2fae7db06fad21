//! Conversation memory.
//!
//! [`Memory`] is an append-only log of [`Message`]s. When a capacity is
//! set, the oldest entries are evicted so the log never grows past it.

use crate::Message;
use std::{collections::VecDeque, fmt, num::NonZeroUsize};

/// Ordered message log, optionally bounded.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    capacity: Option<NonZeroUsize>,
    messages: VecDeque<Message>,
}

impl Memory {
    /// Create a memory with an optional capacity (`None` = unbounded).
    pub fn new(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            capacity,
            messages: VecDeque::new(),
        }
    }

    /// Create a memory that grows without bound.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a memory that keeps at most `capacity` messages.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self::new(Some(capacity))
    }

    /// The capacity, if bounded.
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Change the capacity, evicting the oldest entries past the new bound.
    pub fn set_capacity(&mut self, capacity: Option<NonZeroUsize>) {
        self.capacity = capacity;
        self.trim();
    }

    /// Append a message, evicting the oldest entries past capacity.
    pub fn add(&mut self, message: Message) {
        self.messages.push_back(message);
        self.trim();
    }

    fn trim(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        let excess = self.messages.len().saturating_sub(capacity.get());
        if excess > 0 {
            self.messages.drain(..excess);
            tracing::trace!(excess, capacity = capacity.get(), "memory trimmed");
        }
    }

    /// Snapshot of every stored message, oldest first.
    pub fn all(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    /// The last `n` messages in original order.
    ///
    /// Returns everything when `n` exceeds the stored count and nothing
    /// when `n` is zero.
    pub fn recent(&self, n: usize) -> Vec<Message> {
        let skip = self.messages.len().saturating_sub(n);
        self.messages.iter().skip(skip).cloned().collect()
    }

    /// Remove every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate the stored messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memory({} messages)", self.messages.len())
    }
}
