//! Bounded LIFO stack with an explicit growth/shrink policy.

use crate::domain::error::DomainError;

pub const INITIAL_CAPACITY: usize = 16;
pub const MAX_CAPACITY: usize = 32768;

/// A stack holding at most [`MAX_CAPACITY`] items.
///
/// Storage starts at [`INITIAL_CAPACITY`], doubles when full, and halves
/// once fewer than a quarter of the slots are in use. It never shrinks
/// below the initial capacity. Deliberately not `Clone`.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == MAX_CAPACITY
    }

    /// Logical capacity under the growth policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, item: T) -> Result<(), DomainError> {
        if self.is_full() {
            return Err(DomainError::StackFull {
                capacity: MAX_CAPACITY,
            });
        }
        if self.items.len() == self.capacity {
            self.reallocate(self.capacity * 2);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop()?;
        if self.items.len() < self.capacity / 4 && self.capacity > INITIAL_CAPACITY {
            self.reallocate(self.capacity / 2);
        }
        Some(item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn reallocate(&mut self, new_capacity: usize) {
        if !(INITIAL_CAPACITY..=MAX_CAPACITY).contains(&new_capacity) {
            return;
        }
        if new_capacity > self.items.capacity() {
            self.items.reserve_exact(new_capacity - self.items.len());
        } else {
            self.items.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }
}
