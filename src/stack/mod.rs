use crate::error::EmptyError;
use crate::sync::Mutex;
use crate::trace::debug;
use crate::util::{into_inner, lock};

use std::fmt;

/// An unbounded Multi Producer Multi Consumer LIFO stack.
///
/// Shares the locking discipline of [`ConcurrentQueue`](crate::queue::ConcurrentQueue),
/// but never blocks: popping from an empty stack fails with an [`EmptyError`].
///
/// # Example
///
/// ```
/// use locked_qs::ConcurrentStack;
/// use locked_qs::error::EmptyError;
///
/// let stack = ConcurrentStack::new();
/// assert_eq!(stack.pop(), Err(EmptyError {}));
///
/// stack.push(5);
/// assert_eq!(stack.pop(), Ok(5));
/// assert_eq!(stack.pop(), Err(EmptyError {}));
/// ```
pub struct ConcurrentStack<T> {
    items: Mutex<Vec<T>>,
}

impl<T> ConcurrentStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Pushes `item` onto the top of the stack.
    pub fn push(&self, item: T) {
        lock(&self.items).push(item);
    }

    /// Removes the element at the top of the stack.
    ///
    /// Returns an [`EmptyError`] if the stack has no elements at the time of the call.
    pub fn pop(&self) -> Result<T, EmptyError> {
        let popped = lock(&self.items).pop();
        popped.ok_or_else(|| {
            debug!("pop from an empty stack");
            EmptyError {}
        })
    }

    /// Like [`pop`](ConcurrentStack::pop), but stores the element in `out`.
    ///
    /// `out` is left untouched if an [`EmptyError`] is returned.
    pub fn pop_into(&self, out: &mut T) -> Result<(), EmptyError> {
        *out = self.pop()?;
        Ok(())
    }

    /// Checks if the stack is empty.
    ///
    /// # Note
    ///
    /// The result is only a snapshot. Checking for emptiness before calling
    /// [`pop`](ConcurrentStack::pop) doesn't guarantee the pop will succeed
    /// if other threads pop as well.
    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }

    /// Returns the number of elements on the stack at the time of the call.
    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    /// Consumes the stack, returning the remaining elements bottom first.
    pub fn into_inner(self) -> Vec<T> {
        into_inner(self.items)
    }
}

impl<T> Default for ConcurrentStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ConcurrentStack<T> {
    /// Copies the stack while holding only the source's lock.
    fn clone(&self) -> Self {
        Self::from(lock(&self.items).clone())
    }
}

impl<T> From<Vec<T>> for ConcurrentStack<T> {
    /// Creates a stack whose top is the last element of `items`.
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl<T> fmt::Debug for ConcurrentStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentStack")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
