use crate::sync::{Condvar, Mutex};
use crate::trace::trace;
use crate::util::{into_inner, lock, wait};

use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::ptr;

/// An unbounded, blocking Multi Producer Multi Consumer FIFO queue.
///
/// Any number of threads may [`push`](ConcurrentQueue::push) and pop at the same time
/// through a shared reference. Consumers either wait for an element with
/// [`pop_blocking`](ConcurrentQueue::pop_blocking) or poll with
/// [`try_pop`](ConcurrentQueue::try_pop).
///
/// Pushing never blocks beyond brief lock contention, since the queue has no capacity limit.
///
/// # Example
///
/// ```
/// use locked_qs::ConcurrentQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(ConcurrentQueue::new());
/// let producer = {
///     let queue = queue.clone();
///     thread::spawn(move || {
///         for i in 0..3 {
///             queue.push(i);
///         }
///     })
/// };
///
/// assert_eq!(queue.pop_blocking(), 0);
/// assert_eq!(queue.pop_blocking(), 1);
/// assert_eq!(queue.pop_blocking(), 2);
/// producer.join().unwrap();
/// assert_eq!(queue.try_pop(), None);
/// ```
pub struct ConcurrentQueue<T> {
    items: Mutex<VecDeque<T>>,
    // signalled whenever `items` may have become non-empty
    not_empty: Condvar,
}

impl<T> ConcurrentQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::from(VecDeque::new())
    }

    /// Appends `item` to the back of the queue and wakes one blocked consumer, if any.
    pub fn push(&self, item: T) {
        lock(&self.items).push_back(item);
        self.not_empty.notify_one();
    }

    /// Removes the element at the front of the queue.
    ///
    /// If the queue is empty, blocks until a producer pushes an element.
    /// When several consumers are blocked, it's unspecified which one receives
    /// a newly pushed element; the others keep waiting.
    ///
    /// There is no timeout, so this method blocks forever if nothing is pushed.
    /// Producers can wake consumers deliberately by pushing a sentinel value.
    pub fn pop_blocking(&self) -> T {
        let mut items = lock(&self.items);
        let mut woken = false;
        loop {
            match items.pop_front() {
                Some(item) => return item,
                None if woken => {
                    trace!("consumer woke up to an empty queue, waiting again");
                }
                None => {}
            }
            items = wait(&self.not_empty, items);
            woken = true;
        }
    }

    /// Like [`pop_blocking`](ConcurrentQueue::pop_blocking), but stores the
    /// element in `out` instead of returning it.
    ///
    /// The previous value of `out` is dropped after the queue has been unlocked.
    pub fn pop_blocking_into(&self, out: &mut T) {
        *out = self.pop_blocking();
    }

    /// Removes the element at the front of the queue without blocking.
    ///
    /// Returns `None` if the queue is empty, in which case the queue is left unchanged.
    pub fn try_pop(&self) -> Option<T> {
        lock(&self.items).pop_front()
    }

    /// Like [`try_pop`](ConcurrentQueue::try_pop), but stores the element in `out`.
    ///
    /// Returns `false` and leaves `out` untouched if the queue is empty.
    pub fn try_pop_into(&self, out: &mut T) -> bool {
        match self.try_pop() {
            Some(item) => {
                *out = item;
                true
            }
            None => false,
        }
    }

    /// Checks if the queue is empty.
    ///
    /// # Note
    ///
    /// Other threads may push or pop right after the check, so the result
    /// is only a snapshot and may already be stale when it's returned.
    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }

    /// Returns the number of queued elements.
    ///
    /// Like [`is_empty`](ConcurrentQueue::is_empty), this is only a snapshot.
    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    /// Exchanges the contents of `self` and `other`.
    ///
    /// Both locks are held for the exchange, so no thread observes a partial swap.
    /// Locks are always taken in address order, so a concurrent `other.swap(self)`
    /// can't deadlock with this call. Swapping a queue with itself does nothing.
    ///
    /// Consumers blocked on either queue are woken if it received elements.
    pub fn swap(&self, other: &Self) {
        if ptr::eq(self, other) {
            return;
        }
        let (first, second) = if (self as *const Self) < (other as *const Self) {
            (self, other)
        } else {
            (other, self)
        };

        let (first_filled, second_filled) = {
            let mut first_items = lock(&first.items);
            let mut second_items = lock(&second.items);
            trace!(
                first = ?(first as *const Self),
                second = ?(second as *const Self),
                "swapping queue contents"
            );
            mem::swap(&mut *first_items, &mut *second_items);
            (!first_items.is_empty(), !second_items.is_empty())
        };

        // any number of elements may have arrived at once
        if first_filled {
            first.not_empty.notify_all();
        }
        if second_filled {
            second.not_empty.notify_all();
        }
    }

    /// Moves all elements into a new queue, leaving `self` empty.
    ///
    /// Only `self`'s lock is taken; the new queue isn't shared with anyone yet.
    pub fn take(&self) -> Self {
        Self::from(mem::take(&mut *lock(&self.items)))
    }

    /// Replaces the contents of `self` with a copy of `other`'s contents.
    ///
    /// `other` is copied under its own lock first, and the copy is then
    /// [`swap`](ConcurrentQueue::swap)ped into `self`. The previous contents
    /// of `self` are dropped after both queues have been unlocked.
    pub fn assign_from(&self, other: &Self)
    where
        T: Clone,
    {
        let copy = other.clone();
        self.swap(&copy);
    }

    /// Consumes the queue, returning the remaining elements in FIFO order.
    pub fn into_inner(self) -> VecDeque<T> {
        into_inner(self.items)
    }
}

/// Exchanges the contents of `a` and `b`.
///
/// See [`ConcurrentQueue::swap`].
pub fn swap<T>(a: &ConcurrentQueue<T>, b: &ConcurrentQueue<T>) {
    a.swap(b);
}

impl<T> Default for ConcurrentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ConcurrentQueue<T> {
    /// Copies the queue while holding only the source's lock.
    fn clone(&self) -> Self {
        Self::from(lock(&self.items).clone())
    }
}

impl<T> From<VecDeque<T>> for ConcurrentQueue<T> {
    /// Creates a queue whose front is the front of `items`.
    fn from(items: VecDeque<T>) -> Self {
        Self {
            items: Mutex::new(items),
            not_empty: Condvar::new(),
        }
    }
}

impl<T> FromIterator<T> for ConcurrentQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<VecDeque<T>>())
    }
}

impl<'a, T> Extend<T> for &'a ConcurrentQueue<T> {
    /// Pushes all elements of `iter` under a single lock acquisition.
    ///
    /// The iterator is drained before the lock is taken.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut batch = iter.into_iter().collect::<VecDeque<T>>();
        let added = batch.len();
        lock(&self.items).append(&mut batch);
        match added {
            0 => {}
            1 => self.not_empty.notify_one(),
            _ => self.not_empty.notify_all(),
        }
    }
}

impl<T> Extend<T> for ConcurrentQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut shared: &Self = self;
        shared.extend(iter);
    }
}

impl<T> fmt::Debug for ConcurrentQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentQueue")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
