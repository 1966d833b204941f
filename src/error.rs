use std::error::Error;
use std::fmt;

/// Error for the [`pop`](crate::stack::ConcurrentStack::pop) and
/// [`pop_into`](crate::stack::ConcurrentStack::pop_into) methods of a
/// [`ConcurrentStack`](crate::stack::ConcurrentStack).
///
/// This error is returned when the container held no elements at the time of the call.
/// It carries no payload, and no default value is ever substituted for it.
///
/// The [`ConcurrentQueue`](crate::queue::ConcurrentQueue) never returns this error;
/// its non-blocking pops report an empty queue with `None` or `false` instead.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct EmptyError {}

impl Error for EmptyError {}

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("popping from an empty container")
    }
}
