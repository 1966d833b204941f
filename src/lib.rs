#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[doc(hidden)]
macro_rules! has_any_feature {
    ($($item:item)*) => {
        $(
            #[cfg(any(doc, feature = "queue", feature = "stack"))]
            $item
        )*
    }
}

has_any_feature! {

// loom integration
#[doc(hidden)]
macro_rules! cfg_loom {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "loom")]
            $item
        )*
    };
}
#[doc(hidden)]
macro_rules! cfg_not_loom {
    ($($item:item)*) => {
        $(
            #[cfg(not(feature = "loom"))]
            $item
        )*
    };
}

#[doc(hidden)]
mod sync;
//loom integration finished.

mod trace;

/// A module containing the error types used by the library.
pub mod error;

/// A module containing the blocking Multi Producer Multi Consumer FIFO queue.
#[cfg(any(doc, feature = "queue"))]
pub mod queue;

/// A module containing the Multi Producer Multi Consumer LIFO stack.
#[cfg(any(doc, feature = "stack"))]
pub mod stack;

mod util;

}

#[cfg(any(doc, feature = "queue"))]
#[doc(inline)]
pub use queue::ConcurrentQueue;

#[cfg(any(doc, feature = "stack"))]
#[doc(inline)]
pub use stack::ConcurrentStack;
