mod lock;
pub(crate) use lock::{into_inner, lock, wait};
