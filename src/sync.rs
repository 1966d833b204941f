#![allow(unused_imports)]
cfg_loom! {
    pub(crate) use loom::sync::{Condvar, Mutex, MutexGuard};
}

cfg_not_loom! {
    pub(crate) use std::sync::{Condvar, Mutex, MutexGuard};
}

pub(crate) use std::sync::{LockResult, PoisonError};
