//! Building producers from scratch
//!
//! This module provides functions and types for creating new producers from
//! closures, seeds, and existing iterators.

mod func;
mod init;

pub use func::{
    Empty, FromFn, FromIter, Once, Repeat, RepeatWith, Sentinel, Unfold, empty, from_fn,
    from_iter, once, repeat, repeat_with, sentinel, unfold,
};
pub use init::{Successors, start_with, successors};
