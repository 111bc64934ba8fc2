//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BoxProducer, ErrorKind, Handle, Phase, ProduceError, Producer, Pull};

// Most common constructors
pub use crate::build::{
    empty, from_fn, from_iter, once, repeat, repeat_with, sentinel, start_with, successors,
    unfold,
};

// Sources
pub use crate::sources::{CountDown, Counter, EvenSquares, Fibonacci, StepRange};

// Composition
pub use crate::compose::{chain, filter, inspect, map, take, take_while, try_map, zip};

// Consuming
pub use crate::drive::{collect, drive, first_n};
