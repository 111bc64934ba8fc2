//! Concrete producers over `i64`.
//!
//! Each source is a small state machine: constructing one validates its
//! parameters and captures a cursor, and nothing is computed until the first
//! pull. Every source is fused; after `Exhausted` or an error it reports
//! `Exhausted` forever.

mod counter;
mod fibonacci;
mod range;
mod squares;

pub use counter::{CountDown, Counter};
pub use fibonacci::Fibonacci;
pub use range::StepRange;
pub use squares::EvenSquares;
