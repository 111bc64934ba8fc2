//! # lazyseq: Pull-Based Lazy Sequences
//!
//! Build sequences whose values are computed one at a time, on demand, by
//! explicit state machines rather than coroutines.
//!
//! ## Core Types
//!
//! - **[`Producer`]**: a stateful computation that hands out one value per [`pull`](Producer::pull)
//! - **[`Pull<T>`]**: the outcome of a pull, `Value(T)` or `Exhausted`
//! - **[`Handle<P>`]**: owns one producer and enforces the fresh → producing → exhausted lifecycle
//!
//! ## Key Properties
//!
//! - **Lazy**: constructing a producer only validates parameters and captures state
//! - **Fused**: once a handle reports `Exhausted`, it always does
//! - **Single use**: [`Handle::to_sequence`] consumes the handle; replaying means creating a new one
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let mut handle = Counter::new(4)?.handle();
//! assert_eq!(handle.pull()?, Pull::Value(0));
//! assert_eq!(handle.drain()?, vec![1, 2, 3]);
//! assert_eq!(handle.pull()?, Pull::Exhausted);
//! assert_eq!(handle.pull()?, Pull::Exhausted);
//! # Ok::<(), ProduceError>(())
//! ```
//!
//! ## Common Functions
//!
//! **Building Producers:**
//! - [`from_fn(f)`](build::from_fn) - Call a closure on every pull
//! - [`unfold(state, f)`](build::unfold) - Thread explicit state through a step function
//! - [`successors(seed, f)`](build::successors) - Yield a seed, then each successor
//! - [`sentinel(f, stop)`](build::sentinel) - Call a closure until it returns `stop`
//!
//! **Sources:** [`Counter`](sources::Counter), [`CountDown`](sources::CountDown),
//! [`StepRange`](sources::StepRange), [`Fibonacci`](sources::Fibonacci),
//! [`EvenSquares`](sources::EvenSquares)
//!
//! **Consuming:**
//! - [`Handle::to_sequence`] - Drain everything, consuming the handle
//! - [`drive(producer, consumer)`](drive::drive) - Push values to a consumer until it breaks
//! - [`Producer::into_values`] - Use a producer as a standard iterator

pub mod build;
pub mod compose;
pub mod config;
pub mod drive;
mod error;
mod handle;
pub mod iter;
pub mod prelude;
mod producer;
mod pull;
pub mod sequential;
pub mod sources;

pub use error::{ErrorKind, ProduceError};
pub use handle::{Handle, Phase};
pub use producer::{BoxProducer, Producer};
pub use pull::Pull;
