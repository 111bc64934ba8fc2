//! Functions for consuming producers.
//!
//! The consumer side of the pull contract: loops that call `pull` until the
//! producer is exhausted or the consumer decides to stop. These are the place
//! to bound an infinite producer.

use std::ops::ControlFlow;

use crate::{Handle, ProduceError, Producer, Pull};

/// Feed every value to `consumer` until the producer is exhausted or the
/// consumer breaks.
///
/// Returns how many values were handed to the consumer.
///
/// ```rust
/// use std::ops::ControlFlow;
/// use lazyseq::prelude::*;
///
/// let mut seen = Vec::new();
/// let count = drive(Fibonacci::unbounded(), |v| {
///     if v > 20 {
///         return ControlFlow::Break(());
///     }
///     seen.push(v);
///     ControlFlow::Continue(())
/// })?;
/// assert_eq!(seen, vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// assert_eq!(count, 9);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn drive<P, C>(mut producer: P, mut consumer: C) -> Result<usize, ProduceError>
where
    P: Producer,
    C: FnMut(P::Item) -> ControlFlow<()>,
{
    let mut handed = 0;
    while let Pull::Value(value) = producer.pull()? {
        handed += 1;
        if consumer(value).is_break() {
            break;
        }
    }
    Ok(handed)
}

/// Pull at most `n` values, leaving the producer ready to continue.
///
/// `n` is only an upper bound; the result grows with the values actually
/// produced.
pub fn first_n<P>(producer: &mut P, n: usize) -> Result<Vec<P::Item>, ProduceError>
where
    P: Producer + ?Sized,
{
    let mut values = Vec::new();
    while values.len() < n {
        match producer.pull()? {
            Pull::Value(value) => values.push(value),
            Pull::Exhausted => break,
        }
    }
    Ok(values)
}

/// Drain a producer into a `Vec` through a fused [`Handle`].
///
/// Shorthand for `Handle::new(producer).to_sequence()`.
pub fn collect<P>(producer: P) -> Result<Vec<P::Item>, ProduceError>
where
    P: Producer,
{
    Handle::new(producer).to_sequence()
}
