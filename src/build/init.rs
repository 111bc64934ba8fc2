//! Builders for producers that start from a seed value.
//!
//! These yield an initial value before any step function runs, the way a
//! generator emits its seed before entering its loop.

use crate::{ProduceError, Producer, Pull};

/// Produces a seed and then each successor of the previous value.
/// See [`successors`].
pub struct Successors<T, F> {
    // the error, if any, belongs to the value after the last one produced
    next: Result<Option<T>, ProduceError>,
    succ: F,
    position: u64,
}

impl<T, F> Producer for Successors<T, F>
where
    F: FnMut(&T) -> Result<Option<T>, ProduceError>,
{
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        let current = match std::mem::replace(&mut self.next, Ok(None)) {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(Pull::Exhausted),
            Err(err) => return Err(err),
        };
        self.position += 1;
        let position = self.position;
        self.next = (self.succ)(&current).map_err(|err| match err {
            ProduceError::Computation { reason, .. } => ProduceError::computation(position, reason),
            other => other,
        });
        Ok(Pull::Value(current))
    }
}

/// Yield `first`, then repeatedly apply `succ` to the last value.
///
/// `succ` returns `Ok(None)` to end the sequence. It runs as soon as the
/// previous value is handed out, but an error it returns is held back and
/// surfaces on the following pull, re-tagged with the position of the value
/// that could not be computed. A `None` seed gives an empty producer.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let halves = successors(Some(100_u32), |n| Ok(if *n > 1 { Some(n / 2) } else { None }));
/// assert_eq!(halves.handle().to_sequence()?, vec![100, 50, 25, 12, 6, 3, 1]);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn successors<T, F>(first: Option<T>, succ: F) -> Successors<T, F>
where
    F: FnMut(&T) -> Result<Option<T>, ProduceError>,
{
    Successors {
        next: Ok(first),
        succ,
        position: 0,
    }
}

/// Yield `first`, then everything `rest` produces.
pub fn start_with<T, P>(first: T, rest: P) -> crate::compose::Chain<super::Once<T>, P>
where
    P: Producer<Item = T>,
{
    crate::compose::chain(super::once(first), rest)
}
