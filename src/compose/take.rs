use crate::{ProduceError, Producer, Pull};

/// Yields at most a fixed number of values. Created via `take()` or
/// [`Producer::take`].
pub struct Take<P> {
    remaining: usize,
    producer: P,
}

/// Bound a producer to at most `n` values.
///
/// Once `n` values have been handed out the wrapped producer is not pulled
/// again, which makes this the usual way to consume an infinite producer.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let first = take(5, Fibonacci::unbounded());
/// assert_eq!(first.handle().to_sequence()?, vec![0, 1, 1, 2, 3]);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn take<P>(n: usize, producer: P) -> Take<P> {
    Take {
        remaining: n,
        producer,
    }
}

impl<P> Producer for Take<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<P::Item>, ProduceError> {
        if self.remaining == 0 {
            return Ok(Pull::Exhausted);
        }
        match self.producer.pull()? {
            Pull::Value(v) => {
                self.remaining -= 1;
                Ok(Pull::Value(v))
            }
            Pull::Exhausted => {
                self.remaining = 0;
                Ok(Pull::Exhausted)
            }
        }
    }
}

/// Yields values while a predicate holds. Created via `take_while()` or
/// [`Producer::take_while`].
pub struct TakeWhile<P, F> {
    predicate: F,
    producer: P,
    done: bool,
}

/// Yield values until the first one for which `predicate` returns `false`.
///
/// The failing value is pulled from the wrapped producer and dropped.
pub fn take_while<P, F>(predicate: F, producer: P) -> TakeWhile<P, F> {
    TakeWhile {
        predicate,
        producer,
        done: false,
    }
}

impl<P, F> Producer for TakeWhile<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<P::Item>, ProduceError> {
        if self.done {
            return Ok(Pull::Exhausted);
        }
        match self.producer.pull()? {
            Pull::Value(v) if (self.predicate)(&v) => Ok(Pull::Value(v)),
            _ => {
                self.done = true;
                Ok(Pull::Exhausted)
            }
        }
    }
}
