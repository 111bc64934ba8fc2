use crate::{ProduceError, Producer, Pull, error::non_negative};

/// Counts up from zero: `0, 1, …, bound - 1`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(Counter::new(4)?.handle().to_sequence()?, vec![0, 1, 2, 3]);
/// assert!(Counter::new(-1).is_err());
/// # Ok::<(), ProduceError>(())
/// ```
#[derive(Debug)]
pub struct Counter {
    next: i64,
    bound: i64,
}

impl Counter {
    /// Fails with `InvalidArgument` if `bound` is negative.
    pub fn new(bound: i64) -> Result<Self, ProduceError> {
        Ok(Self {
            next: 0,
            bound: non_negative("bound", bound)?,
        })
    }
}

impl Producer for Counter {
    type Item = i64;

    fn pull(&mut self) -> Result<Pull<i64>, ProduceError> {
        if self.next >= self.bound {
            return Ok(Pull::Exhausted);
        }
        let value = self.next;
        self.next += 1;
        Ok(Pull::Value(value))
    }
}

/// Counts down to zero: `start, start - 1, …, 0`.
#[derive(Debug)]
pub struct CountDown {
    current: i64,
}

impl CountDown {
    /// Fails with `InvalidArgument` if `start` is negative.
    pub fn new(start: i64) -> Result<Self, ProduceError> {
        Ok(Self {
            current: non_negative("start", start)?,
        })
    }
}

impl Producer for CountDown {
    type Item = i64;

    fn pull(&mut self) -> Result<Pull<i64>, ProduceError> {
        if self.current < 0 {
            return Ok(Pull::Exhausted);
        }
        let value = self.current;
        self.current -= 1;
        Ok(Pull::Value(value))
    }
}
