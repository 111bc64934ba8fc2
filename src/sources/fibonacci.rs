use crate::{ProduceError, Producer, Pull, error::non_negative};

/// The Fibonacci sequence `0, 1, 1, 2, 3, 5, …` over `i64`.
///
/// Holds the current and following terms. `None` marks a term that does not
/// fit in an `i64`, which is detected one step early and reported when that
/// term is pulled: F(92) is the last representable term, so an unbounded
/// producer yields 93 values and then fails with a `Computation` error.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let fib = Fibonacci::new(8)?;
/// assert_eq!(fib.handle().to_sequence()?, vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// # Ok::<(), ProduceError>(())
/// ```
#[derive(Debug)]
pub struct Fibonacci {
    current: Option<i64>,
    following: Option<i64>,
    remaining: Option<i64>,
    position: u64,
    done: bool,
}

impl Fibonacci {
    /// The first `count` terms. Fails with `InvalidArgument` if `count` is negative.
    pub fn new(count: i64) -> Result<Self, ProduceError> {
        let count = non_negative("count", count)?;
        Ok(Self {
            remaining: Some(count),
            ..Self::unbounded()
        })
    }

    /// Every representable term, followed by an overflow error.
    pub fn unbounded() -> Self {
        Self {
            current: Some(0),
            following: Some(1),
            remaining: None,
            position: 0,
            done: false,
        }
    }
}

impl Producer for Fibonacci {
    type Item = i64;

    fn pull(&mut self) -> Result<Pull<i64>, ProduceError> {
        if self.done || self.remaining == Some(0) {
            self.done = true;
            return Ok(Pull::Exhausted);
        }
        let Some(value) = self.current else {
            self.done = true;
            return Err(ProduceError::computation(
                self.position,
                format!("fibonacci term {} exceeds i64::MAX", self.position),
            ));
        };

        let after = self.following.and_then(|f| f.checked_add(value));
        self.current = self.following;
        self.following = after;
        self.position += 1;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Ok(Pull::Value(value))
    }
}
