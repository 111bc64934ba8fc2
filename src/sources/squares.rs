use crate::{ProduceError, Producer, Pull, error::non_negative};

/// Squares of the even integers in `[start, end)`.
///
/// The square is computed when its value is pulled; a square that does not fit
/// in an `i64` fails that pull with a `Computation` error and ends the sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = EvenSquares::new(10)?;
/// assert_eq!(squares.handle().to_sequence()?, vec![0, 4, 16, 36, 64]);
/// # Ok::<(), ProduceError>(())
/// ```
#[derive(Debug)]
pub struct EvenSquares {
    cursor: Option<i64>,
    end: i64,
    position: u64,
}

impl EvenSquares {
    /// Even squares over `[0, end)`. Fails with `InvalidArgument` if `end` is negative.
    pub fn new(end: i64) -> Result<Self, ProduceError> {
        Self::between(0, non_negative("end", end)?)
    }

    /// Even squares over `[start, end)`. Fails with `InvalidArgument` if
    /// `start > end`.
    pub fn between(start: i64, end: i64) -> Result<Self, ProduceError> {
        if start > end {
            return Err(ProduceError::invalid_argument(
                "start",
                format!("must be <= end ({end}), got {start}"),
            ));
        }
        let first_even = if start.rem_euclid(2) == 0 {
            Some(start)
        } else {
            start.checked_add(1)
        };
        Ok(Self {
            cursor: first_even,
            end,
            position: 0,
        })
    }
}

impl Producer for EvenSquares {
    type Item = i64;

    fn pull(&mut self) -> Result<Pull<i64>, ProduceError> {
        let Some(x) = self.cursor.filter(|x| *x < self.end) else {
            self.cursor = None;
            return Ok(Pull::Exhausted);
        };
        let Some(square) = x.checked_mul(x) else {
            self.cursor = None;
            return Err(ProduceError::computation(
                self.position,
                format!("square of {x} exceeds i64::MAX"),
            ));
        };
        self.cursor = x.checked_add(2);
        self.position += 1;
        Ok(Pull::Value(square))
    }
}
