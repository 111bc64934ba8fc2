use crate::{ProduceError, Producer, Pull};

/// Integers from `start` toward `end` (exclusive) in increments of `step`.
///
/// A positive step runs while the cursor is below `end`, a negative step while
/// it is above. Stepping past the range of `i64` ends the sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(StepRange::new(0, 10, 3)?.handle().to_sequence()?, vec![0, 3, 6, 9]);
/// assert_eq!(StepRange::new(5, 0, -2)?.handle().to_sequence()?, vec![5, 3, 1]);
/// # Ok::<(), ProduceError>(())
/// ```
#[derive(Debug)]
pub struct StepRange {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl StepRange {
    /// Fails with `InvalidArgument` if `step` is zero.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, ProduceError> {
        if step == 0 {
            return Err(ProduceError::invalid_argument("step", "must not be zero"));
        }
        Ok(Self {
            next: Some(start),
            end,
            step,
        })
    }
}

impl Producer for StepRange {
    type Item = i64;

    fn pull(&mut self) -> Result<Pull<i64>, ProduceError> {
        let Some(current) = self.next else {
            return Ok(Pull::Exhausted);
        };
        let in_range = if self.step > 0 {
            current < self.end
        } else {
            current > self.end
        };
        if !in_range {
            self.next = None;
            return Ok(Pull::Exhausted);
        }
        self.next = current.checked_add(self.step);
        Ok(Pull::Value(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn collect(start: i64, end: i64, step: i64) -> Vec<i64> {
        StepRange::new(start, end, step)
            .unwrap()
            .handle()
            .to_sequence()
            .unwrap()
    }

    #[test]
    fn test_positive_step() {
        assert_eq!(collect(1, 10, 2), vec![1, 3, 5, 7, 9]);
        assert_eq!(collect(0, 4, 1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_negative_step() {
        assert_eq!(collect(10, 0, -3), vec![10, 7, 4, 1]);
    }

    #[test]
    fn test_empty_when_direction_disagrees() {
        assert!(collect(0, 10, -1).is_empty());
        assert!(collect(10, 0, 1).is_empty());
        assert!(collect(3, 3, 1).is_empty());
    }

    #[test]
    fn test_zero_step_rejected() {
        assert_eq!(
            StepRange::new(0, 10, 0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_stops_instead_of_overflowing() {
        assert_eq!(
            collect(i64::MAX - 3, i64::MAX, 2),
            vec![i64::MAX - 3, i64::MAX - 1]
        );

        let mut range = StepRange::new(i64::MAX - 1, i64::MAX, 5).unwrap();
        assert_eq!(range.pull().unwrap(), Pull::Value(i64::MAX - 1));
        assert_eq!(range.pull().unwrap(), Pull::Exhausted);
        assert_eq!(range.pull().unwrap(), Pull::Exhausted);
    }
}
