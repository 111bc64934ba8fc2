//! Running multiple producers back to back.
//!
//! This module provides the [`Many`] combinator for draining an array of
//! producers in order, as if they were one sequence.

use crate::{ProduceError, Producer, Pull};

/// Run producers one after another, moving on when each is exhausted.
///
/// All producers must have the same type, which typically means using the same
/// source type or boxing them as [`BoxProducer`](crate::BoxProducer).
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
/// use lazyseq::sequential::many;
///
/// let stage = many([Counter::new(2)?, Counter::new(0)?, Counter::new(3)?]);
/// assert_eq!(stage.handle().to_sequence()?, vec![0, 1, 0, 1, 2]);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn many<const N: usize, P>(producers: [P; N]) -> Many<N, P>
where
    P: Producer,
{
    Many {
        states: producers.map(Some),
        index: 0,
    }
}

/// Drains an array of producers sequentially.
///
/// Created via [`many`]. Each producer is dropped as soon as it is exhausted.
/// An error from any producer ends the whole sequence.
pub struct Many<const N: usize, P> {
    states: [Option<P>; N],
    index: usize,
}

impl<const N: usize, P> Producer for Many<N, P>
where
    P: Producer,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        loop {
            match self.states.get_mut(self.index) {
                Some(Some(p)) => match p.pull() {
                    Ok(Pull::Value(v)) => return Ok(Pull::Value(v)),
                    Ok(Pull::Exhausted) => {
                        self.states[self.index] = None;
                        self.index += 1;
                    }
                    Err(err) => {
                        self.states = std::array::from_fn(|_| None);
                        self.index = N;
                        return Err(err);
                    }
                },
                Some(None) => {
                    self.index += 1;
                }
                None => return Ok(Pull::Exhausted),
            }
        }
    }
}
