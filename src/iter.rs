//! Iterator adapter for producers.
//!
//! [`ProducerIter`] turns any [`Producer`] into a [`std::iter::Iterator`] over
//! `Result<Item, ProduceError>`, so producers work with `for` loops and the
//! standard iterator toolbox. The iterator is fused: after exhaustion or the
//! first error it returns `None` forever.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let values: Result<Vec<_>, _> = EvenSquares::new(10)?.into_values().collect();
//! assert_eq!(values?, vec![0, 4, 16, 36, 64]);
//! # Ok::<(), lazyseq::ProduceError>(())
//! ```
//!
//! Because `&mut ProducerIter` is also an iterator, part of a sequence can be
//! consumed and the rest kept for later:
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = repeat(1).into_values();
//! let first: Vec<_> = (&mut iter).take(3).map(Result::unwrap).collect();
//! assert_eq!(first, vec![1, 1, 1]);
//! assert!(!iter.is_finished());
//! ```

use std::iter::FusedIterator;

use crate::{ProduceError, Producer, Pull};

/// Iterator adapter for [`Producer`].
///
/// Created by [`Producer::into_values`] or by iterating a [`Handle`](crate::Handle).
pub struct ProducerIter<P> {
    state: ProducerIterState<P>,
}

enum ProducerIterState<P> {
    Active(P),
    Finished,
}

impl<P> ProducerIter<P>
where
    P: Producer,
{
    pub fn new(producer: P) -> Self {
        Self {
            state: ProducerIterState::Active(producer),
        }
    }

    /// Check if the underlying producer has been exhausted or has failed.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, ProducerIterState::Finished)
    }
}

impl<P> Iterator for ProducerIter<P>
where
    P: Producer,
{
    type Item = Result<P::Item, ProduceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let ProducerIterState::Active(producer) = &mut self.state else {
            return None;
        };
        match producer.pull() {
            Ok(Pull::Value(value)) => Some(Ok(value)),
            Ok(Pull::Exhausted) => {
                self.state = ProducerIterState::Finished;
                None
            }
            Err(err) => {
                self.state = ProducerIterState::Finished;
                Some(Err(err))
            }
        }
    }
}

impl<P> FusedIterator for ProducerIter<P> where P: Producer {}
