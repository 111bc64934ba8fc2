//! Lifecycle-tracking owner of a producer.
//!
//! A [`Handle`] moves monotonically through [`Phase::Fresh`], [`Phase::Producing`]
//! and [`Phase::Exhausted`]. Once exhausted, the wrapped producer is dropped and
//! every later pull reports [`Pull::Exhausted`] without touching it. A production
//! error also moves the handle to `Exhausted`, so a failed producer is never
//! resumed from an inconsistent state.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut handle = Counter::new(2)?.handle();
//! assert_eq!(handle.phase(), Phase::Fresh);
//! assert_eq!(handle.pull()?, Pull::Value(0));
//! assert_eq!(handle.phase(), Phase::Producing);
//! assert_eq!(handle.drain()?, vec![1]);
//! assert_eq!(handle.phase(), Phase::Exhausted);
//! assert_eq!(handle.drain()?, Vec::<i64>::new());
//! # Ok::<(), lazyseq::ProduceError>(())
//! ```

use std::fmt;

use tracing::{debug, trace, warn};

use crate::{ProduceError, Producer, Pull, drive, iter::ProducerIter};

/// Where a [`Handle`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created; nothing pulled yet.
    Fresh,
    /// At least one value has been produced.
    Producing,
    /// Terminal. The producer ran dry or failed.
    Exhausted,
}

/// Owns one producer instance and enforces the fresh → producing → exhausted
/// lifecycle.
///
/// `Handle` implements [`Producer`] itself, so it can be placed anywhere a
/// producer is expected to make an arbitrary producer fused.
pub struct Handle<P> {
    state: HandleState<P>,
    produced: u64,
}

enum HandleState<P> {
    Fresh(P),
    Producing(P),
    Exhausted,
}

impl<P> HandleState<P> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, HandleState::Exhausted)
    }
}

impl<P> Handle<P>
where
    P: Producer,
{
    /// Take ownership of a producer. No value is computed.
    pub fn new(producer: P) -> Self {
        Self {
            state: HandleState::Fresh(producer),
            produced: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            HandleState::Fresh(_) => Phase::Fresh,
            HandleState::Producing(_) => Phase::Producing,
            HandleState::Exhausted => Phase::Exhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, HandleState::Exhausted)
    }

    /// Number of values handed out so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Compute the next value.
    ///
    /// After the first `Exhausted` or `Err`, always returns `Ok(Pull::Exhausted)`.
    pub fn pull(&mut self) -> Result<Pull<P::Item>, ProduceError> {
        let producer = match &mut self.state {
            HandleState::Fresh(p) | HandleState::Producing(p) => p,
            HandleState::Exhausted => return Ok(Pull::Exhausted),
        };

        match producer.pull() {
            Ok(Pull::Value(value)) => {
                self.produced += 1;
                self.state = match self.state.take() {
                    HandleState::Fresh(p) => HandleState::Producing(p),
                    other => other,
                };
                trace!(produced = self.produced, "pulled value");
                Ok(Pull::Value(value))
            }
            Ok(Pull::Exhausted) => {
                // the producer is dropped here
                self.state = HandleState::Exhausted;
                debug!(produced = self.produced, "producer exhausted");
                Ok(Pull::Exhausted)
            }
            Err(err) => {
                self.state = HandleState::Exhausted;
                warn!(error = %err, produced = self.produced, "producer failed, marking exhausted");
                Err(err)
            }
        }
    }

    /// Pull until exhaustion, returning the remaining values in production order.
    ///
    /// Returns an empty `Vec` if the handle is already exhausted. On error the
    /// values pulled by this call are discarded and the handle is exhausted.
    pub fn drain(&mut self) -> Result<Vec<P::Item>, ProduceError> {
        let mut values = Vec::new();
        while let Pull::Value(value) = self.pull()? {
            values.push(value);
        }
        Ok(values)
    }

    /// Pull at most `n` values. Safe to call on an infinite producer.
    pub fn first_n(&mut self, n: usize) -> Result<Vec<P::Item>, ProduceError> {
        drive::first_n(self, n)
    }

    /// Drain the whole sequence, consuming the handle.
    ///
    /// Never returns on a producer that never exhausts; bound it with
    /// [`Producer::take`] or use [`Handle::first_n`].
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let fib = Fibonacci::new(8)?.handle();
    /// assert_eq!(fib.to_sequence()?, vec![0, 1, 1, 2, 3, 5, 8, 13]);
    /// # Ok::<(), lazyseq::ProduceError>(())
    /// ```
    pub fn to_sequence(mut self) -> Result<Vec<P::Item>, ProduceError> {
        self.drain()
    }
}

impl<P> Producer for Handle<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        Handle::pull(self)
    }
}

impl<P> fmt::Debug for Handle<P>
where
    P: Producer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("phase", &self.phase())
            .field("produced", &self.produced)
            .finish()
    }
}

impl<P> IntoIterator for Handle<P>
where
    P: Producer,
{
    type Item = Result<P::Item, ProduceError>;
    type IntoIter = ProducerIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        ProducerIter::new(self)
    }
}

impl<'a, P> IntoIterator for &'a mut Handle<P>
where
    P: Producer,
{
    type Item = Result<P::Item, ProduceError>;
    type IntoIter = ProducerIter<&'a mut Handle<P>>;

    fn into_iter(self) -> Self::IntoIter {
        ProducerIter::new(self)
    }
}
