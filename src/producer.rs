//! Core trait for lazy sequence producers.
//!
//! A [`Producer`] owns some sequence state and computes one value per call to
//! [`Producer::pull`]. Nothing is computed until the first pull; every built-in
//! producer is an explicit state machine holding just enough state to compute
//! the next value.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut squares = Counter::new(4)?.map(|x| x * x);
//! assert_eq!(squares.pull()?, Pull::Value(0));
//! assert_eq!(squares.pull()?, Pull::Value(1));
//! assert_eq!(squares.pull()?, Pull::Value(4));
//! assert_eq!(squares.pull()?, Pull::Value(9));
//! assert_eq!(squares.pull()?, Pull::Exhausted);
//! # Ok::<(), lazyseq::ProduceError>(())
//! ```
//!
//! # Threads
//!
//! `pull` takes `&mut self`, so two threads can never pull from the same
//! producer at once without going through a lock. The [`Arc<Mutex<P>>`]
//! implementation is that lock; callers choose it explicitly.

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

use crate::{
    Handle, ProduceError, Pull,
    compose::{Chain, Filter, Inspect, Map, Take, TakeWhile, TryMap, Zip},
    iter::ProducerIter,
};

/// A boxed, type-erased producer.
pub type BoxProducer<'a, T> = Box<dyn Producer<Item = T> + 'a>;

/// A stateful computation that hands out one value per pull.
///
/// Implementations should return [`Pull::Exhausted`] forever once they have
/// returned it once, and should treat a returned error as terminal. Wrapping a
/// producer in a [`Handle`] enforces both for implementations that don't.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// struct Digits(u8);
///
/// impl Producer for Digits {
///     type Item = u8;
///
///     fn pull(&mut self) -> Result<Pull<u8>, ProduceError> {
///         if self.0 > 9 {
///             return Ok(Pull::Exhausted);
///         }
///         self.0 += 1;
///         Ok(Pull::Value(self.0 - 1))
///     }
/// }
///
/// assert_eq!(Digits(7).handle().to_sequence()?, vec![7, 8, 9]);
/// # Ok::<(), ProduceError>(())
/// ```
pub trait Producer {
    /// Type of the values handed to the consumer
    type Item;

    /// Compute the next value, or report exhaustion.
    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError>;

    /// Erase the concrete type.
    fn boxed<'a>(self) -> BoxProducer<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Borrow this producer so an adapter can consume part of it.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut counter = Counter::new(5)?;
    /// assert_eq!(counter.by_ref().take(2).handle().to_sequence()?, vec![0, 1]);
    /// assert_eq!(counter.pull()?, Pull::Value(2));
    /// # Ok::<(), ProduceError>(())
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Move this producer into a lifecycle-tracking [`Handle`].
    fn handle(self) -> Handle<Self>
    where
        Self: Sized,
    {
        Handle::new(self)
    }

    /// Adapt this producer into a standard [`Iterator`] over `Result` items.
    fn into_values(self) -> ProducerIter<Self>
    where
        Self: Sized,
    {
        ProducerIter::new(self)
    }

    /// Transform each produced value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        crate::compose::map(f, self)
    }

    /// Transform each produced value with a function that may fail.
    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<U, ProduceError>,
    {
        crate::compose::try_map(f, self)
    }

    /// Skip values for which `predicate` returns `false`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        crate::compose::filter(predicate, self)
    }

    /// Observe each value on its way to the consumer.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        crate::compose::inspect(f, self)
    }

    /// Stop after at most `n` values.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::compose::take(n, self)
    }

    /// Stop at the first value for which `predicate` returns `false`.
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        crate::compose::take_while(predicate, self)
    }

    /// Continue with `next` once this producer is exhausted.
    fn chain<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Producer<Item = Self::Item>,
    {
        crate::compose::chain(self, next)
    }

    /// Pair values with another producer, stopping when either runs out.
    fn zip<R>(self, other: R) -> Zip<Self, R>
    where
        Self: Sized,
        R: Producer,
    {
        crate::compose::zip(self, other)
    }
}

impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        (**self).pull()
    }
}

impl<P> Producer for &'_ mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        (**self).pull()
    }
}

/// `None` behaves as an empty producer.
impl<P> Producer for Option<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        match self {
            Some(p) => p.pull(),
            None => Ok(Pull::Exhausted),
        }
    }
}

impl<L, R> Producer for either::Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }
}

impl<P> Producer for Rc<RefCell<P>>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        let mut p = self.as_ref().borrow_mut();
        p.pull()
    }
}

impl<P> Producer for Arc<Mutex<P>>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        let mut p = self.lock().map_err(|_| ProduceError::Poisoned)?;
        p.pull()
    }
}
