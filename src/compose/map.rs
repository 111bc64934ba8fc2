//! Transforming and filtering produced values.
//!
//! This module provides the [`Map`], [`TryMap`], [`Filter`], and [`Inspect`]
//! adapters.

use crate::{ProduceError, Producer, Pull};

/// Transforms each value from the wrapped producer.
pub struct Map<P, F> {
    f: F,
    producer: P,
}

/// Create a producer that applies `f` to each value of `producer`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut labels = map(|x: i64| format!("#{x}"), Counter::new(2)?);
/// assert_eq!(labels.pull()?, Pull::Value("#0".to_string()));
/// # Ok::<(), ProduceError>(())
/// ```
pub fn map<P, F>(f: F, producer: P) -> Map<P, F> {
    Map { f, producer }
}

impl<U, P, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Result<Pull<U>, ProduceError> {
        Ok(self.producer.pull()?.map(&mut self.f))
    }
}

/// Transforms each value with a fallible function.
///
/// The first error ends the sequence: later pulls report exhaustion without
/// touching the wrapped producer.
pub struct TryMap<P, F> {
    f: F,
    producer: Option<P>,
}

/// Create a producer that applies a fallible `f` to each value of `producer`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut halves = try_map(
///     |x: i64| {
///         if x % 2 == 0 {
///             Ok(x / 2)
///         } else {
///             Err(ProduceError::computation(x as u64, "odd value"))
///         }
///     },
///     from_iter([4_i64, 3, 8]),
/// );
/// assert_eq!(halves.pull()?, Pull::Value(2));
/// assert!(halves.pull().is_err());
/// assert_eq!(halves.pull()?, Pull::Exhausted);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn try_map<P, F>(f: F, producer: P) -> TryMap<P, F> {
    TryMap {
        f,
        producer: Some(producer),
    }
}

impl<U, P, F> Producer for TryMap<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> Result<U, ProduceError>,
{
    type Item = U;

    fn pull(&mut self) -> Result<Pull<U>, ProduceError> {
        let Some(producer) = self.producer.as_mut() else {
            return Ok(Pull::Exhausted);
        };
        let mapped = match producer.pull() {
            Ok(Pull::Value(v)) => (self.f)(v).map(Pull::Value),
            Ok(Pull::Exhausted) => Ok(Pull::Exhausted),
            Err(err) => Err(err),
        };
        if !matches!(mapped, Ok(Pull::Value(_))) {
            self.producer = None;
        }
        mapped
    }
}

/// Yields only the values that satisfy a predicate.
pub struct Filter<P, F> {
    predicate: F,
    producer: P,
}

/// Create a producer that skips values for which `predicate` returns `false`.
///
/// A pull keeps pulling from the wrapped producer until a value matches, so
/// a predicate that never matches on an infinite producer never returns.
pub fn filter<P, F>(predicate: F, producer: P) -> Filter<P, F> {
    Filter {
        predicate,
        producer,
    }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<P::Item>, ProduceError> {
        loop {
            match self.producer.pull()? {
                Pull::Value(v) if (self.predicate)(&v) => return Ok(Pull::Value(v)),
                Pull::Value(_) => continue,
                Pull::Exhausted => return Ok(Pull::Exhausted),
            }
        }
    }
}

/// Calls a function with a reference to each value before passing it on.
pub struct Inspect<P, F> {
    f: F,
    producer: P,
}

/// Create a producer that lets `f` observe each value of `producer`.
pub fn inspect<P, F>(f: F, producer: P) -> Inspect<P, F> {
    Inspect { f, producer }
}

impl<P, F> Producer for Inspect<P, F>
where
    P: Producer,
    F: FnMut(&P::Item),
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Pull<P::Item>, ProduceError> {
        let next = self.producer.pull()?;
        if let Pull::Value(v) = &next {
            (self.f)(v);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        build::{from_iter, repeat_with},
        sources::{Counter, Fibonacci},
    };

    #[test]
    fn test_map_is_lazy() {
        let mut calls = 0;
        {
            let mut producer = Counter::new(100).unwrap().map(|x| {
                calls += 1;
                x * 3
            });
            assert_eq!(producer.pull().unwrap(), Pull::Value(0));
            assert_eq!(producer.pull().unwrap(), Pull::Value(3));
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_filter_even_squares_pipeline() {
        let producer = Counter::new(10)
            .unwrap()
            .filter(|x| x % 2 == 0)
            .map(|x| x * x);
        assert_eq!(producer.handle().to_sequence().unwrap(), vec![0, 4, 16, 36, 64]);
    }

    #[test]
    fn test_filter_exhausts_when_nothing_matches() {
        let mut producer = Counter::new(5).unwrap().filter(|x| *x > 10);
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
    }

    #[test]
    fn test_try_map_error_is_terminal() {
        let mut producer = from_iter(["1", "x", "3"]).try_map(|s| {
            s.parse::<i32>()
                .map_err(|e| ProduceError::computation(0, e.to_string()))
        });

        assert_eq!(producer.pull().unwrap(), Pull::Value(1));
        assert_eq!(
            producer.pull().unwrap_err().kind(),
            crate::ErrorKind::Computation
        );
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
    }

    #[test]
    fn test_inspect_sees_each_value_once() {
        let mut seen = Vec::new();
        let values = Fibonacci::new(6)
            .unwrap()
            .inspect(|v| seen.push(*v))
            .handle()
            .to_sequence()
            .unwrap();
        assert_eq!(values, seen);
    }

    #[test]
    fn test_map_over_infinite_source() {
        let mut n = 0_u32;
        let mut producer = repeat_with(move || {
            n += 1;
            n
        })
        .map(|n| n * n);
        assert_eq!(producer.pull().unwrap(), Pull::Value(1));
        assert_eq!(producer.pull().unwrap(), Pull::Value(4));
        assert_eq!(producer.pull().unwrap(), Pull::Value(9));
    }
}
