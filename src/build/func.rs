use std::marker::PhantomData;

use crate::{ProduceError, Producer, Pull};

/// Producer backed by a closure. See [`from_fn`].
pub struct FromFn<F>(F);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Result<Pull<T>, ProduceError>,
{
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        (self.0)()
    }
}

/// Create a producer from a closure that is called once per pull.
///
/// The closure is not called until the first pull. It is responsible for its
/// own terminal behavior; wrap the result in a [`Handle`](crate::Handle) to get
/// idempotent exhaustion regardless.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut evens = from_fn(move || {
///     n += 2;
///     Ok(if n > 6 { Pull::Exhausted } else { Pull::Value(n) })
/// });
/// assert_eq!(evens.pull()?, Pull::Value(2));
/// assert_eq!(evens.handle().to_sequence()?, vec![4, 6]);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Result<Pull<T>, ProduceError>,
{
    FromFn(f)
}

/// Producer that threads explicit state through a step function. See [`unfold`].
pub struct Unfold<S, F> {
    state: S,
    f: F,
}

impl<S, T, F> Producer for Unfold<S, F>
where
    F: FnMut(&mut S) -> Result<Pull<T>, ProduceError>,
{
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        (self.f)(&mut self.state)
    }
}

/// Create a producer from an initial state and a step function over it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // powers of two below 100
/// let powers = unfold(1_u32, |n| {
///     if *n >= 100 {
///         return Ok(Pull::Exhausted);
///     }
///     let value = *n;
///     *n *= 2;
///     Ok(Pull::Value(value))
/// });
/// assert_eq!(powers.handle().to_sequence()?, vec![1, 2, 4, 8, 16, 32, 64]);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn unfold<S, T, F>(state: S, f: F) -> Unfold<S, F>
where
    F: FnMut(&mut S) -> Result<Pull<T>, ProduceError>,
{
    Unfold { state, f }
}

/// Produces a single value. See [`once`].
pub struct Once<T>(Option<T>);

impl<T> Producer for Once<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        Ok(self.0.take().into())
    }
}

/// Create a producer that yields `value` once and is then exhausted.
pub fn once<T>(value: T) -> Once<T> {
    Once(Some(value))
}

/// Produces clones of one value forever. See [`repeat`].
pub struct Repeat<T>(T);

impl<T> Producer for Repeat<T>
where
    T: Clone,
{
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        Ok(Pull::Value(self.0.clone()))
    }
}

/// Create a producer that yields `value` indefinitely.
///
/// Never exhausts; the consumer must bound it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut fives = repeat(5);
/// assert_eq!(fives.pull()?, Pull::Value(5));
/// assert_eq!(fives.pull()?, Pull::Value(5));
/// // Continues forever...
/// # Ok::<(), ProduceError>(())
/// ```
pub fn repeat<T>(value: T) -> Repeat<T>
where
    T: Clone,
{
    Repeat(value)
}

/// Produces the results of a closure forever. See [`repeat_with`].
pub struct RepeatWith<F>(F);

impl<T, F> Producer for RepeatWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        Ok(Pull::Value((self.0)()))
    }
}

/// Create a producer that calls `f` on every pull and never exhausts.
pub fn repeat_with<T, F>(f: F) -> RepeatWith<F>
where
    F: FnMut() -> T,
{
    RepeatWith(f)
}

/// Produces nothing. See [`empty`].
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Producer for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        Ok(Pull::Exhausted)
    }
}

/// Create a producer whose first pull reports exhaustion.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

/// Producer over a standard iterator. See [`from_iter`].
pub struct FromIter<I>(I);

impl<I> Producer for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Result<Pull<I::Item>, ProduceError> {
        Ok(self.0.next().into())
    }
}

/// Create a producer that pulls from an iterator.
///
/// Laziness is inherited from the iterator: a `Vec` is already computed, a
/// `map` over a range is not.
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter(iter.into_iter())
}

/// Calls a function until it returns a stop value. See [`sentinel`].
pub struct Sentinel<F, T> {
    f: F,
    stop: T,
    done: bool,
}

impl<F, T> Producer for Sentinel<F, T>
where
    F: FnMut() -> T,
    T: PartialEq,
{
    type Item = T;

    fn pull(&mut self) -> Result<Pull<T>, ProduceError> {
        if self.done {
            return Ok(Pull::Exhausted);
        }
        let value = (self.f)();
        if value == self.stop {
            self.done = true;
            return Ok(Pull::Exhausted);
        }
        Ok(Pull::Value(value))
    }
}

/// Create a producer that calls `f` on each pull until it returns a value equal
/// to `stop`. The stop value itself is not produced, and `f` is never called
/// again afterwards.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut input = vec![1, 2, -1, 3, -1].into_iter();
/// let before_marker = sentinel(move || input.next().unwrap_or(-1), -1);
/// assert_eq!(before_marker.handle().to_sequence()?, vec![1, 2]);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn sentinel<F, T>(f: F, stop: T) -> Sentinel<F, T>
where
    F: FnMut() -> T,
    T: PartialEq,
{
    Sentinel {
        f,
        stop,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_from_fn_is_lazy() {
        let calls = Cell::new(0);
        let mut producer = from_fn(|| {
            calls.set(calls.get() + 1);
            Ok(Pull::Value(calls.get()))
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(producer.pull().unwrap(), Pull::Value(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_from_fn_surfaces_error_at_pull() {
        let mut producer = from_fn(|| -> Result<Pull<u8>, ProduceError> {
            Err(ProduceError::invalid_argument("input", "rejected lazily"))
        });
        assert_eq!(
            producer.pull().unwrap_err().kind(),
            crate::ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_once_then_exhausted() {
        let mut producer = once("only");
        assert_eq!(producer.pull().unwrap(), Pull::Value("only"));
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
    }

    #[test]
    fn test_repeat_with_counts_calls() {
        let mut n = 0;
        let mut producer = repeat_with(move || {
            n += 1;
            n
        });
        assert_eq!(producer.pull().unwrap(), Pull::Value(1));
        assert_eq!(producer.pull().unwrap(), Pull::Value(2));
    }

    #[test]
    fn test_empty_exhausts_immediately() {
        let mut producer = empty::<String>();
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
    }

    #[test]
    fn test_from_iter_preserves_order() {
        let mut producer = from_iter(vec!["a", "b"]);
        assert_eq!(producer.pull().unwrap(), Pull::Value("a"));
        assert_eq!(producer.pull().unwrap(), Pull::Value("b"));
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
    }

    #[test]
    fn test_sentinel_stops_calling_after_stop_value() {
        let calls = Cell::new(0);
        let lines = ["line1", "line2", "END", "after"];
        let mut producer = sentinel(
            || {
                let line = lines[calls.get()];
                calls.set(calls.get() + 1);
                line
            },
            "END",
        );

        assert_eq!(producer.pull().unwrap(), Pull::Value("line1"));
        assert_eq!(producer.pull().unwrap(), Pull::Value("line2"));
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
        assert_eq!(producer.pull().unwrap(), Pull::Exhausted);
        assert_eq!(calls.get(), 3);
    }
}
