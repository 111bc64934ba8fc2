use crate::{ProduceError, Producer, Pull};

/// Run the first producer to exhaustion, then continue with the second.
///
/// Both producers must yield the same type.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let both = chain(CountDown::new(2)?, Counter::new(2)?);
/// assert_eq!(both.handle().to_sequence()?, vec![2, 1, 0, 0, 1]);
/// # Ok::<(), ProduceError>(())
/// ```
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    Chain(Some(l), r)
}

/// Chains two producers sequentially.
///
/// Created via `chain()` or [`Producer::chain`]. The first producer is dropped
/// from memory once it is exhausted.
pub struct Chain<P1, P2>(Option<P1>, P2);

impl<L, R> Producer for Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        if let Some(ref mut l) = self.0 {
            match l.pull()? {
                Pull::Value(v) => return Ok(Pull::Value(v)),
                Pull::Exhausted => self.0 = None,
            }
        }
        self.1.pull()
    }
}

/// Pair up values from two producers.
///
/// Exhausts as soon as either side does. The right side is not pulled once the
/// left side is exhausted; a value already pulled from the left side when the
/// right side runs out is dropped.
pub fn zip<L, R>(l: L, r: R) -> Zip<L, R>
where
    L: Producer,
    R: Producer,
{
    Zip(Some((l, r)))
}

/// Pairs values from two producers. Created via `zip()` or [`Producer::zip`].
pub struct Zip<P1, P2>(Option<(P1, P2)>);

impl<L, R> Producer for Zip<L, R>
where
    L: Producer,
    R: Producer,
{
    type Item = (L::Item, R::Item);

    fn pull(&mut self) -> Result<Pull<Self::Item>, ProduceError> {
        let Some((l, r)) = self.0.as_mut() else {
            return Ok(Pull::Exhausted);
        };
        let Pull::Value(a) = l.pull()? else {
            self.0 = None;
            return Ok(Pull::Exhausted);
        };
        let Pull::Value(b) = r.pull()? else {
            self.0 = None;
            return Ok(Pull::Exhausted);
        };
        Ok(Pull::Value((a, b)))
    }
}
