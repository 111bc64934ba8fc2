//! Combining and transforming producers
//!
//! Every adapter here is lazy: it pulls from the wrapped producer only when it
//! is pulled itself.

mod chain;
mod map;
mod take;

pub use chain::{Chain, Zip, chain, zip};
pub use map::{Filter, Inspect, Map, TryMap, filter, inspect, map, try_map};
pub use take::{Take, TakeWhile, take, take_while};
