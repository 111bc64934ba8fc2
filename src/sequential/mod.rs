//! Run producers one after another
//!
//! This module provides sequential concatenation of same-typed producers.

mod many;

pub use many::{Many, many};
