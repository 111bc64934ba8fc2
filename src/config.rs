//! Declarative description of a sequence.
//!
//! A [`SequenceConfig`] names one of the built-in sources and its parameters,
//! plus an optional limit. It deserializes from any serde format and turns
//! into a fresh [`Handle`] on every call to [`SequenceConfig::create`], so one
//! config can be replayed any number of times.
//!
//! ```rust
//! use lazyseq::config::{SequenceConfig, SourceConfig};
//!
//! let config = SequenceConfig::new(SourceConfig::Fibonacci { count: None }).with_limit(5);
//! assert_eq!(config.create()?.to_sequence()?, vec![0, 1, 1, 2, 3]);
//! # Ok::<(), lazyseq::ProduceError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    BoxProducer, Handle, ProduceError, Producer,
    sources::{CountDown, Counter, EvenSquares, Fibonacci, StepRange},
};

/// Which source to build and with what parameters.
///
/// Serialized with an internal `kind` tag, e.g.
/// `{"kind": "step_range", "start": 0, "end": 10, "step": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Counter {
        bound: i64,
    },
    CountDown {
        start: i64,
    },
    StepRange {
        start: i64,
        end: i64,
        #[serde(default = "default_step")]
        step: i64,
    },
    /// `count: None` is the unbounded sequence.
    Fibonacci {
        #[serde(default)]
        count: Option<i64>,
    },
    EvenSquares {
        #[serde(default)]
        start: i64,
        end: i64,
    },
}

fn default_step() -> i64 {
    1
}

impl SourceConfig {
    /// Validate the parameters and construct the source.
    pub fn build(&self) -> Result<BoxProducer<'static, i64>, ProduceError> {
        let producer = match *self {
            SourceConfig::Counter { bound } => Counter::new(bound)?.boxed(),
            SourceConfig::CountDown { start } => CountDown::new(start)?.boxed(),
            SourceConfig::StepRange { start, end, step } => {
                StepRange::new(start, end, step)?.boxed()
            }
            SourceConfig::Fibonacci { count: Some(count) } => Fibonacci::new(count)?.boxed(),
            SourceConfig::Fibonacci { count: None } => Fibonacci::unbounded().boxed(),
            SourceConfig::EvenSquares { start, end } => EvenSquares::between(start, end)?.boxed(),
        };
        Ok(producer)
    }

    fn name(&self) -> &'static str {
        match self {
            SourceConfig::Counter { .. } => "counter",
            SourceConfig::CountDown { .. } => "count_down",
            SourceConfig::StepRange { .. } => "step_range",
            SourceConfig::Fibonacci { .. } => "fibonacci",
            SourceConfig::EvenSquares { .. } => "even_squares",
        }
    }
}

/// A source plus an optional cap on how many values to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub source: SourceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl SequenceConfig {
    pub fn new(source: SourceConfig) -> Self {
        Self {
            source,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build a fresh handle. Parameter errors surface here, before any pull.
    pub fn create(&self) -> Result<Handle<BoxProducer<'static, i64>>, ProduceError> {
        let source = self.source.build()?;
        let producer = match self.limit {
            Some(limit) => source.take(limit).boxed(),
            None => source,
        };
        debug!(source = self.source.name(), limit = ?self.limit, "created sequence handle");
        Ok(Handle::new(producer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Phase};

    #[test]
    fn test_counter_from_json() {
        let config: SequenceConfig =
            serde_json::from_str(r#"{"source": {"kind": "counter", "bound": 4}}"#).unwrap();
        assert_eq!(config.limit, None);
        assert_eq!(config.create().unwrap().to_sequence().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_defaults_applied() {
        let config: SequenceConfig = serde_json::from_str(
            r#"{"source": {"kind": "step_range", "start": 2, "end": 5}, "limit": 2}"#,
        )
        .unwrap();
        assert_eq!(
            config.source,
            SourceConfig::StepRange {
                start: 2,
                end: 5,
                step: 1
            }
        );
        assert_eq!(config.create().unwrap().to_sequence().unwrap(), vec![2, 3]);

        let config: SequenceConfig =
            serde_json::from_str(r#"{"source": {"kind": "even_squares", "end": 10}}"#).unwrap();
        assert_eq!(
            config.create().unwrap().to_sequence().unwrap(),
            vec![0, 4, 16, 36, 64]
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let parsed: Result<SequenceConfig, _> =
            serde_json::from_str(r#"{"source": {"kind": "primes", "count": 3}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_invalid_parameters_fail_at_create() {
        let config = SequenceConfig::new(SourceConfig::Fibonacci { count: Some(-2) });
        assert_eq!(config.create().unwrap_err().kind(), ErrorKind::InvalidArgument);

        let config = SequenceConfig::new(SourceConfig::StepRange {
            start: 0,
            end: 1,
            step: 0,
        });
        assert_eq!(config.create().unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_each_create_is_independent() {
        let config = SequenceConfig::new(SourceConfig::CountDown { start: 3 });
        let mut a = config.create().unwrap();
        let b = config.create().unwrap();

        assert_eq!(a.drain().unwrap(), vec![3, 2, 1, 0]);
        assert_eq!(a.phase(), Phase::Exhausted);
        assert_eq!(b.phase(), Phase::Fresh);
        assert_eq!(b.to_sequence().unwrap(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let config = SequenceConfig::new(SourceConfig::Counter { bound: 2 });
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"source": {"kind": "counter", "bound": 2}})
        );
    }
}
