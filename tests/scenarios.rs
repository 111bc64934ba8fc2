//! End-to-end scenarios through the public API.

use std::ops::ControlFlow;

use lazyseq::{
    config::{SequenceConfig, SourceConfig},
    prelude::*,
    sequential::many,
};
use test_case::test_case;

#[test_case(SourceConfig::Counter { bound: 4 }, &[0, 1, 2, 3]; "counter bound 4")]
#[test_case(SourceConfig::Fibonacci { count: Some(8) }, &[0, 1, 1, 2, 3, 5, 8, 13]; "fibonacci count 8")]
#[test_case(SourceConfig::EvenSquares { start: 0, end: 10 }, &[0, 4, 16, 36, 64]; "even squares below 10")]
#[test_case(SourceConfig::CountDown { start: 3 }, &[3, 2, 1, 0]; "count down from 3")]
#[test_case(SourceConfig::StepRange { start: 0, end: 10, step: 3 }, &[0, 3, 6, 9]; "step range by 3")]
#[test_case(SourceConfig::StepRange { start: 5, end: 0, step: -2 }, &[5, 3, 1]; "step range descending")]
fn configured_source_produces(source: SourceConfig, expected: &[i64]) {
    let mut handle = SequenceConfig::new(source).create().unwrap();
    assert_eq!(handle.phase(), Phase::Fresh);
    assert_eq!(handle.drain().unwrap(), expected);
    assert_eq!(handle.pull().unwrap(), Pull::Exhausted);
    assert_eq!(handle.pull().unwrap(), Pull::Exhausted);
}

#[test_case(SourceConfig::Counter { bound: 0 }; "counter")]
#[test_case(SourceConfig::Fibonacci { count: Some(0) }; "fibonacci")]
#[test_case(SourceConfig::EvenSquares { start: 0, end: 0 }; "even squares")]
#[test_case(SourceConfig::StepRange { start: 1, end: 1, step: 1 }; "step range")]
fn zero_length_exhausts_on_first_pull(source: SourceConfig) {
    let mut handle = SequenceConfig::new(source).create().unwrap();
    assert_eq!(handle.pull().unwrap(), Pull::Exhausted);
    assert_eq!(handle.produced(), 0);
}

#[test_case(SourceConfig::Counter { bound: -1 }; "negative bound")]
#[test_case(SourceConfig::CountDown { start: -4 }; "negative start")]
#[test_case(SourceConfig::Fibonacci { count: Some(-8) }; "negative count")]
#[test_case(SourceConfig::EvenSquares { start: 0, end: -10 }; "inverted domain")]
#[test_case(SourceConfig::StepRange { start: 0, end: 10, step: 0 }; "zero step")]
fn invalid_parameters_fail_at_create(source: SourceConfig) {
    let err = SequenceConfig::new(source).create().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unbounded_fibonacci_is_limited_by_config() {
    let config: SequenceConfig =
        serde_json::from_str(r#"{"source": {"kind": "fibonacci"}, "limit": 10}"#).unwrap();
    let values = config.create().unwrap().to_sequence().unwrap();
    assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn production_error_surfaces_at_pull_not_create() {
    let config = SequenceConfig::new(SourceConfig::EvenSquares {
        start: 3_037_000_500,
        end: 3_037_000_600,
    });
    let mut handle = config.create().unwrap();
    let err = handle.pull().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Computation);
    assert_eq!(handle.phase(), Phase::Exhausted);
    assert_eq!(handle.pull().unwrap(), Pull::Exhausted);
}

#[test]
fn sentinel_collects_until_marker() {
    let mut input = vec![1, 2, -1, 3, -1].into_iter();
    let values = collect(sentinel(move || input.next().unwrap_or(-1), -1)).unwrap();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn generator_pipeline_reads_like_a_comprehension() {
    // first five squares of odd numbers, lazily
    let values = successors(Some(1_i64), |n| Ok(n.checked_add(2)))
        .map(|n| n * n)
        .take(5)
        .handle()
        .to_sequence()
        .unwrap();
    assert_eq!(values, vec![1, 9, 25, 49, 81]);
}

#[test]
fn drive_bounds_an_infinite_producer() {
    let mut seen = Vec::new();
    let handed = drive(Fibonacci::unbounded(), |v| {
        seen.push(v);
        if seen.len() == 4 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .unwrap();
    assert_eq!(handed, 4);
    assert_eq!(seen, vec![0, 1, 1, 2]);
}

#[test]
fn many_concatenates_boxed_sources() {
    let values = many([
        CountDown::new(2).unwrap().boxed(),
        Counter::new(2).unwrap().boxed(),
        EvenSquares::new(5).unwrap().boxed(),
    ])
    .handle()
    .to_sequence()
    .unwrap();
    assert_eq!(values, vec![2, 1, 0, 0, 1, 0, 4, 16]);
}

#[test]
fn for_loop_over_handle() {
    let mut total = 0;
    for value in Counter::new(5).unwrap().handle() {
        total += value.unwrap();
    }
    assert_eq!(total, 10);
}
