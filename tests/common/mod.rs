// Shared fixtures for integration tests
#![allow(dead_code)]

use challenge_tester::{EvaluationReport, ExpectationTable, Failure, Outcome, Success};
use std::time::Duration;

/// Identity solution with one correct and one wrong expectation.
pub fn identity_table() -> ExpectationTable<i32, i32> {
    ExpectationTable::from_pairs([(1, 1), (2, 3)], |n: &i32| *n)
}

/// Squares its input; every expectation is correct.
pub fn square_table() -> ExpectationTable<i32, i32> {
    ExpectationTable::new(|n: &i32| n * n)
        .with_title("square")
        .with_expected([(2, 4), (3, 9), (4, 16)])
}

pub fn success(input: i32, output: i32, millis: u64) -> Outcome<i32, i32> {
    Outcome::Success(Success {
        input,
        output,
        time: Duration::from_millis(millis),
    })
}

pub fn failure(input: i32, expected: Vec<i32>, actual: i32, millis: u64) -> Outcome<i32, i32> {
    Outcome::Failure(Failure {
        input,
        expected,
        actual,
        time: Duration::from_millis(millis),
    })
}

/// A report with fixed timings, so rendered text is deterministic.
pub fn mixed_report() -> EvaluationReport<i32, i32> {
    EvaluationReport::new(
        "identity",
        vec![success(1, 1, 5), failure(2, vec![3], 2, 7)],
    )
}

pub fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer).expect("rendering into a Vec should not fail");
    String::from_utf8(buffer).expect("rendered report should be UTF-8")
}
