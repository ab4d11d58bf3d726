//! # Evaluation Integration Tests / 评估集成测试
//!
//! End-to-end checks of `evaluate`: classification, ordering, timing totals
//! and the comparison predicate.
//!
//! `evaluate` 的端到端检查：分类、顺序、耗时总和和比较谓词。

mod common;

use challenge_tester::{ExpectationTable, Outcome};
use common::{identity_table, square_table};
use std::time::Duration;

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_identity_with_one_wrong_expectation() {
        let report = identity_table().evaluate();

        assert_eq!(report.len(), 2);
        assert!(!report.all_success());
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.successes().len(), 1);

        match &report.results()[0] {
            Outcome::Success(success) => {
                assert_eq!(success.input, 1);
                assert_eq!(success.output, 1);
            }
            other => panic!("Expected Success for input 1, got {:?}", other),
        }
        match &report.results()[1] {
            Outcome::Failure(failure) => {
                assert_eq!(failure.input, 2);
                assert_eq!(failure.expected, vec![3]);
                assert_eq!(failure.actual, 2);
            }
            other => panic!("Expected Failure for input 2, got {:?}", other),
        }
    }

    #[test]
    fn test_square_single_success() {
        let table = ExpectationTable::from_pairs([(3, 9)], |n: &i32| n * n);
        let report = table.evaluate();

        assert!(report.all_success());
        let successes = report.successes();
        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].input, 3);
        assert_eq!(successes[0].output, 9);
    }

    #[test]
    fn test_empty_table_is_all_success() {
        let table: ExpectationTable<i32, i32> = ExpectationTable::new(|n: &i32| *n);
        assert!(table.is_empty());

        let report = table.evaluate();
        assert!(report.is_empty());
        assert!(report.all_success());
        assert!(report.failures().is_empty());
        assert_eq!(report.total_time(), Duration::ZERO);
    }

    #[test]
    fn test_second_acceptable_output_matches() {
        let table = ExpectationTable::from_pairs([(5, 10), (5, 11)], |_: &i32| 11);
        let report = table.evaluate();

        assert_eq!(report.len(), 1);
        assert!(report.all_success());
        assert_eq!(report.successes()[0].output, 11);
    }

    #[test]
    fn test_failure_carries_every_acceptable_output() {
        let table = ExpectationTable::from_pairs([(5, 10), (5, 11), (5, 12)], |_: &i32| 0);
        let report = table.evaluate();

        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].expected, vec![10, 11, 12]);
        assert_eq!(failures[0].actual, 0);
    }

    #[test]
    fn test_one_outcome_per_distinct_input() {
        let mut table = ExpectationTable::new(|n: &u32| n % 7);
        table.append_pairs((0..50u32).map(|n| (n % 10, n % 7)));
        let report = table.evaluate();

        assert_eq!(report.len(), table.len());
        assert_eq!(report.len(), 10);
        assert_eq!(report.successes().len() + report.failures().len(), report.len());
    }
}

#[cfg(test)]
mod predicate_tests {
    use super::*;

    #[test]
    fn test_custom_predicate_for_floats() {
        let table = ExpectationTable::new(|x: &u32| (*x as f64).sqrt())
            .with_expected([(2, 1.41421), (9, 3.0), (10, 4.0)]);
        let report = table.evaluate_by(|actual, expected| (actual - expected).abs() < 1e-4);

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures()[0].input, 10);
    }

    #[test]
    fn test_predicate_receives_actual_then_expected() {
        let table = ExpectationTable::from_pairs([(1, 100)], |_: &i32| 1);
        let report = table.evaluate_by(|actual, expected| *actual == 1 && *expected == 100);
        assert!(report.all_success());
    }

    #[test]
    fn test_case_insensitive_strings() {
        let table = ExpectationTable::new(|s: &String| s.to_uppercase())
            .with_expected([("abc".to_string(), "ABC".to_string()), ("x".to_string(), "y".to_string())]);
        let report = table.evaluate_by(|a, e| a.eq_ignore_ascii_case(e));

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failures()[0].input, "x");
    }

    #[test]
    fn test_always_false_predicate_fails_everything() {
        let report = square_table().evaluate_by(|_, _| false);
        assert_eq!(report.failure_count(), 3);
        assert!(report.successes().is_empty());
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_report_copies_table_title() {
        assert_eq!(square_table().evaluate().title(), "square");
        assert_eq!(identity_table().evaluate().title(), "i32 -> i32");
    }

    #[test]
    fn test_results_follow_registration_order() {
        let table = ExpectationTable::new(|n: &i32| *n).with_expected([(30, 30), (10, 10), (20, 0)]);
        let inputs: Vec<i32> = table.evaluate().results().iter().map(|r| *r.input()).collect();
        assert_eq!(inputs, vec![30, 10, 20]);
    }

    #[test]
    fn test_total_time_is_sum_of_outcome_times() {
        let table = ExpectationTable::new(|n: &u64| {
            std::thread::sleep(Duration::from_millis(*n));
            *n
        })
        .with_expected([(2, 2), (3, 0)]);
        let report = table.evaluate();

        let summed: Duration = report.results().iter().map(Outcome::time).sum();
        assert_eq!(report.total_time(), summed);
        assert!(report.total_time() >= Duration::from_millis(5));
    }

    #[test]
    fn test_repeated_evaluation_has_same_classification() {
        let table = identity_table();
        let first = table.evaluate();
        let second = table.evaluate();

        let classify = |report: &challenge_tester::EvaluationReport<i32, i32>| {
            report
                .results()
                .iter()
                .map(|r| (*r.input(), r.is_success()))
                .collect::<Vec<_>>()
        };
        assert_eq!(classify(&first), classify(&second));
    }

    #[test]
    fn test_into_result_splits_outcomes() {
        let report = identity_table().evaluate();
        let (ok, err): (Vec<_>, Vec<_>) = report
            .into_results()
            .into_iter()
            .map(Outcome::into_result)
            .partition(Result::is_ok);
        assert_eq!(ok.len(), 1);
        assert_eq!(err.len(), 1);
    }

    #[test]
    #[should_panic(expected = "no answer for 2")]
    fn test_panicking_solution_aborts_evaluation() {
        let table = ExpectationTable::from_pairs([(1, 1), (2, 2)], |n: &i32| {
            if *n == 2 {
                panic!("no answer for 2");
            }
            *n
        });
        let _ = table.evaluate();
    }
}
