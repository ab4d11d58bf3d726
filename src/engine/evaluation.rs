//! # Evaluation Engine Module / 评估引擎模块
//!
//! This module runs a table's solution over every registered input, judges
//! each output against the acceptable outputs and collects the outcomes into
//! an [`EvaluationReport`].
//!
//! Evaluation is sequential and runs on the caller's thread. A solution that
//! panics aborts the whole evaluation; the panic is not captured or turned
//! into a failure for that input.
//!
//! 此模块对表中每个已注册的输入运行解函数，将每个输出与可接受输出进行比对，
//! 并将结果收集到 [`EvaluationReport`] 中。
//!
//! 评估在调用者线程上顺序执行。解函数发生 panic 会中止整个评估；
//! 该 panic 不会被捕获，也不会被转换为该输入的失败。

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

use crate::engine::{
    config::TesterConfig,
    models::{Failure, Outcome, Success},
    table::ExpectationTable,
};

impl<I: Clone, O: Clone> ExpectationTable<I, O> {
    /// Evaluates the solution using `O`'s own equality.
    /// 使用 `O` 自身的相等性评估解函数。
    pub fn evaluate(&self) -> EvaluationReport<I, O>
    where
        O: PartialEq,
    {
        self.evaluate_by(|actual, expected| actual == expected)
    }

    /// Evaluates the solution, judging outputs with `output_equals_expected`.
    /// 评估解函数，使用 `output_equals_expected` 判断输出。
    pub fn evaluate_by<F>(&self, output_equals_expected: F) -> EvaluationReport<I, O>
    where
        F: Fn(&O, &O) -> bool,
    {
        self.evaluate_with(output_equals_expected, 1)
    }

    /// Evaluates with the repetition factor taken from `config`.
    /// 使用 `config` 中的重复因子进行评估。
    pub fn evaluate_configured<F>(
        &self,
        output_equals_expected: F,
        config: &TesterConfig,
    ) -> EvaluationReport<I, O>
    where
        F: Fn(&O, &O) -> bool,
    {
        self.evaluate_with(output_equals_expected, config.evaluation_count)
    }

    /// Evaluates the solution for every input, in registration order.
    ///
    /// For each input the solution is called once and timed. The input is a
    /// success if `output_equals_expected(actual, expected)` holds for at least
    /// one acceptable output; otherwise the failure carries every acceptable
    /// output.
    ///
    /// `evaluation_count` is clamped to at least 1 and recorded on the report.
    /// It does not change how many times the solution is called.
    ///
    /// # Arguments / 参数
    /// * `output_equals_expected` - Comparison rule, called as `(actual, expected)`
    ///                              比较规则，以 `(actual, expected)` 调用
    /// * `evaluation_count` - Repetition factor recorded on the report
    ///                        记录在报告中的重复因子
    ///
    /// # Panics / Panic
    /// Propagates any panic raised by the solution.
    /// 传播解函数引发的任何 panic。
    pub fn evaluate_with<F>(
        &self,
        output_equals_expected: F,
        evaluation_count: usize,
    ) -> EvaluationReport<I, O>
    where
        F: Fn(&O, &O) -> bool,
    {
        let evaluated_at = Local::now();
        let results = self
            .iter()
            .map(|(input, acceptable)| {
                let start_time = Instant::now();
                let actual = self.solve(input);
                let time = start_time.elapsed();

                let success = acceptable
                    .iter()
                    .any(|expected| output_equals_expected(&actual, expected));

                if success {
                    Outcome::Success(Success {
                        input: input.clone(),
                        output: actual,
                        time,
                    })
                } else {
                    Outcome::Failure(Failure {
                        input: input.clone(),
                        expected: acceptable.to_vec(),
                        actual,
                        time,
                    })
                }
            })
            .collect();

        EvaluationReport {
            title: self.title(),
            results,
            evaluation_count: evaluation_count.max(1),
            evaluated_at,
        }
    }
}

/// The outcomes of one evaluation run, one per distinct input.
/// 一次评估运行的结果，每个不同的输入对应一个。
#[derive(Debug, Clone)]
pub struct EvaluationReport<I, O> {
    title: String,
    results: Vec<Outcome<I, O>>,
    evaluation_count: usize,
    evaluated_at: DateTime<Local>,
}

impl<I, O> EvaluationReport<I, O> {
    /// Assembles a report from already classified outcomes.
    pub fn new(title: impl Into<String>, results: Vec<Outcome<I, O>>) -> Self {
        Self {
            title: title.into(),
            results,
            evaluation_count: 1,
            evaluated_at: Local::now(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// All outcomes, in the order the inputs were evaluated.
    /// 所有结果，按输入的评估顺序排列。
    pub fn results(&self) -> &[Outcome<I, O>] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn evaluation_count(&self) -> usize {
        self.evaluation_count
    }

    pub fn evaluated_at(&self) -> DateTime<Local> {
        self.evaluated_at
    }

    /// `true` if no outcome is a failure. An empty report counts as all success.
    /// 如果没有任何失败结果则为 `true`。空报告视为全部成功。
    pub fn all_success(&self) -> bool {
        !self.results.iter().any(Outcome::is_failure)
    }

    /// The failures, order preserved.
    pub fn failures(&self) -> Vec<&Failure<I, O>> {
        self.results.iter().filter_map(Outcome::as_failure).collect()
    }

    /// The successes, order preserved.
    pub fn successes(&self) -> Vec<&Success<I, O>> {
        self.results.iter().filter_map(Outcome::as_success).collect()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Sum of the solve times of every outcome, successes and failures alike.
    /// 所有结果（成功和失败）的求解耗时之和。
    pub fn total_time(&self) -> Duration {
        self.results.iter().map(Outcome::time).sum()
    }

    /// Consumes the report, yielding its outcomes.
    pub fn into_results(self) -> Vec<Outcome<I, O>> {
        self.results
    }
}
