//! # Data Models Module / 数据模型模块
//!
//! This module defines the outcome records produced by an evaluation run:
//! a [`Success`] when the solution's output matched one of the acceptable
//! outputs, a [`Failure`] otherwise, and the [`Outcome`] that holds either.
//!
//! 此模块定义评估运行产生的结果记录：解函数输出与某个可接受输出匹配时为
//! [`Success`]，否则为 [`Failure`]，[`Outcome`] 包含两者之一。

use crate::infra::t;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// A solution call whose output matched at least one acceptable output.
/// 解函数输出至少匹配一个可接受输出的调用。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Success<I, O> {
    /// The input the solution was called with / 调用解函数时的输入
    pub input: I,
    /// The output the solution produced / 解函数产生的输出
    pub output: O,
    /// Wall-clock time spent inside the solution / 解函数内部耗费的时间
    pub time: Duration,
}

/// A solution call whose output matched none of the acceptable outputs.
/// 解函数输出未匹配任何可接受输出的调用。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure<I, O> {
    /// The input the solution was called with / 调用解函数时的输入
    pub input: I,
    /// Every output registered as acceptable for `input`, in registration order.
    /// 为 `input` 注册的所有可接受输出，按注册顺序排列。
    pub expected: Vec<O>,
    /// The output the solution actually produced / 解函数实际产生的输出
    pub actual: O,
    /// Wall-clock time spent inside the solution / 解函数内部耗费的时间
    pub time: Duration,
}

impl<I: fmt::Debug, O: fmt::Debug> fmt::Display for Failure<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            t!(
                "failure.display",
                input = format!("{:?}", self.input),
                expected = format!("{:?}", self.expected),
                actual = format!("{:?}", self.actual)
            )
        )
    }
}

impl<I: fmt::Debug, O: fmt::Debug> std::error::Error for Failure<I, O> {}

/// The classification of one solution call.
/// 单次解函数调用的分类结果。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outcome<I, O> {
    /// The output matched / 输出匹配
    Success(Success<I, O>),
    /// The output matched nothing / 输出未匹配
    Failure(Failure<I, O>),
}

impl<I, O> Outcome<I, O> {
    /// Checks if the solution's output matched an acceptable output.
    /// 检查解函数的输出是否匹配某个可接受输出。
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Checks if the solution's output matched none of the acceptable outputs.
    /// 检查解函数的输出是否未匹配任何可接受输出。
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Gets the input this outcome was produced for.
    /// 获取产生此结果的输入。
    pub fn input(&self) -> &I {
        match self {
            Outcome::Success(success) => &success.input,
            Outcome::Failure(failure) => &failure.input,
        }
    }

    /// Gets the output the solution actually produced.
    /// 获取解函数实际产生的输出。
    pub fn actual(&self) -> &O {
        match self {
            Outcome::Success(success) => &success.output,
            Outcome::Failure(failure) => &failure.actual,
        }
    }

    /// Gets the time spent inside the solution, whatever the classification.
    /// 获取解函数内部耗费的时间，与分类无关。
    pub fn time(&self) -> Duration {
        match self {
            Outcome::Success(success) => success.time,
            Outcome::Failure(failure) => failure.time,
        }
    }

    /// Gets the success record, or `None` for a failure.
    /// 获取成功记录；如果是失败则返回 `None`。
    pub fn as_success(&self) -> Option<&Success<I, O>> {
        match self {
            Outcome::Success(success) => Some(success),
            Outcome::Failure(_) => None,
        }
    }

    /// Gets the failure record, or `None` for a success.
    /// 获取失败记录；如果是成功则返回 `None`。
    pub fn as_failure(&self) -> Option<&Failure<I, O>> {
        match self {
            Outcome::Failure(failure) => Some(failure),
            Outcome::Success(_) => None,
        }
    }

    /// Converts the outcome into a `Result`, treating a failure as the error side.
    /// 将结果转换为 `Result`，失败作为错误一侧。
    pub fn into_result(self) -> Result<Success<I, O>, Failure<I, O>> {
        match self {
            Outcome::Success(success) => Ok(success),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<I, O> From<Success<I, O>> for Outcome<I, O> {
    fn from(success: Success<I, O>) -> Self {
        Outcome::Success(success)
    }
}

impl<I, O> From<Failure<I, O>> for Outcome<I, O> {
    fn from(failure: Failure<I, O>) -> Self {
        Outcome::Failure(failure)
    }
}
