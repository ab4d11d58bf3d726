//! # Summary Module / 摘要模块
//!
//! Serializable views of an evaluation report, for callers that want to hand
//! results to another tool instead of reading console text.
//!
//! 评估报告的可序列化视图，供需要将结果交给其他工具而非阅读控制台文本的调用者使用。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::engine::evaluation::EvaluationReport;
use crate::engine::models::Outcome;
use crate::infra::t;

/// Aggregate figures for one evaluation run.
/// 一次评估运行的汇总数据。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub title: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub all_success: bool,
    /// Sum of every outcome's solve time, in seconds / 所有结果求解耗时之和（秒）
    pub total_time_secs: f64,
    pub evaluation_count: usize,
    pub evaluated_at: DateTime<Local>,
}

/// The summary together with every outcome.
#[derive(Debug, Serialize)]
struct ReportDocument<'a, I, O> {
    summary: ReportSummary,
    results: &'a [Outcome<I, O>],
}

impl<I, O> EvaluationReport<I, O> {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            title: self.title().to_string(),
            total: self.len(),
            passed: self.success_count(),
            failed: self.failure_count(),
            all_success: self.all_success(),
            total_time_secs: self.total_time().as_secs_f64(),
            evaluation_count: self.evaluation_count(),
            evaluated_at: self.evaluated_at(),
        }
    }
}

impl<I: Serialize, O: Serialize> EvaluationReport<I, O> {
    /// Serializes the summary and every outcome as pretty-printed JSON.
    /// 将摘要和所有结果序列化为格式化的 JSON。
    pub fn to_json(&self) -> Result<String> {
        let document = ReportDocument {
            summary: self.summary(),
            results: self.results(),
        };
        serde_json::to_string_pretty(&document)
            .with_context(|| t!("output.json_failed", title = self.title()).to_string())
    }
}
