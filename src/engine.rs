//! # Engine Module / 引擎模块
//!
//! This module contains the evaluation engine of Challenge Tester,
//! including outcome records, the expectation table, the evaluator and configuration.
//!
//! 此模块包含 Challenge Tester 的评估引擎，
//! 包括结果记录、期望表、评估器和配置。

pub mod config;
pub mod evaluation;
pub mod models;
pub mod table;

// Re-exports
pub use config::TesterConfig;
pub use evaluation::EvaluationReport;
pub use models::Outcome;
pub use table::ExpectationTable;
