//! # Reporting Module / 报告模块
//!
//! This module handles the rendering of evaluation reports. It provides
//! plain or coloured text output with internationalization support, and a
//! serializable summary document.
//!
//! 此模块处理评估报告的输出。它提供支持国际化的纯文本或彩色文本输出，
//! 以及可序列化的摘要文档。

pub mod console;
pub mod summary;

// Re-export common reporting functions
pub use console::{ReportStyle, print_failure_list, write_failure_list};
pub use summary::ReportSummary;
