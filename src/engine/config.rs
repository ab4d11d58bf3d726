//! # Configuration Module / 配置模块
//!
//! Optional settings for how evaluations are run and rendered, loaded from a
//! TOML file such as:
//!
//! ```toml
//! language = "zh-CN"
//! color = false
//! time_precision = 3
//! evaluation_count = 1
//! ```
//!
//! 评估运行和渲染方式的可选设置，从 TOML 文件加载。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::infra::t;
use crate::reporting::console::ReportStyle;

/// Settings shared by evaluation and reporting.
/// 评估和报告共用的设置。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TesterConfig {
    /// The language for rendered reports (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 渲染报告所用的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether headers are coloured when printed to a terminal.
    /// 打印到终端时是否为标题着色。
    #[serde(default = "default_color")]
    pub color: bool,

    /// Number of fractional digits used when rendering solve times.
    /// When absent, times are rendered with `Duration`'s own formatting.
    ///
    /// 渲染求解耗时时使用的小数位数。未设置时使用 `Duration` 自身的格式。
    #[serde(default)]
    pub time_precision: Option<usize>,

    /// Repetition factor passed to evaluations; recorded on the report.
    /// 传递给评估的重复因子；记录在报告中。
    #[serde(default = "default_evaluation_count")]
    pub evaluation_count: usize,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_color() -> bool {
    true
}

fn default_evaluation_count() -> usize {
    1
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            color: default_color(),
            time_precision: None,
            evaluation_count: default_evaluation_count(),
        }
    }
}

impl TesterConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| t!("config.parse_failed").to_string())
    }

    /// Reads and parses a TOML configuration file.
    /// 读取并解析 TOML 配置文件。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
        Self::from_toml_str(&content)
    }

    /// Builds the rendering style described by this configuration.
    /// The language is matched against the bundled locales, falling back to "en".
    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            locale: crate::resolve_locale(&self.language).to_string(),
            color: self.color,
            time_precision: self.time_precision,
        }
    }
}
