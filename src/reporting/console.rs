//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders evaluation reports as text. Every renderer writes into
//! any `std::io::Write` sink; the `print_*` variants target standard output.
//!
//! 此模块将评估报告渲染为文本。每个渲染器都写入任意 `std::io::Write`；
//! `print_*` 变体输出到标准输出。
//!
//! # Output Format / 输出格式
//! ```text
//! Tests failed for 'i32 -> i32':
//! Input:        	2
//! Expected:     	[3]
//! Actual output:	2
//! Time to solve:	208ns
//!
//! ----------------
//!
//! ```

use anyhow::{Context, Result};
use colored::*;
use std::fmt::Debug;
use std::io::{self, Write};
use std::time::Duration;

use crate::engine::evaluation::EvaluationReport;
use crate::engine::models::{Failure, Outcome, Success};
use crate::engine::table::ExpectationTable;
use crate::infra::naming::signature_title;
use crate::infra::t;

const SEPARATOR: &str = "----------------";

/// Controls how reports are rendered.
/// 控制报告的渲染方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Locale used for every rendered string / 所有渲染字符串使用的区域设置
    pub locale: String,
    /// Colour headers. `colored` still turns this off when stdout is not a terminal
    /// or `NO_COLOR` is set.
    /// 为标题着色。当 stdout 不是终端或设置了 `NO_COLOR` 时，`colored` 仍会关闭着色。
    pub color: bool,
    /// Fractional digits for solve times / 求解耗时的小数位数
    pub time_precision: Option<usize>,
}

impl Default for ReportStyle {
    /// Coloured output in the currently selected locale (see [`crate::init`]).
    /// 使用当前所选区域设置的彩色输出。
    fn default() -> Self {
        Self {
            locale: crate::current_locale().to_string(),
            color: true,
            time_precision: None,
        }
    }
}

impl ReportStyle {
    /// English, uncoloured output, independent of the selected locale.
    /// 英文、无颜色的输出，不受所选区域设置影响。
    pub fn plain() -> Self {
        Self {
            locale: "en".to_string(),
            color: false,
            time_precision: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_time_precision(mut self, digits: usize) -> Self {
        self.time_precision = Some(digits);
        self
    }

    fn paint(&self, text: &str, colorize: fn(&str) -> ColoredString) -> String {
        if self.color {
            colorize(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_time(&self, time: Duration) -> String {
        match self.time_precision {
            Some(precision) => format!("{:.precision$?}", time),
            None => format!("{:?}", time),
        }
    }

    fn labels(&self) -> Labels {
        let locale = self.locale.as_str();
        let input = t!("report.label_input", locale = locale).to_string();
        let expected = t!("report.label_expected", locale = locale).to_string();
        let output = t!("report.label_output", locale = locale).to_string();
        let actual = t!("report.label_actual", locale = locale).to_string();
        let time = t!("report.label_time", locale = locale).to_string();
        let width = [&input, &expected, &output, &actual, &time]
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        Labels {
            input,
            expected,
            output,
            actual,
            time,
            width,
        }
    }
}

/// Block labels for one locale, padded to a shared width when written.
struct Labels {
    input: String,
    expected: String,
    output: String,
    actual: String,
    time: String,
    width: usize,
}

impl Labels {
    fn write_line<W: Write>(&self, out: &mut W, label: &str, value: &str) -> io::Result<()> {
        writeln!(out, "{:<width$}\t{}", label, value, width = self.width)
    }
}

fn write_success_block<I: Debug, O: Debug, W: Write>(
    out: &mut W,
    style: &ReportStyle,
    labels: &Labels,
    success: &Success<I, O>,
) -> io::Result<()> {
    labels.write_line(out, &labels.input, &format!("{:?}", success.input))?;
    labels.write_line(out, &labels.output, &format!("{:?}", success.output))?;
    labels.write_line(out, &labels.time, &style.format_time(success.time))
}

fn write_failure_block<I: Debug, O: Debug, W: Write>(
    out: &mut W,
    style: &ReportStyle,
    labels: &Labels,
    failure: &Failure<I, O>,
) -> io::Result<()> {
    labels.write_line(out, &labels.input, &format!("{:?}", failure.input))?;
    labels.write_line(out, &labels.expected, &format!("{:?}", failure.expected))?;
    labels.write_line(out, &labels.actual, &format!("{:?}", failure.actual))?;
    labels.write_line(out, &labels.time, &style.format_time(failure.time))
}

fn write_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out)
}

fn write_failure_section<I: Debug, O: Debug, W: Write>(
    out: &mut W,
    style: &ReportStyle,
    title: &str,
    failures: &[&Failure<I, O>],
) -> io::Result<()> {
    let locale = style.locale.as_str();
    if failures.is_empty() {
        let line = t!("report.all_passed", locale = locale, title = title);
        writeln!(out, "{}", style.paint(&line, |s| s.green().bold()))?;
        return writeln!(out);
    }

    let header = t!("report.header_failures", locale = locale, title = title);
    writeln!(out, "{}", style.paint(&header, |s| s.red().bold()))?;
    let labels = style.labels();
    for failure in failures {
        write_failure_block(out, style, &labels, failure)?;
    }
    write_separator(out)
}

fn write_success_section<I: Debug, O: Debug, W: Write>(
    out: &mut W,
    style: &ReportStyle,
    title: &str,
    successes: &[&Success<I, O>],
) -> io::Result<()> {
    let locale = style.locale.as_str();
    if successes.is_empty() {
        let line = t!("report.all_failed", locale = locale, title = title);
        writeln!(out, "{}", style.paint(&line, |s| s.red().bold()))?;
        return writeln!(out);
    }

    let header = t!("report.header_successes", locale = locale, title = title);
    writeln!(out, "{}", style.paint(&header, |s| s.green().bold()))?;
    let labels = style.labels();
    for success in successes {
        write_success_block(out, style, &labels, success)?;
    }
    write_separator(out)
}

fn write_results_section<I: Debug, O: Debug, W: Write>(
    out: &mut W,
    style: &ReportStyle,
    title: &str,
    results: &[Outcome<I, O>],
) -> io::Result<()> {
    let header = t!("report.header_results", locale = style.locale.as_str(), title = title);
    writeln!(out, "{}", style.paint(&header, |s| s.bold()))?;
    let labels = style.labels();
    for result in results {
        match result {
            Outcome::Success(success) => write_success_block(out, style, &labels, success)?,
            Outcome::Failure(failure) => write_failure_block(out, style, &labels, failure)?,
        }
    }
    write_separator(out)
}

impl<I: Debug, O: Debug> EvaluationReport<I, O> {
    /// Writes every success, or a single "all tests failed" line if there are none.
    /// 写出所有成功结果；如果没有，则写出一行“全部失败”。
    pub fn write_successes<W: Write>(&self, out: &mut W, style: &ReportStyle) -> Result<()> {
        write_success_section(out, style, self.title(), &self.successes())
            .with_context(|| t!("output.write_failed", title = self.title()).to_string())
    }

    /// Writes every failure, or a single "all tests passed" line if there are none.
    /// 写出所有失败结果；如果没有，则写出一行“全部通过”。
    pub fn write_failures<W: Write>(&self, out: &mut W, style: &ReportStyle) -> Result<()> {
        write_failure_section(out, style, self.title(), &self.failures())
            .with_context(|| t!("output.write_failed", title = self.title()).to_string())
    }

    /// Writes a header followed by one block per outcome, in evaluation order.
    /// 写出标题，然后按评估顺序为每个结果写出一个块。
    pub fn write_all<W: Write>(&self, out: &mut W, style: &ReportStyle) -> Result<()> {
        write_results_section(out, style, self.title(), self.results())
            .with_context(|| t!("output.write_failed", title = self.title()).to_string())
    }

    /// Renders [`Self::write_all`] into a `String`.
    pub fn render(&self, style: &ReportStyle) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_all(&mut buffer, style)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn print_successes(&self) -> Result<()> {
        self.write_successes(&mut io::stdout().lock(), &ReportStyle::default())
    }

    pub fn print_failures(&self) -> Result<()> {
        self.write_failures(&mut io::stdout().lock(), &ReportStyle::default())
    }

    pub fn print(&self) -> Result<()> {
        self.write_all(&mut io::stdout().lock(), &ReportStyle::default())
    }
}

impl<I: Clone + Debug, O: Clone + Debug> ExpectationTable<I, O> {
    /// Evaluates with `O`'s own equality and prints the failures.
    /// 使用 `O` 自身的相等性进行评估并打印失败结果。
    pub fn print_failures(&self) -> Result<()>
    where
        O: PartialEq,
    {
        self.evaluate().print_failures()
    }

    /// Evaluates with `output_equals_expected` and prints the failures.
    pub fn print_failures_by<F>(&self, output_equals_expected: F) -> Result<()>
    where
        F: Fn(&O, &O) -> bool,
    {
        self.evaluate_by(output_equals_expected).print_failures()
    }
}

/// Writes a bare list of failures, without the report they came from.
/// The title is derived from the input and output types, e.g. `"i32 -> String"`.
///
/// 写出一组失败记录，无需其所属的报告。
/// 标题由输入和输出类型推导，例如 `"i32 -> String"`。
pub fn write_failure_list<'a, I, O, W>(
    failures: impl IntoIterator<Item = &'a Failure<I, O>>,
    out: &mut W,
    style: &ReportStyle,
) -> Result<()>
where
    I: Debug + 'a,
    O: Debug + 'a,
    W: Write,
{
    let title = signature_title::<I, O>();
    let failures: Vec<&Failure<I, O>> = failures.into_iter().collect();
    write_failure_section(out, style, &title, &failures)
        .with_context(|| t!("output.write_failed", title = &title).to_string())
}

/// Prints a bare list of failures to standard output.
/// See [`write_failure_list`].
pub fn print_failure_list<'a, I, O>(failures: impl IntoIterator<Item = &'a Failure<I, O>>) -> Result<()>
where
    I: Debug + 'a,
    O: Debug + 'a,
{
    write_failure_list(failures, &mut io::stdout().lock(), &ReportStyle::default())
}
