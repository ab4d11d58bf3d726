//! # Challenge Tester Library / Challenge Tester 库
//!
//! A small evaluation harness for checking a single-argument solution function
//! against a table of expected input/output pairs. It classifies every input as a
//! success or failure, measures how long each call took and renders the results.
//!
//! 一个小型评估工具，用于将单参数的解函数与期望的输入/输出表进行比对。
//! 它将每个输入归类为成功或失败，测量每次调用的耗时，并输出结果。
//!
//! ## Modules / 模块
//!
//! - `engine` - Outcome records, the expectation table, the evaluator and configuration
//! - `infra` - i18n access and type-name helpers
//! - `reporting` - Console rendering and serializable summaries
//!
//! - `engine` - 结果记录、期望表、评估器和配置
//! - `infra` - 国际化访问和类型名辅助工具
//! - `reporting` - 控制台输出和可序列化摘要
//!
//! ## Example / 示例
//!
//! ```no_run
//! use challenge_tester::ExpectationTable;
//!
//! let mut table = ExpectationTable::new(|n: &u32| n * n).with_title("square");
//! table.append(3, 9);
//! table.append(4, 15);
//!
//! let report = table.evaluate();
//! assert!(!report.all_success());
//! report.print_failures().unwrap();
//! ```

pub mod engine;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use engine::config::TesterConfig;
pub use engine::evaluation::EvaluationReport;
pub use engine::models::{Failure, Outcome, Success};
pub use engine::table::ExpectationTable;
pub use reporting::console::{ReportStyle, print_failure_list, write_failure_list};

/// Initializes the library's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for rendered reports. It attempts to match the full locale
/// (e.g., "zh-CN"), then any bundled locale sharing the language code
/// (e.g., "zh-Hans-CN" -> "zh-CN"), and finally falls back to the default
/// language ("en").
///
/// 根据系统区域设置初始化国际化。先尝试完整匹配（如 "zh-CN"），
/// 再尝试匹配语言代码相同的内置区域设置（如 "zh-Hans-CN" -> "zh-CN"），最后回退到 "en"。
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(resolve_locale(&locale));
}

/// Maps a requested locale onto one of the bundled locales.
/// 将请求的区域设置映射到内置的区域设置之一。
pub fn resolve_locale(requested: &str) -> &'static str {
    let available_locales = rust_i18n::available_locales!();
    let lang_code = |locale: &str| locale.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();

    available_locales
        .iter()
        .copied()
        .find(|available| *available == requested)
        .or_else(|| {
            let requested_lang = lang_code(requested);
            if requested_lang.is_empty() {
                return None;
            }
            available_locales
                .iter()
                .copied()
                .find(|&available| lang_code(available) == requested_lang)
        })
        .unwrap_or("en")
}

/// The bundled locale closest to the one currently selected with
/// `rust_i18n::set_locale` (or [`init`]).
/// 与当前所选区域设置最接近的内置区域设置。
pub fn current_locale() -> &'static str {
    resolve_locale(&rust_i18n::locale())
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
