//! # Expectation Table Module / 期望表模块
//!
//! An [`ExpectationTable`] pairs a solution function with every output that is
//! acceptable for each input. Outputs for the same input accumulate: appending
//! never overwrites or removes an earlier expectation.
//!
//! [`ExpectationTable`] 将解函数与每个输入的所有可接受输出配对。
//! 同一输入的输出会累积：追加操作从不覆盖或删除先前的期望。

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::infra::naming::signature_title;

/// The function under test.
pub type Solution<I, O> = Box<dyn Fn(&I) -> O>;

/// A solution plus the acceptable outputs for each of its inputs.
///
/// Inputs are kept in the order they were first registered, so evaluation
/// reports list results in a reproducible order.
///
/// 解函数及其每个输入的可接受输出。
/// 输入按首次注册的顺序保存，因此评估报告中的结果顺序是可复现的。
pub struct ExpectationTable<I, O> {
    title: Option<String>,
    entries: Vec<(I, Vec<O>)>,
    index: HashMap<I, usize>,
    solution: Solution<I, O>,
}

impl<I, O> ExpectationTable<I, O>
where
    I: Eq + Hash + Clone,
{
    /// Creates an empty table around `solution`.
    /// 使用 `solution` 创建一个空表。
    pub fn new<F>(solution: F) -> Self
    where
        F: Fn(&I) -> O + 'static,
    {
        Self {
            title: None,
            entries: Vec::new(),
            index: HashMap::new(),
            solution: Box::new(solution),
        }
    }

    /// Creates a table around `solution` pre-populated with `pairs`.
    /// Each pair is appended in order, so repeated inputs keep every output.
    ///
    /// 使用 `solution` 创建表并预先填入 `pairs`。
    /// 每个键值对按顺序追加，因此重复的输入会保留所有输出。
    pub fn from_pairs<F, P>(pairs: P, solution: F) -> Self
    where
        F: Fn(&I) -> O + 'static,
        P: IntoIterator<Item = (I, O)>,
    {
        Self::new(solution).with_expected(pairs)
    }

    /// Sets the display title used by reports.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends `pairs` and returns the table, for builder-style construction.
    pub fn with_expected<P>(mut self, pairs: P) -> Self
    where
        P: IntoIterator<Item = (I, O)>,
    {
        self.append_pairs(pairs);
        self
    }

    /// Registers one more acceptable `output` for `input`.
    /// Outputs already registered for `input` are kept and stay in front.
    ///
    /// 为 `input` 再注册一个可接受的 `output`。
    /// 已为 `input` 注册的输出会被保留并保持在前面。
    pub fn append(&mut self, input: I, output: O) {
        match self.index.get(&input) {
            Some(&position) => self.entries[position].1.push(output),
            None => {
                self.index.insert(input.clone(), self.entries.len());
                self.entries.push((input, vec![output]));
            }
        }
    }

    /// Appends every pair in order.
    /// 按顺序追加每个键值对。
    pub fn append_pairs<P>(&mut self, pairs: P)
    where
        P: IntoIterator<Item = (I, O)>,
    {
        for (input, output) in pairs {
            self.append(input, output);
        }
    }

    /// Gets the acceptable outputs registered for `input`, if any.
    pub fn expected_for(&self, input: &I) -> Option<&[O]> {
        self.index
            .get(input)
            .map(|&position| self.entries[position].1.as_slice())
    }
}

impl<I, O> ExpectationTable<I, O> {
    /// Gets the title shown in reports.
    /// Falls back to `"<Input> -> <Output>"` when no title was set.
    ///
    /// 获取报告中显示的标题。未设置标题时回退为 `"<输入> -> <输出>"`。
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(signature_title::<I, O>)
    }

    /// `true` if no inputs are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct inputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over inputs and their acceptable outputs in registration order.
    /// 按注册顺序遍历输入及其可接受输出。
    pub fn iter(&self) -> impl Iterator<Item = (&I, &[O])> {
        self.entries
            .iter()
            .map(|(input, outputs)| (input, outputs.as_slice()))
    }

    /// Calls the solution once for `input`.
    pub fn solve(&self, input: &I) -> O {
        (self.solution)(input)
    }
}

impl<I, O> Extend<(I, O)> for ExpectationTable<I, O>
where
    I: Eq + Hash + Clone,
{
    fn extend<P: IntoIterator<Item = (I, O)>>(&mut self, pairs: P) {
        self.append_pairs(pairs);
    }
}

impl<I: fmt::Debug, O: fmt::Debug> fmt::Debug for ExpectationTable<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectationTable")
            .field("title", &self.title())
            .field("expected", &self.entries)
            .finish_non_exhaustive()
    }
}
