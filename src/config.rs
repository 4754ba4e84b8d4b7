//! Engine configuration and per-call options.

use crate::pattern::Pattern;

/// How a merge trims its wrapper once the target length is reached.
///
/// A wrapper can be reused across merges, so it may already hold elements
/// when a merge starts. The policy decides whether those count towards the
/// target length.
///
/// # Examples
///
/// ```
/// use pattern_merge::{PatternMerge, TruncatePolicy};
///
/// let mut merger = PatternMerge::<Vec<u8>>::builder([1, 1])
///     .total(2)
///     .truncate(TruncatePolicy::Appended)
///     .build()
///     .unwrap();
///
/// merger.merge(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// merger.merge(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// assert_eq!(merger.wrapper(), &[1, 3, 5, 7]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TruncatePolicy {
    /// Trim the whole wrapper, including anything it held before the merge,
    /// to the target length.
    #[default]
    Whole,
    /// Trim only what the merge appended. Earlier contents are kept intact.
    Appended,
}

/// Options for a single merge call.
///
/// # Examples
///
/// ```
/// use pattern_merge::{MergeOptions, PatternMerge};
///
/// let mut merger = PatternMerge::<Vec<u8>>::new([1, 1], Some(10)).unwrap();
/// let out = merger
///     .merge_with(vec![vec![1], vec![2]], MergeOptions::new().ignore_total(true))
///     .unwrap();
/// assert_eq!(out, &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MergeOptions {
    ignore_total: bool,
}

impl MergeOptions {
    /// Options that honour the configured total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every available element regardless of the configured total.
    ///
    /// The insufficient-elements check is skipped as well.
    pub fn ignore_total(mut self, ignore: bool) -> Self {
        self.ignore_total = ignore;
        self
    }

    /// Whether the configured total is ignored.
    pub fn ignores_total(&self) -> bool {
        self.ignore_total
    }
}

/// Declarative configuration for a [`PatternMerge`][crate::PatternMerge].
///
/// With the `serde` feature enabled this can be read from any serde format.
/// Validation happens in [`PatternMerge::from_config`][crate::PatternMerge::from_config],
/// except for pattern entries that are not integers, which fail to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeConfig {
    /// Group sizes, one per collection.
    pub pattern: Pattern,
    /// Target output length. `None` merges everything.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total: Option<usize>,
    /// How the wrapper is trimmed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub truncate: TruncatePolicy,
}

impl MergeConfig {
    /// A configuration with no total and the default truncation policy.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            total: None,
            truncate: TruncatePolicy::default(),
        }
    }
}
