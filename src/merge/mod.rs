//! The pattern merge engine.

use alloc::vec::Vec;

use futures_core::Stream;
use tracing::debug;

use crate::collections::IntoCollections;
use crate::config::{MergeConfig, MergeOptions, TruncatePolicy};
use crate::errors::Result;
use crate::iter::PatternIter;
use crate::pattern::{IntoPattern, Pattern};
use crate::stream::PatternStream;
use crate::wrapper::Wrapper;

use assembler::Assembler;
use counts::pattern_counts;
use slicer::Slicer;
use validator::Validator;

mod assembler;
mod counts;
mod slicer;
mod validator;

/// Merges several collections into one by a repeating take-ratio.
///
/// Every round takes `pattern[i]` elements from the `i`-th collection, in
/// order, and appends them to the wrapper. Rounds repeat until the target
/// length is reached or the collections run out, and the wrapper is then cut
/// to exactly the target length.
///
/// The wrapper `W` is the container merges are written into. The engine owns
/// a default one, reachable through [`wrapper`](Self::wrapper); a different
/// container can be passed per call with [`merge_into`](Self::merge_into).
///
/// # Examples
///
/// Take five from the first source, two from the second and three from the
/// third, until a page of 21 is filled:
///
/// ```
/// use pattern_merge::PatternMerge;
///
/// let mut merger = PatternMerge::<Vec<&str>>::new([5, 2, 3], Some(21)).unwrap();
/// assert_eq!(merger.counts(), Some(&[11, 4, 6][..]));
///
/// let page = merger
///     .merge(vec![vec!["a"; 20], vec!["b"; 20], vec!["c"; 20]])
///     .unwrap();
/// assert_eq!(page.len(), 21);
/// assert_eq!(&page[..10], ["a", "a", "a", "a", "a", "b", "b", "c", "c", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct PatternMerge<W> {
    pattern: Pattern,
    total: Option<usize>,
    counts: Option<Vec<usize>>,
    truncate: TruncatePolicy,
    wrapper: W,
}

impl<W: Wrapper + Default> PatternMerge<W> {
    /// Create an engine that writes into a fresh, empty wrapper.
    ///
    /// # Errors
    ///
    /// Fails if the pattern names fewer than two collections or has an entry
    /// below one, or if `total` is `Some(0)`.
    pub fn new<P: IntoPattern>(pattern: P, total: Option<usize>) -> Result<Self> {
        Self::configure(pattern.into_pattern(), total, TruncatePolicy::default(), W::default())
    }

    /// Create an engine from a declarative configuration.
    ///
    /// # Errors
    ///
    /// Fails if `config.total` is `Some(0)`.
    pub fn from_config(config: MergeConfig) -> Result<Self> {
        Self::configure(Ok(config.pattern), config.total, config.truncate, W::default())
    }

    /// Start building an engine with the given pattern.
    pub fn builder<P: IntoPattern>(pattern: P) -> PatternMergeBuilder<W> {
        PatternMergeBuilder {
            pattern: pattern.into_pattern(),
            total: None,
            truncate: TruncatePolicy::default(),
            wrapper: None,
        }
    }
}

impl<W: Wrapper> PatternMerge<W> {
    /// Create an engine that writes into `wrapper`.
    ///
    /// Merges append after whatever `wrapper` already holds.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_wrapper<P: IntoPattern>(pattern: P, total: Option<usize>, wrapper: W) -> Result<Self> {
        Self::configure(pattern.into_pattern(), total, TruncatePolicy::default(), wrapper)
    }

    fn configure(
        pattern: Result<Pattern>,
        total: Option<usize>,
        truncate: TruncatePolicy,
        wrapper: W,
    ) -> Result<Self> {
        let pattern = pattern?;
        Validator::validate_total(total)?;

        let counts = total.map(|total| pattern_counts(&pattern, total));
        debug!(%pattern, ?total, ?counts, ?truncate, "configured pattern merge");

        Ok(Self {
            pattern,
            total,
            counts,
            truncate,
            wrapper,
        })
    }

    /// The group sizes, one per collection.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The configured target length, if any.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// How many elements each collection contributes to the configured total.
    ///
    /// Only present when a total was configured. Useful to fetch exactly the
    /// right amount from each source before merging.
    pub fn counts(&self) -> Option<&[usize]> {
        self.counts.as_deref()
    }

    /// How the wrapper is trimmed after a merge.
    pub fn truncate_policy(&self) -> TruncatePolicy {
        self.truncate
    }

    /// The engine's own wrapper.
    pub fn wrapper(&self) -> &W {
        &self.wrapper
    }

    /// The engine's own wrapper, mutably.
    pub fn wrapper_mut(&mut self) -> &mut W {
        &mut self.wrapper
    }

    /// Take the engine's wrapper, leaving an empty one in its place.
    pub fn take_wrapper(&mut self) -> W
    where
        W: Default,
    {
        core::mem::take(&mut self.wrapper)
    }

    /// Consume the engine and return its wrapper.
    pub fn into_wrapper(self) -> W {
        self.wrapper
    }

    /// Merge `collections` into the engine's wrapper, honouring the total.
    ///
    /// # Errors
    ///
    /// Fails without touching the wrapper if the number of collections differs
    /// from the pattern length, or if a total is configured and the
    /// collections hold fewer elements than it.
    pub fn merge<C>(&mut self, collections: C) -> Result<&mut W>
    where
        C: IntoCollections<Item = W::Item>,
    {
        self.merge_with(collections, MergeOptions::default())
    }

    /// Merge `collections` into the engine's wrapper.
    ///
    /// # Errors
    ///
    /// Same as [`merge`](Self::merge); the element count check is skipped when
    /// `options` ignores the total.
    pub fn merge_with<C>(&mut self, collections: C, options: MergeOptions) -> Result<&mut W>
    where
        C: IntoCollections<Item = W::Item>,
    {
        let assembler = self.assembler(collections, options)?;
        assembler.assemble(&mut self.wrapper);
        Ok(&mut self.wrapper)
    }

    /// Merge `collections` into a caller-supplied wrapper instead of the
    /// engine's own.
    ///
    /// # Examples
    ///
    /// ```
    /// use pattern_merge::{MergeOptions, PatternMerge};
    /// use std::collections::VecDeque;
    ///
    /// let merger = PatternMerge::<Vec<u8>>::new([1, 2], None).unwrap();
    /// let mut out = VecDeque::from([0]);
    /// merger
    ///     .merge_into(vec![vec![1, 1], vec![2, 2]], &mut out, MergeOptions::new())
    ///     .unwrap();
    /// assert_eq!(out, [0, 1, 2, 2]);
    /// ```
    ///
    /// With the default [`TruncatePolicy::Whole`] the pre-existing `0` counts
    /// towards the target of four elements, so the second `1` never makes it in.
    ///
    /// # Errors
    ///
    /// Same as [`merge_with`](Self::merge_with).
    pub fn merge_into<'w, C, O>(
        &self,
        collections: C,
        wrapper: &'w mut O,
        options: MergeOptions,
    ) -> Result<&'w mut O>
    where
        C: IntoCollections,
        O: Wrapper<Item = C::Item> + ?Sized,
    {
        let assembler = self.assembler(collections, options)?;
        assembler.assemble(wrapper);
        Ok(wrapper)
    }

    /// Merge `collections` lazily, without a wrapper.
    ///
    /// The collections are validated up front exactly as in
    /// [`merge_with`](Self::merge_with). The returned iterator yields the same
    /// sequence a merge into an empty wrapper would produce.
    ///
    /// # Examples
    ///
    /// ```
    /// use pattern_merge::{MergeOptions, PatternMerge};
    ///
    /// let merger = PatternMerge::<Vec<u8>>::new([2, 1], Some(4)).unwrap();
    /// let iter = merger.iter([vec![1; 3], vec![2; 3]], MergeOptions::new()).unwrap();
    /// assert_eq!(iter.collect::<Vec<_>>(), [1, 1, 2, 1]);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`merge_with`](Self::merge_with).
    pub fn iter<C>(&self, collections: C, options: MergeOptions) -> Result<PatternIter<C::IntoIter>>
    where
        C: IntoCollections,
    {
        let collections = collections.into_collections();
        let effective_total = self.validate(&collections, options)?;
        Ok(PatternIter::new(
            collections,
            self.pattern.clone(),
            effective_total,
        ))
    }

    /// Merge asynchronous streams in pattern order.
    ///
    /// Stream lengths are not known up front, so only the number of streams
    /// is checked. Unless `options` ignores it, the configured total caps the
    /// number of items yielded.
    ///
    /// # Errors
    ///
    /// Fails if the number of streams differs from the pattern length.
    pub fn stream<I>(&self, streams: I, options: MergeOptions) -> Result<PatternStream<I::Item>>
    where
        I: IntoIterator,
        I::Item: Stream,
    {
        let streams: Vec<_> = streams.into_iter().collect();
        Validator::validate_collection_count(&self.pattern, streams.len())?;
        let limit = self.total.filter(|_| !options.ignores_total());
        Ok(PatternStream::new(streams, self.pattern.clone(), limit))
    }

    /// Check the collections and resolve the number of elements to produce.
    fn validate<I: ExactSizeIterator>(&self, collections: &[I], options: MergeOptions) -> Result<usize> {
        Validator::validate_collection_count(&self.pattern, collections.len())?;
        let available = collections.iter().map(ExactSizeIterator::len).sum();
        Validator::resolve_total(self.total, options, available)
    }

    fn assembler<C>(&self, collections: C, options: MergeOptions) -> Result<Assembler<C::IntoIter>>
    where
        C: IntoCollections,
    {
        let collections = collections.into_collections();
        let effective_total = self.validate(&collections, options)?;
        debug!(
            collections = collections.len(),
            effective_total,
            ignore_total = options.ignores_total(),
            "merging collections"
        );

        let slicers = collections
            .into_iter()
            .zip(self.pattern.iter())
            .map(|(collection, &size)| Slicer::new(collection, size))
            .collect();
        Ok(Assembler::new(slicers, effective_total, self.truncate))
    }
}

/// Builds a [`PatternMerge`] step by step.
///
/// Created by [`PatternMerge::builder`]. Pattern errors are reported by
/// [`build`](Self::build).
#[derive(Debug)]
pub struct PatternMergeBuilder<W> {
    pattern: Result<Pattern>,
    total: Option<usize>,
    truncate: TruncatePolicy,
    wrapper: Option<W>,
}

impl<W: Wrapper + Default> PatternMergeBuilder<W> {
    /// Set the target output length.
    pub fn total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    /// Set how the wrapper is trimmed after a merge.
    pub fn truncate(mut self, policy: TruncatePolicy) -> Self {
        self.truncate = policy;
        self
    }

    /// Use `wrapper` instead of an empty default one.
    pub fn wrapper(mut self, wrapper: W) -> Self {
        self.wrapper = Some(wrapper);
        self
    }

    /// Validate the configuration and create the engine.
    ///
    /// # Errors
    ///
    /// Same as [`PatternMerge::new`].
    pub fn build(self) -> Result<PatternMerge<W>> {
        PatternMerge::configure(
            self.pattern,
            self.total,
            self.truncate,
            self.wrapper.unwrap_or_default(),
        )
    }
}
