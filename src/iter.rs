//! Lazy pattern merging.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::pattern::Pattern;
use crate::utils::RoundCursor;

/// An iterator that yields the pattern merge of several collections lazily.
///
/// This `struct` is created by the [`iter`] method on [`PatternMerge`]. See
/// its documentation for more.
///
/// [`iter`]: crate::PatternMerge::iter
/// [`PatternMerge`]: crate::PatternMerge
pub struct PatternIter<I> {
    sources: Vec<I>,
    cursor: RoundCursor,
    remaining: usize,
}

impl<I: ExactSizeIterator> PatternIter<I> {
    pub(crate) fn new(sources: Vec<I>, pattern: Pattern, limit: usize) -> Self {
        Self {
            sources,
            cursor: RoundCursor::new(pattern),
            remaining: limit,
        }
    }
}

impl<I> fmt::Debug for PatternIter<I>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sources.iter()).finish()
    }
}

impl<I: ExactSizeIterator> Iterator for PatternIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            let index = self.cursor.current()?;
            match self.sources[index].next() {
                Some(item) => {
                    self.cursor.consume();
                    self.remaining -= 1;
                    return Some(item);
                }
                None => self.cursor.exhaust(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let available: usize = self.sources.iter().map(ExactSizeIterator::len).sum();
        let len = available.min(self.remaining);
        (len, Some(len))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for PatternIter<I> {}

impl<I: ExactSizeIterator> FusedIterator for PatternIter<I> {}
