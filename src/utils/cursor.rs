use fixedbitset::FixedBitSet;

use crate::pattern::Pattern;

/// Tracks which source the next element of a lazy merge comes from.
///
/// Walks the pattern position by position, taking up to the group size from
/// each source before moving on. Exhausted sources are skipped. This yields
/// the same order as assembling whole rounds of groups.
#[derive(Debug, Clone)]
pub(crate) struct RoundCursor {
    pattern: Pattern,
    index: usize,
    taken: usize,
    exhausted: FixedBitSet,
}

impl RoundCursor {
    pub(crate) fn new(pattern: Pattern) -> Self {
        let exhausted = FixedBitSet::with_capacity(pattern.len());
        Self {
            pattern,
            index: 0,
            taken: 0,
            exhausted,
        }
    }

    /// The source to pull from next, or `None` once every source is exhausted.
    pub(crate) fn current(&mut self) -> Option<usize> {
        if self.is_done() {
            return None;
        }
        while self.exhausted.contains(self.index) || self.taken >= self.pattern[self.index] {
            self.advance();
        }
        Some(self.index)
    }

    /// Record that the current source produced an element.
    pub(crate) fn consume(&mut self) {
        self.taken += 1;
    }

    /// Record that the current source has no more elements.
    pub(crate) fn exhaust(&mut self) {
        self.exhausted.insert(self.index);
        self.advance();
    }

    /// Whether every source has been exhausted.
    pub(crate) fn is_done(&self) -> bool {
        self.exhausted.count_ones(..) == self.pattern.len()
    }

    fn advance(&mut self) {
        self.taken = 0;
        self.index = (self.index + 1).wrapping_rem(self.pattern.len());
    }
}
