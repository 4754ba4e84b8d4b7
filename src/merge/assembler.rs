use alloc::vec::Vec;

use tracing::trace;

use super::slicer::Slicer;
use crate::config::TruncatePolicy;
use crate::wrapper::Wrapper;

/// Interleaves sliced collections into a wrapper, one round at a time.
///
/// A round takes the next group from every collection in pattern order.
/// Rounds continue until the collections run dry or the wrapper reaches the
/// target length, then the wrapper is cut to exactly that length.
#[derive(Debug)]
pub(crate) struct Assembler<I> {
    slicers: Vec<Slicer<I>>,
    effective_total: usize,
    policy: TruncatePolicy,
}

impl<I: ExactSizeIterator> Assembler<I> {
    pub(crate) fn new(slicers: Vec<Slicer<I>>, effective_total: usize, policy: TruncatePolicy) -> Self {
        Self {
            slicers,
            effective_total,
            policy,
        }
    }

    /// Append rounds to `wrapper` and trim it. Returns the number of rounds
    /// appended.
    pub(crate) fn assemble<W>(mut self, wrapper: &mut W) -> usize
    where
        W: Wrapper<Item = I::Item> + ?Sized,
    {
        let max_rounds = self.slicers.iter().map(Slicer::groups).max().unwrap_or(0);
        let base = match self.policy {
            TruncatePolicy::Whole => 0,
            TruncatePolicy::Appended => wrapper.len(),
        };
        let target = base.saturating_add(self.effective_total);

        let mut rounds = 0;
        for round in 0..max_rounds {
            for slicer in &mut self.slicers {
                wrapper.append_items(slicer.next_group());
            }
            rounds += 1;
            trace!(round, len = wrapper.len(), target, "appended round");

            if wrapper.len() >= target {
                break;
            }
        }

        wrapper.truncate_to(target);
        rounds
    }
}
