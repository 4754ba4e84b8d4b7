use core::iter::Take;

/// Splits one collection into consecutive groups of a fixed size.
///
/// Groups are drawn lazily and in order. The last group is shorter when the
/// collection length is not a multiple of the group size, and once the
/// collection is drained every further group is empty.
#[derive(Debug)]
pub(crate) struct Slicer<I> {
    iter: I,
    size: usize,
}

impl<I: ExactSizeIterator> Slicer<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        debug_assert!(size > 0, "group size must be at least 1");
        Self { iter, size }
    }

    /// The number of groups still to be drawn.
    pub(crate) fn groups(&self) -> usize {
        self.iter.len().div_ceil(self.size)
    }

    /// Draw the next group.
    pub(crate) fn next_group(&mut self) -> Take<&mut I> {
        self.iter.by_ref().take(self.size)
    }
}
