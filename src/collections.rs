use alloc::vec::Vec;

/// Conversion into the per-position inputs of a merge.
///
/// Each collection must know its length up front so a merge can be validated
/// before anything is consumed. Implemented for vecs and arrays of anything
/// that turns into an [`ExactSizeIterator`]: `Vec<Vec<T>>`, `[&[T]; N]`,
/// `Vec<std::collections::VecDeque<T>>`, and so on.
///
/// Elements are never inspected. An element that is itself a sequence is
/// carried through a merge as a single item.
pub trait IntoCollections {
    /// The type of the elements being merged.
    type Item;

    /// The iterator each collection is drained through.
    type IntoIter: ExactSizeIterator<Item = Self::Item>;

    /// Turn `self` into one iterator per collection, in order.
    fn into_collections(self) -> Vec<Self::IntoIter>;
}

impl<C> IntoCollections for Vec<C>
where
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
{
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    fn into_collections(self) -> Vec<Self::IntoIter> {
        self.into_iter().map(IntoIterator::into_iter).collect()
    }
}

impl<C, const N: usize> IntoCollections for [C; N]
where
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
{
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    fn into_collections(self) -> Vec<Self::IntoIter> {
        self.into_iter().map(IntoIterator::into_iter).collect()
    }
}
