use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// An ordered output container that merges are written into.
///
/// A wrapper must be able to append elements in order, report its length, and
/// drop everything past a given length. Anything that cannot do all three
/// cannot be merged into.
///
/// # Examples
///
/// ```
/// use pattern_merge::Wrapper;
/// use std::collections::VecDeque;
///
/// let mut out: VecDeque<u8> = VecDeque::new();
/// out.append_items([1, 2, 3]);
/// out.truncate_to(2);
/// assert_eq!(Wrapper::len(&out), 2);
/// ```
pub trait Wrapper {
    /// The type of the elements held by the wrapper.
    type Item;

    /// The number of elements currently held.
    fn len(&self) -> usize;

    /// Whether the wrapper holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `items` after the existing contents, in order.
    fn append_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Self::Item>;

    /// Keep the first `len` elements and drop the rest. Does nothing if the
    /// wrapper is already that short.
    fn truncate_to(&mut self, len: usize);
}

impl<T> Wrapper for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn append_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items);
    }

    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }
}

impl<T> Wrapper for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn append_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items);
    }

    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Wrapper for smallvec::SmallVec<A> {
    type Item = A::Item;

    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    fn append_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = A::Item>,
    {
        self.extend(items);
    }

    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }
}
