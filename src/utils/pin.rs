use alloc::vec::Vec;
use core::pin::Pin;
use core::slice::SliceIndex;

/// Returns a pinned mutable reference to an element or subslice depending on the
/// type of index, or `None` if the index is out of bounds.
#[inline]
pub(crate) fn get_pin_mut<T, I>(slice: Pin<&mut [T]>, index: I) -> Option<Pin<&mut I::Output>>
where
    I: SliceIndex<[T]>,
{
    // SAFETY: `get_unchecked_mut` is never used to move the slice inside `self` (`SliceIndex`
    // is sealed and all `SliceIndex::get_mut` implementations never move elements).
    // `x` is guaranteed to be pinned because it comes from `self` which is pinned.
    unsafe {
        slice
            .get_unchecked_mut()
            .get_mut(index)
            .map(|x| Pin::new_unchecked(x))
    }
}

/// Returns a pinned mutable reference to an element of a pinned `Vec`.
#[inline]
pub(crate) fn get_pin_mut_from_vec<T, I>(
    vec: Pin<&mut Vec<T>>,
    index: I,
) -> Option<Pin<&mut I::Output>>
where
    I: SliceIndex<[T]>,
{
    // SAFETY: the `Vec` is only viewed as a slice; it is never grown, shrunk,
    // or reallocated through this projection, so its elements stay in place.
    let slice = unsafe { vec.map_unchecked_mut(|v| v.as_mut_slice()) };
    get_pin_mut(slice, index)
}
