//! Pattern merging over asynchronous streams.
//!
//! # Examples
//!
//! ```
//! use futures_lite::future::block_on;
//! use futures_lite::{stream, StreamExt};
//! use pattern_merge::{MergeOptions, PatternMerge};
//!
//! block_on(async {
//!     let merger = PatternMerge::<Vec<u8>>::new([2, 1], Some(5)).unwrap();
//!     let a = stream::iter(vec![1, 1, 1, 1]);
//!     let b = stream::iter(vec![2, 2, 2, 2]);
//!     let s = merger.stream([a, b], MergeOptions::new()).unwrap();
//!
//!     assert_eq!(s.collect::<Vec<_>>().await, [1, 1, 2, 1, 1]);
//! })
//! ```
//!
//! # Ordering
//!
//! Sources are polled strictly one at a time, in pattern order. When the
//! current source is pending the whole stream is pending; later sources are
//! never polled ahead of their turn, so the output order is identical to a
//! [`merge`][crate::PatternMerge::merge] of the same items.

pub use pattern_stream::PatternStream;

mod pattern_stream;
