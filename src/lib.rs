//! Blend several ordered sequences into one by a fixed, repeating take-ratio.
//!
//! A [`PatternMerge`] is configured with a *pattern*, one group size per input
//! collection, and optionally a *total*, the length of the result. Every
//! round takes one group from each collection in pattern order. A typical use
//! is diversifying results: take five items from source A, two from B and
//! three from C, repeat, until a page of N items is filled.
//!
//! # Examples
//!
//! ```rust
//! use pattern_merge::PatternMerge;
//!
//! let mut merger = PatternMerge::<Vec<&str>>::new([2, 1], Some(5)).unwrap();
//!
//! // Ask each source for exactly what it will contribute.
//! assert_eq!(merger.counts(), Some(&[4, 1][..]));
//!
//! let page = merger
//!     .merge(vec![vec!["a1", "a2", "a3", "a4"], vec!["b1", "b2"]])
//!     .unwrap();
//! assert_eq!(page, &["a1", "a2", "b1", "a3", "a4"]);
//! ```
//!
//! # Operations
//!
//! - [`PatternMerge::merge`]: merge into the engine's own wrapper.
//! - [`PatternMerge::merge_into`]: merge into a caller-supplied wrapper.
//! - [`PatternMerge::iter`]: merge lazily through an iterator.
//! - [`PatternMerge::stream`]: merge asynchronous streams in pattern order.
//!
//! # Wrappers
//!
//! Output is written into anything implementing [`Wrapper`]: `Vec<T>`,
//! `VecDeque<T>`, and with the `smallvec` feature `SmallVec<A>`. A wrapper can
//! be reused across merges; [`TruncatePolicy`] decides whether its earlier
//! contents count towards the total.
//!
//! # Features
//!
//! - `std` (default): implement `std::error::Error` through the standard
//!   library. Without it the crate is `no_std` and needs only `alloc`.
//! - `serde`: (de)serialize [`MergeConfig`] and [`Pattern`].
//! - `smallvec`: implement [`Wrapper`] for `SmallVec`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

extern crate alloc;

mod collections;
mod config;
mod errors;
mod iter;
mod merge;
mod pattern;
mod utils;
mod wrapper;

pub mod stream;

/// The pattern merge prelude.
pub mod prelude {
    pub use super::collections::IntoCollections as _;
    pub use super::pattern::IntoPattern as _;
    pub use super::wrapper::Wrapper as _;
}

pub use collections::IntoCollections;
pub use config::{MergeConfig, MergeOptions, TruncatePolicy};
pub use errors::{Error, PatternError, Result};
pub use iter::PatternIter;
pub use merge::{PatternMerge, PatternMergeBuilder};
pub use pattern::{IntoPattern, Pattern};
pub use wrapper::Wrapper;
