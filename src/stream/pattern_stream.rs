use alloc::vec::Vec;
use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::stream::{FusedStream, Stream};
use pin_project::pin_project;

use crate::pattern::Pattern;
use crate::utils::{self, RoundCursor};

/// A stream that merges multiple streams by a repeating pattern.
///
/// This `struct` is created by the [`stream`] method on [`PatternMerge`]. See
/// its documentation for more.
///
/// [`stream`]: crate::PatternMerge::stream
/// [`PatternMerge`]: crate::PatternMerge
#[pin_project]
pub struct PatternStream<S> {
    #[pin]
    streams: Vec<S>,
    cursor: RoundCursor,
    remaining: Option<usize>,
    done: bool,
}

impl<S: Stream> PatternStream<S> {
    pub(crate) fn new(streams: Vec<S>, pattern: Pattern, limit: Option<usize>) -> Self {
        Self {
            streams,
            cursor: RoundCursor::new(pattern),
            remaining: limit,
            done: false,
        }
    }
}

impl<S> fmt::Debug for PatternStream<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.streams.iter()).finish()
    }
}

impl<S: Stream> Stream for PatternStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            if *this.remaining == Some(0) {
                *this.done = true;
                return Poll::Ready(None);
            }
            let Some(index) = this.cursor.current() else {
                *this.done = true;
                return Poll::Ready(None);
            };

            let stream = utils::get_pin_mut_from_vec(this.streams.as_mut(), index).unwrap();
            match stream.poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    this.cursor.consume();
                    if let Some(remaining) = this.remaining.as_mut() {
                        *remaining -= 1;
                    }
                    return Poll::Ready(Some(item));
                }
                Poll::Ready(None) => this.cursor.exhaust(),
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let upper = self
            .streams
            .iter()
            .map(|s| s.size_hint().1)
            .try_fold(0usize, |acc, n| n.and_then(|n| acc.checked_add(n)));
        match (upper, self.remaining) {
            (Some(upper), Some(remaining)) => (0, Some(upper.min(remaining))),
            (upper, None) => (0, upper),
            (None, remaining) => (0, remaining),
        }
    }
}

impl<S: Stream> FusedStream for PatternStream<S> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
