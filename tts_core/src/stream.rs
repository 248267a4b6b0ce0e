//! Audio chunk streams.
//!
//! Chunk boundaries are whatever the provider's transport delivers. Nothing
//! here merges, splits or reorders them.
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
#[cfg(any(test, feature = "test-support"))]
use futures::stream;

use crate::ProviderError;

/// Ordered, finite sequence of audio chunks from a provider.
pub type AudioStream = Pin<Box<dyn Stream<Item = Result<Bytes, ProviderError>> + Send>>;

/// Wrap already-available chunks as an [`AudioStream`].
#[cfg(any(test, feature = "test-support"))]
pub fn from_chunks<I>(chunks: I) -> AudioStream
where
    I: IntoIterator<Item = Bytes>,
    I::IntoIter: Send + 'static,
{
    Box::pin(stream::iter(chunks.into_iter().map(Ok::<Bytes, ProviderError>)))
}

/// Like [`from_chunks`], but fails with `error` after the chunks are yielded.
#[cfg(any(test, feature = "test-support"))]
pub fn failing_after<I>(chunks: I, error: ProviderError) -> AudioStream
where
    I: IntoIterator<Item = Bytes>,
    I::IntoIter: Send + 'static,
{
    let head = stream::iter(chunks.into_iter().map(Ok::<Bytes, ProviderError>));
    let tail = stream::once(async move { Err(error) });
    Box::pin(futures::StreamExt::chain(head, tail))
}
