//! Chunk sources for the stream reader.

use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Default read size for [`ReaderSource`]
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// A byte stream consumed one chunk at a time.
///
/// Opening the underlying file or connection is the caller's job; the stream
/// reader only pulls from an already opened source.
#[async_trait]
pub trait ChunkSource: Send {
    /// Read the next chunk, or `None` once the source is exhausted
    async fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Adapts any [`AsyncRead`] (file, socket, response body) into a [`ChunkSource`]
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    chunk_size: usize,
}

impl<R> ReaderSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self { reader, chunk_size: chunk_size.max(1) }
    }
}

#[async_trait]
impl<R> ChunkSource for ReaderSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buf = vec![0u8; self.chunk_size];
        let n = self.reader.read(&mut buf).await?;
        if n == 0 {
            return Ok(None);
        }
        buf.truncate(n);
        Ok(Some(buf))
    }
}

/// In-memory source yielding pre-split chunks in order
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    chunks: VecDeque<Vec<u8>>,
}

impl MemorySource {
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self { chunks: chunks.into_iter().map(Into::into).collect() }
    }
}

#[async_trait]
impl ChunkSource for MemorySource {
    async fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.chunks.pop_front())
    }
}

#[async_trait]
impl<S> ChunkSource for Box<S>
where
    S: ChunkSource + ?Sized,
{
    async fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        (**self).next_chunk().await
    }
}

/// A boxed source, for mixing source kinds in one collection
pub type BoxedSource = Box<dyn ChunkSource>;

/// Boxes a source
pub fn boxed<S: ChunkSource + 'static>(source: S) -> BoxedSource {
    Box::new(source)
}
