//! Chunked masking over live byte streams.
//!
//! Each chunk read from the source is decoded, masked and written downstream
//! immediately. Text is never buffered across chunks, so a value whose
//! characters arrive in two separate reads is not recognised as a whole and
//! may leak partially unmasked. Callers that need a hard guarantee should mask
//! complete records instead (see `headless`).
//!
//! License: MIT OR APACHE 2.0

use std::io::{self, Read, Write};
use std::sync::Arc;

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::decode::ChunkDecoder;
use crate::engine::Masker;
use crate::observer::{MaskObserver, NoopObserver};

/// Read size for `pipe` and `pipe_blocking`.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Counters for one piped stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub chunks: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// Stateless-per-text transform: one input chunk in, one masked chunk out.
pub struct MaskStream<'a, M: Masker + ?Sized> {
    masker: &'a M,
    decoder: ChunkDecoder,
    observer: Arc<dyn MaskObserver>,
}

impl<'a, M: Masker + ?Sized> MaskStream<'a, M> {
    pub fn new(masker: &'a M) -> Self {
        Self::with_observer(masker, Arc::new(NoopObserver))
    }

    pub fn with_observer(masker: &'a M, observer: Arc<dyn MaskObserver>) -> Self {
        Self {
            masker,
            decoder: ChunkDecoder::new(),
            observer,
        }
    }

    /// Decodes and masks one chunk. The result may be empty when the chunk
    /// only carried the start of a multi-byte character.
    pub fn transform(&mut self, chunk: &[u8]) -> String {
        let text = self.decoder.decode(chunk);
        let masked = if text.is_empty() {
            text
        } else {
            self.masker.mask(&text)
        };
        self.observer.chunk_masked(chunk.len(), masked.len());
        masked
    }

    /// Masks whatever the decoder still holds at end of stream.
    pub fn finish(&mut self) -> String {
        let rest = self.decoder.finish();
        if rest.is_empty() {
            rest
        } else {
            self.masker.mask(&rest)
        }
    }
}

/// Copies `reader` to `writer`, masking chunk by chunk and flushing after
/// every chunk.
pub fn pipe_blocking<M, R, W>(masker: &M, reader: R, writer: W) -> io::Result<StreamStats>
where
    M: Masker + ?Sized,
    R: Read,
    W: Write,
{
    pipe_blocking_with(MaskStream::new(masker), reader, writer)
}

/// `pipe_blocking` with a caller-supplied transform (for a custom observer).
pub fn pipe_blocking_with<M, R, W>(
    mut stream: MaskStream<'_, M>,
    mut reader: R,
    mut writer: W,
) -> io::Result<StreamStats>
where
    M: Masker + ?Sized,
    R: Read,
    W: Write,
{
    let mut stats = StreamStats::default();
    let mut buf = vec![0u8; DEFAULT_CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let masked = stream.transform(&buf[..n]);
        writer.write_all(masked.as_bytes())?;
        writer.flush()?;
        stats.chunks += 1;
        stats.bytes_in += n as u64;
        stats.bytes_out += masked.len() as u64;
    }

    let rest = stream.finish();
    writer.write_all(rest.as_bytes())?;
    writer.flush()?;
    stats.bytes_out += rest.len() as u64;

    debug!("Stream closed: {:?}", stats);
    Ok(stats)
}

/// Async counterpart of `pipe_blocking`. The only await points are the read
/// and the write; masking itself is synchronous.
pub async fn pipe<M, R, W>(masker: &M, reader: R, writer: W) -> io::Result<StreamStats>
where
    M: Masker + ?Sized,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pipe_with(MaskStream::new(masker), reader, writer).await
}

pub async fn pipe_with<M, R, W>(
    mut stream: MaskStream<'_, M>,
    mut reader: R,
    mut writer: W,
) -> io::Result<StreamStats>
where
    M: Masker + ?Sized,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = StreamStats::default();
    let mut buf = vec![0u8; DEFAULT_CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        let masked = stream.transform(&buf[..n]);
        writer.write_all(masked.as_bytes()).await?;
        writer.flush().await?;
        stats.chunks += 1;
        stats.bytes_in += n as u64;
        stats.bytes_out += masked.len() as u64;
    }

    let rest = stream.finish();
    writer.write_all(rest.as_bytes()).await?;
    writer.flush().await?;
    stats.bytes_out += rest.len() as u64;

    debug!("Stream closed: {:?}", stats);
    Ok(stats)
}
