//! Best-effort byte-to-text decoding in front of the engine.
//!
//! The engine only ever sees `&str`. Invalid UTF-8 is replaced with U+FFFD
//! rather than rejected, so decoding never fails.

use std::borrow::Cow;

/// Decodes a complete buffer, replacing invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Decodes a byte stream chunk by chunk.
///
/// A multi-byte character cut in half by a read is held back (at most three
/// bytes) and completed by the next chunk. That is the only state kept
/// between chunks.
#[derive(Debug, Default)]
pub struct ChunkDecoder {
    pending: Vec<u8>,
}

impl ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `chunk`, prefixed by any bytes held back from the last call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);
        let keep_from = incomplete_tail_start(&bytes);
        self.pending = bytes.split_off(keep_from);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Flushes held-back bytes. They can only be an invalid tail by now.
    pub fn finish(&mut self) -> String {
        let pending = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&pending).into_owned()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Index where a truncated trailing UTF-8 sequence starts, or `bytes.len()`.
fn incomplete_tail_start(bytes: &[u8]) -> usize {
    let len = bytes.len();
    for back in 1..=len.min(3) {
        let byte = bytes[len - back];
        if byte & 0xC0 == 0x80 {
            continue;
        }
        let width = match byte {
            b if b & 0xE0 == 0xC0 => 2,
            b if b & 0xF0 == 0xE0 => 3,
            b if b & 0xF8 == 0xF0 => 4,
            _ => 1,
        };
        return if width > back { len - back } else { len };
    }
    len
}
