use bytes::{Bytes, BytesMut};

pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// A complete, playable audio resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBlob {
    pub bytes: Bytes,
    pub mime_type: &'static str,
}

/// Received chunks in arrival order. No size limit.
#[derive(Debug, Default)]
pub struct PlaybackBuffer {
    chunks: Vec<Bytes>,
    len: usize,
}

impl PlaybackBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: Bytes) {
        self.len += chunk.len();
        self.chunks.push(chunk);
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn byte_len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Concatenate everything received into one blob.
    pub fn into_blob(self) -> AudioBlob {
        let mut out = BytesMut::with_capacity(self.len);
        for chunk in self.chunks {
            out.extend_from_slice(&chunk);
        }
        AudioBlob {
            bytes: out.freeze(),
            mime_type: AUDIO_MIME_TYPE,
        }
    }
}
