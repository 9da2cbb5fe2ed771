use crate::charset::Charset;

/// An immutable byte payload bound for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteRequest {
    bytes: Vec<u8>,
}

impl WriteRequest {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Byte sink attached to the interactive session.
pub trait TerminalWriter {
    /// Enqueues a payload for transmission without blocking. The payload is
    /// handed off wholesale; the caller keeps no reference to it.
    fn write(&mut self, request: WriteRequest);

    /// Active charset for character-to-byte conversion. It may change
    /// between keystrokes, so callers query it for every write.
    fn charset(&self) -> Charset;
}
