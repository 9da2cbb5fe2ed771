use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character encoding the session expects its input bytes in.
///
/// The active charset belongs to the session writer and may change between
/// keystrokes, so conversions always go through a fresh query rather than a
/// cached value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl Charset {
    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Ascii => "US-ASCII",
            Charset::Latin1 => "ISO-8859-1",
        }
    }

    /// Encodes a string, failing on the first unrepresentable character.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, EncodeError> {
        if self == Charset::Utf8 {
            return Ok(text.as_bytes().to_vec());
        }

        let mut bytes = Vec::with_capacity(text.len());
        for ch in text.chars() {
            bytes.extend_from_slice(&self.encode_char(ch)?);
        }
        Ok(bytes)
    }

    /// Encodes a single character.
    pub fn encode_char(self, ch: char) -> Result<Vec<u8>, EncodeError> {
        match self {
            Charset::Utf8 => {
                let mut buf = [0u8; 4];
                Ok(ch.encode_utf8(&mut buf).as_bytes().to_vec())
            }
            Charset::Ascii if (ch as u32) <= 0x7f => Ok(vec![ch as u8]),
            Charset::Latin1 if (ch as u32) <= 0xff => Ok(vec![ch as u8]),
            Charset::Ascii | Charset::Latin1 => Err(EncodeError { ch, charset: self }),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A character the active charset cannot represent.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("character {ch:?} is not representable in {charset}")]
pub struct EncodeError {
    pub ch: char,
    pub charset: Charset,
}
