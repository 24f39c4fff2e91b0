//! ASCII DXF output
//!
//! Prints encoded tokens one per line to any byte sink. Text is written as
//! UTF-8 unless a code page encoding is set, in which case characters the
//! code page cannot represent are written as `\U+XXXX` escapes.

use crate::error::Result;
use encoding_rs::{EncoderResult, Encoding};
use std::io::Write;

/// ASCII DXF token printer
pub struct DxfTextWriter<W: Write> {
    writer: W,
    encoding: Option<&'static Encoding>,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new UTF-8 writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            encoding: None,
        }
    }

    /// Create a writer that encodes text in the given code page
    pub fn with_encoding(writer: W, encoding: &'static Encoding) -> Self {
        Self {
            writer,
            encoding: Some(encoding),
        }
    }

    /// The code page encoding, `None` for UTF-8
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    /// Write one token followed by a line terminator
    pub fn write_token(&mut self, token: &str) -> Result<()> {
        match self.encoding {
            Some(encoding) if !token.is_ascii() => {
                let bytes = encode_with_escapes(encoding, token);
                self.writer.write_all(&bytes)?;
            }
            _ => self.writer.write_all(token.as_bytes())?,
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write every token in order
    pub fn write_tokens<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.write_token(token.as_ref())?;
        }
        Ok(())
    }

    /// Flush the output
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Encode text, replacing unmappable characters with DXF unicode escapes
fn encode_with_escapes(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let mut encoder = encoding.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .unwrap_or(text.len() * 4);
    let mut out = Vec::with_capacity(capacity);
    let mut remaining = text;

    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut out, true);
        remaining = &remaining[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => out.reserve(remaining.len() * 4 + 16),
            EncoderResult::Unmappable(c) => {
                out.extend_from_slice(format!("\\U+{:04X}", u32::from(c)).as_bytes());
            }
        }
    }

    out
}
