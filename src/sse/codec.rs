//! Byte-level line splitting for the log stream

use bytes::{Bytes, BytesMut};
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder};

use super::parser::MAX_LINE_LENGTH;

/// One newline-delimited chunk of the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line {
    /// Raw bytes of a line, without the `\n`
    Complete(Bytes),
    /// A line longer than the limit; its bytes are discarded up to the next `\n`
    Oversized,
}

/// Splits a body on `\n` without assuming it is valid UTF-8
///
/// Line length is capped so a body without newlines is never buffered whole.
/// Overlong lines are reported as [`Line::Oversized`] instead of failing the
/// read, and splitting resumes after the next newline.
#[derive(Debug)]
pub(crate) struct LineCodec {
    inner: AnyDelimiterCodec,
}

impl LineCodec {
    pub(crate) fn new() -> Self {
        Self::with_max_length(MAX_LINE_LENGTH)
    }

    pub(crate) fn with_max_length(max_length: usize) -> Self {
        Self {
            inner: AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), Vec::new(), max_length),
        }
    }

    fn classify(result: Result<Option<Bytes>, AnyDelimiterCodecError>) -> std::io::Result<Option<Line>> {
        match result {
            Ok(line) => Ok(line.map(Line::Complete)),
            Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => Ok(Some(Line::Oversized)),
            Err(AnyDelimiterCodecError::Io(err)) => Err(err),
        }
    }
}

impl Decoder for LineCodec {
    type Item = Line;
    type Error = std::io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> std::io::Result<Option<Line>> {
        Self::classify(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> std::io::Result<Option<Line>> {
        Self::classify(self.inner.decode_eof(buf))
    }
}
