//! An async counterpart to [`reader::ChunkedReader`](crate::reader::ChunkedReader),
//! driving the same state machine from a [`tokio::io::AsyncRead`] source.
//! Gated behind the `tokio` feature.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::ReadError;
use crate::{JsonParser, Value};

const MAX_READ_BUFFER_SIZE: usize = 8192;

/// Reads from an [`AsyncRead`] source in buffers bounded by the parser's
/// `read_buffer_size` option (default 2048, capped at 8192) and feeds each
/// chunk to a [`JsonParser`]. Mirrors [`ChunkedReader`](crate::reader::ChunkedReader)
/// one-for-one, including transient-error retry and error wrapping.
pub struct AsyncChunkedReader<R> {
    reader: R,
    parser: JsonParser,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> AsyncChunkedReader<R> {
    /// Creates a reader with a default-configured [`JsonParser`].
    pub fn new(reader: R) -> Self {
        Self::with_parser(reader, JsonParser::new())
    }

    /// Creates a reader driving the given parser, which may already carry
    /// non-default [`crate::JsonParserOptions`].
    pub fn with_parser(reader: R, parser: JsonParser) -> Self {
        let cap = parser.options().read_buffer_size().min(MAX_READ_BUFFER_SIZE);
        Self {
            reader,
            parser,
            buf: vec![0u8; cap.max(1)],
        }
    }

    fn buffer_size(&self) -> usize {
        self.parser.options().read_buffer_size().min(MAX_READ_BUFFER_SIZE)
    }

    /// Performs a single bounded read and feeds whatever bytes it returned to
    /// the parser. Returns the number of bytes read (`0` at EOF) and whether
    /// the parser has now produced a complete root value.
    pub async fn read(&mut self) -> Result<(usize, bool), ReadError> {
        let cap = self.buffer_size().max(1);
        if self.buf.len() != cap {
            self.buf.resize(cap, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[..cap]).await {
                Ok(0) => {
                    let done = self.parser.parse(&[])?;
                    return Ok((0, done));
                }
                Ok(n) => {
                    let done = self.parser.parse(&self.buf[..n])?;
                    return Ok((n, done));
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock || e.kind() == io::ErrorKind::Interrupted => {
                    continue;
                }
                Err(e) => return Err(ReadError::Io(e)),
            }
        }
    }

    /// Reads repeatedly until the parser reports a complete root value, EOF
    /// is reached with no value produced, or an error occurs.
    pub async fn read_to_end(mut self) -> Result<Value, ReadError> {
        loop {
            let (n, done) = self.read().await?;
            if done {
                return Ok(self.parser.get_result().expect("parser just reported completion"));
            }
            if n == 0 {
                self.parser.get_result();
                return Err(ReadError::Parse(
                    self.parser
                        .get_error()
                        .cloned()
                        .expect("EOF before completion always yields IncompleteObject"),
                ));
            }
        }
    }

    /// Returns a reference to the underlying parser.
    pub fn parser(&self) -> &JsonParser {
        &self.parser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_a_complete_value() {
        let reader = AsyncChunkedReader::new(br#"[1,2,3]"#.as_slice());
        let v = reader.read_to_end().await.unwrap();
        assert_eq!(v.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn truncated_input_is_incomplete_object() {
        let reader = AsyncChunkedReader::new(br#"{"a":"#.as_slice());
        let err = reader.read_to_end().await.unwrap_err();
        assert!(matches!(
            err,
            ReadError::Parse(crate::error::ParseError::IncompleteObject { .. })
        ));
    }
}
