//! Drives a [`JsonParser`] from a synchronous [`Read`] source in bounded
//! chunks, retrying transient I/O interruption and wrapping everything else
//! as a fatal [`ReadError`].

use std::io::{self, Read};
use std::path::Path;

use crate::error::ReadError;
use crate::options::JsonParserOptions;
use crate::{JsonParser, Value};

/// The largest buffer a [`ChunkedReader`] will ever allocate, regardless of
/// what [`JsonParserOptions::read_buffer_size`] requests.
const MAX_READ_BUFFER_SIZE: usize = 8192;

/// Reads from a [`Read`] source in buffers bounded by the parser's
/// `read_buffer_size` option (default 2048, capped at 8192) and feeds each
/// chunk to a [`JsonParser`].
///
/// ```
/// use std::io::Cursor;
/// use jxon::reader::ChunkedReader;
///
/// let mut reader = ChunkedReader::new(Cursor::new(br#"{"name":"Elvis"}"#.to_vec()));
/// let value = reader.read_to_end().unwrap();
/// assert_eq!(value.as_object().unwrap().get("name").unwrap().as_str(), Some("Elvis"));
/// ```
pub struct ChunkedReader<R> {
    reader: R,
    parser: JsonParser,
    buf: Vec<u8>,
}

impl<R: Read> ChunkedReader<R> {
    /// Creates a reader with a default-configured [`JsonParser`].
    pub fn new(reader: R) -> Self {
        Self::with_parser(reader, JsonParser::new())
    }

    /// Creates a reader driving the given parser, which may already carry
    /// non-default [`JsonParserOptions`].
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
    ///
    /// Transient errors (`WouldBlock`, `Interrupted`) are retried in place
    /// and never surfaced to the caller; any other I/O error, or a syntax
    /// error from the parser, is returned and the reader must not be used
    /// again.
    pub fn read(&mut self) -> Result<(usize, bool), ReadError> {
        let cap = self.buffer_size().max(1);
        if self.buf.len() != cap {
            self.buf.resize(cap, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[..cap]) {
                Ok(0) => {
                    // An empty slice can't advance the state machine; it
                    // only asks whether a root value has already completed.
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
    /// is reached with no value produced (an [`ReadError::Parse`] of
    /// [`crate::error::ParseError::IncompleteObject`]), or an error occurs.
    pub fn read_to_end(mut self) -> Result<Value, ReadError> {
        loop {
            let (n, done) = self.read()?;
            if done {
                return Ok(self.parser.get_result().expect("parser just reported completion"));
            }
            if n == 0 {
                // EOF without a complete value; let the parser's own
                // bookkeeping produce the right error.
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

    /// Reads in a loop until at least `n` bytes have been consumed in total
    /// or the parser completes, retrying transient errors. Useful for tests
    /// and callers that want coarser-grained control than one read at a
    /// time.
    pub fn read_block(&mut self, n: usize) -> Result<bool, ReadError> {
        let mut consumed = 0;
        loop {
            let (read, done) = self.read()?;
            if done {
                return Ok(true);
            }
            if read == 0 {
                return Ok(false);
            }
            consumed += read;
            if consumed >= n {
                return Ok(false);
            }
        }
    }

    /// Returns a reference to the underlying parser, e.g. to inspect
    /// [`JsonParser::get_error`] after a failed read.
    pub fn parser(&self) -> &JsonParser {
        &self.parser
    }
}

/// Opens `path`, drains it to completion (or the first error) through a
/// [`ChunkedReader`] configured with `options`, and returns the parsed root
/// value.
pub fn parse_whole_file(
    path: impl AsRef<Path>,
    options: JsonParserOptions,
) -> Result<Value, ReadError> {
    let file = std::fs::File::open(path)?;
    let reader = ChunkedReader::with_parser(file, JsonParser::new_with_options(options));
    reader.read_to_end()
}
