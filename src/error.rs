//! Error types returned by the parser, value model, and chunked reader.

use thiserror::Error;

/// Hex-escapes any byte outside the printable ASCII range so it can be
/// embedded in a `String`-based error message without violating UTF-8.
///
/// The original error-message table this parser is modeled on formats the
/// offending byte with `%c`, which is unsound once the byte is non-ASCII;
/// this is the resolution recorded in `DESIGN.md`.
pub(crate) fn escape_byte_for_message(b: u8) -> String {
    if b.is_ascii_graphic() || b == b' ' {
        (b as char).to_string()
    } else {
        format!("\\x{b:02x}")
    }
}

/// The kind of syntax error encountered while parsing, together with the
/// 1-origin line and column at which it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The root of the document was something other than an array or object.
    #[error("Syntax Error [{line}:{col}]: Root value must be either an array or an object.")]
    InvalidRoot { line: usize, col: usize },

    /// Non-whitespace input was found after the root value had closed.
    #[error(
        "Syntax Error [{line}:{col}]: Illegal characters outside of root object, starting with ({token})."
    )]
    TrailingChars {
        line: usize,
        col: usize,
        token: String,
    },

    /// A token was expected but not found (e.g. a `:` or `,`).
    #[error("Syntax Error [{line}:{col}]: Missing token, expected ({expected}).")]
    ExpectedToken {
        line: usize,
        col: usize,
        expected: String,
    },

    /// A token appeared where it is not valid (e.g. a stray `,`).
    #[error("Syntax Error [{line}:{col}]: Unexpected token ({token}).")]
    UnexpectedToken {
        line: usize,
        col: usize,
        token: String,
    },

    /// A byte or byte sequence could not be classified as any valid token.
    #[error("Syntax Error [{line}:{col}]: Illegal token ({token}).")]
    IllegalToken {
        line: usize,
        col: usize,
        token: String,
    },

    /// An object member's key was not a string.
    #[error(
        "Syntax Error [{line}:{col}]: Illegal value type for key in object, member keys must be of type string."
    )]
    IllegalObjKey { line: usize, col: usize },

    /// `get_result` was called before the root value had finished parsing.
    #[error("Syntax Error [{line}:{col}]: Incomplete JSON object.")]
    IncompleteObject { line: usize, col: usize },

    /// The parser was asked to continue after it had already recorded an
    /// error; it refuses further input rather than silently resuming.
    #[error("Invalid context: parser has already failed")]
    InvalidContext,

    /// Nesting exceeded `max_depth`. The original parser this is modeled on
    /// has no such guard, since its frame stack is caller-allocated; the
    /// value-tree model here recurses through the Rust call stack during
    /// serialization and drop, so an attacker-controlled document can
    /// otherwise exhaust it. See `DESIGN.md`.
    #[error("Syntax Error [{line}:{col}]: Maximum nesting depth ({max_depth}) exceeded.")]
    MaxDepthExceeded {
        line: usize,
        col: usize,
        max_depth: usize,
    },
}

impl ParseError {
    pub(crate) fn illegal_token(line: usize, col: usize, token: impl Into<String>) -> Self {
        ParseError::IllegalToken {
            line,
            col,
            token: token.into(),
        }
    }

    pub(crate) fn unexpected_token(line: usize, col: usize, token: impl Into<String>) -> Self {
        ParseError::UnexpectedToken {
            line,
            col,
            token: token.into(),
        }
    }

    pub(crate) fn expected_token(line: usize, col: usize, expected: impl Into<String>) -> Self {
        ParseError::ExpectedToken {
            line,
            col,
            expected: expected.into(),
        }
    }
}

/// Errors from the synchronous/asynchronous chunked readers that drive a
/// [`JsonParser`](crate::JsonParser) from a byte source.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The parser reported a syntax error while consuming the bytes read so far.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
