//! # jxon
//!
//! A streaming, incremental JSON parser and serializer backed by a
//! dynamically-typed value model.
//!
//! Bytes are fed to a [`JsonParser`] in chunks of any size — down to a
//! single byte at a time — and the parser resumes exactly where it left
//! off, tracking line/column position and reporting precise syntax errors.
//! Once a complete root value has been parsed, it is returned as a [`Value`]
//! tree that can be inspected, mutated, or handed to [`serializer::serialize`].
//!
//! ## Examples
//!
//! ### Feeding chunks directly
//!
//! ```
//! use jxon::JsonParser;
//!
//! let mut parser = JsonParser::new();
//! assert_eq!(parser.parse(br#"{"name": "#).unwrap(), false);
//! assert_eq!(parser.parse(br#""Elvis"}"#).unwrap(), true);
//!
//! let value = parser.get_result().unwrap();
//! assert_eq!(
//!     value.as_object().unwrap().get("name").unwrap().as_str(),
//!     Some("Elvis")
//! );
//! ```
//!
//! ### Reading from a `std::io::Read` source
//!
//! [`reader::ChunkedReader`] drives the parser from anything implementing
//! [`std::io::Read`], in bounded buffers, retrying transient I/O errors.
//!
//! ```
//! use std::io::Cursor;
//! use jxon::reader::ChunkedReader;
//!
//! let reader = ChunkedReader::new(Cursor::new(br#"[1, 2, 3]"#.to_vec()));
//! let value = reader.read_to_end().unwrap();
//! assert_eq!(value.as_array().unwrap().len(), 3);
//! ```
//!
//! ### Serializing a value back to JSON text
//!
//! ```
//! use jxon::{serializer, JsonParser};
//!
//! let mut parser = JsonParser::new();
//! parser.parse(br#"{"b": true, "a": 1}"#).unwrap();
//! let value = parser.get_result().unwrap();
//!
//! // object keys are always written in lexicographic byte order
//! assert_eq!(serializer::serialize(&value).unwrap(), r#"{"a":1,"b":true}"#);
//! ```
//!
//! ### Converting to a Serde JSON Value
//!
//! For testing and compatibility reasons, jxon can convert its own [`Value`]
//! tree to and from a [Serde JSON](https://github.com/serde-rs/json) `Value`.
//!
//! Heads up: you need to enable the `serde_json` feature for this.
//!
//! ```
//! use jxon::serde_json::parse_to_serde_json;
//!
//! let json = r#"{"name": "Elvis"}"#.as_bytes();
//! let value = parse_to_serde_json(json).unwrap();
//!
//! assert!(value.is_object());
//! assert_eq!(value["name"], "Elvis");
//! ```
//!
//! However, if you find yourself always converting right away, you probably
//! don't need jxon's incremental, trie-backed value model and your data
//! fits comfortably into memory; in that case you're likely better off
//! using Serde JSON directly.

mod error;
mod frame;
mod options;
mod parser;
pub mod reader;
pub mod serializer;
#[cfg(feature = "tokio")]
pub mod tokio;
mod trie;
mod value;

#[cfg(feature = "serde_json")]
pub mod serde_json;

pub use error::{ParseError, ReadError};
pub use options::{Extensions, JsonParserOptions, JsonParserOptionsBuilder};
pub use parser::JsonParser;
pub use trie::Trie;
pub use value::{JsonString, Value};
