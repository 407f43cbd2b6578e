//! Turns a [`Value`] tree back into JSON text.

use crate::Value;

/// Errors returned by [`serialize`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// Only arrays and objects may serve as the document root.
    #[error("root value must be either an array or an object")]
    InvalidRoot,
}

/// Serializes `value` to a JSON string.
///
/// Only arrays and objects are legal document roots, mirroring the same
/// restriction the parser enforces on its way in.
pub fn serialize(value: &Value) -> Result<String, SerializeError> {
    if !value.is_array() && !value.is_object() {
        return Err(SerializeError::InvalidRoot);
    }
    let mut out = Vec::new();
    write_value(value, &mut out);
    Ok(String::from_utf8(out).expect("serializer only ever copies through valid UTF-8 bytes"))
}

/// Wraps `serialized` in `"..."` and escapes `\` and `"`, so the result can
/// be embedded as a string literal inside another JSON document.
pub fn escape_for_embedding(serialized: &str) -> String {
    let mut out = String::with_capacity(serialized.len() + 2);
    out.push('"');
    for c in serialized.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => write_bytes_escaped(s.as_bytes(), out),
        Value::Array(items) => write_array(items, out),
        Value::Object(trie) => write_object(trie, out),
    }
}

fn write_number(n: f64, out: &mut Vec<u8>) {
    // Rust's shortest-round-trip formatting, unlike a fixed-precision `%g`,
    // guarantees `parse::<f64>(&n.to_string()) == n` — see DESIGN.md.
    out.extend_from_slice(n.to_string().as_bytes());
}

/// Escapes the control characters JSON requires (`\t \n \r \b \f \\ \"`);
/// every other byte, including the lead and continuation bytes of a
/// multi-byte UTF-8 sequence, is copied through unchanged and byte-exact.
fn write_bytes_escaped(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(b'"');
    for &b in bytes {
        match b {
            b'\t' => out.extend_from_slice(b"\\t"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'"' => out.extend_from_slice(b"\\\""),
            _ => out.push(b),
        }
    }
    out.push(b'"');
}

fn write_array(items: &[Value], out: &mut Vec<u8>) {
    out.push(b'[');
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            out.push(b',');
        }
        write_value(item, out);
    }
    out.push(b']');
}

fn write_object(trie: &crate::trie::Trie, out: &mut Vec<u8>) {
    out.push(b'{');
    let mut first = true;
    trie.iterate(|key, value| {
        if !first {
            out.push(b',');
        }
        first = false;
        write_bytes_escaped(key.as_bytes(), out);
        out.push(b':');
        write_value(value, out);
    });
    out.push(b'}');
}
