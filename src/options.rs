//! Parser configuration: depth limits, the tab-stop width used for column
//! tracking, the chunked reader's buffer size, and the optional grammar
//! extensions.

use std::ops::BitOr;

/// A bitset of optional relaxations to strict JSON. Combine flags with `|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extensions(u32);

impl Extensions {
    pub const NONE: Extensions = Extensions(0);

    /// Allow a trailing comma before an array's closing `]`.
    pub const ARRAY_TRAILING_COMMA: Extensions = Extensions(1 << 0);

    /// Allow a trailing comma before an object's closing `}`.
    pub const OBJECT_TRAILING_COMMA: Extensions = Extensions(1 << 1);

    /// Accept a bare UTF-8 `π` (U+03C0) at a value position, producing the
    /// number `3.14159`.
    pub const UTF8_PI: Extensions = Extensions(1 << 2);

    /// The union of all extensions.
    pub const ALL: Extensions =
        Extensions(Self::ARRAY_TRAILING_COMMA.0 | Self::OBJECT_TRAILING_COMMA.0 | Self::UTF8_PI.0);

    pub fn contains(self, other: Extensions) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Extensions {
    type Output = Extensions;

    fn bitor(self, rhs: Extensions) -> Extensions {
        Extensions(self.0 | rhs.0)
    }
}

/// Options for [`JsonParser`](crate::JsonParser). Use
/// [`JsonParserOptionsBuilder`] to create instances of this struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptions {
    /// The maximum nesting depth of arrays and objects.
    pub(crate) max_depth: usize,

    /// The number of columns a tab character advances to the next multiple of.
    pub(crate) tab_stop_width: usize,

    /// The buffer size used by the chunked reader, in bytes. Capped at 8192.
    pub(crate) read_buffer_size: usize,

    /// Enabled grammar extensions.
    pub(crate) extensions: Extensions,
}

impl Default for JsonParserOptions {
    /// Returns default JSON parser options: a maximum depth of 2048, a
    /// tab-stop width of 4, a read buffer size of 2048 bytes, and no
    /// extensions enabled.
    fn default() -> Self {
        Self {
            max_depth: 2048,
            tab_stop_width: 4,
            read_buffer_size: 2048,
            extensions: Extensions::NONE,
        }
    }
}

impl JsonParserOptions {
    /// Returns the maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the tab-stop width used when tracking column numbers.
    pub fn tab_stop_width(&self) -> usize {
        self.tab_stop_width
    }

    /// Returns the buffer size used by the chunked reader.
    pub fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    /// Returns the enabled grammar extensions.
    pub fn extensions(&self) -> Extensions {
        self.extensions
    }
}

/// A builder for [`JsonParserOptions`].
///
/// ```rust
/// use jxon::JsonParserOptionsBuilder;
/// use jxon::JsonParser;
///
/// let mut parser = JsonParser::new_with_options(
///     JsonParserOptionsBuilder::default()
///         .with_max_depth(16)
///         .build(),
/// );
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptionsBuilder {
    options: JsonParserOptions,
}

impl JsonParserOptionsBuilder {
    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Sets the tab-stop width used when tracking column numbers.
    pub fn with_tab_stop_width(mut self, tab_stop_width: usize) -> Self {
        self.options.tab_stop_width = tab_stop_width;
        self
    }

    /// Sets the buffer size used by the chunked reader. Values above 8192
    /// are capped at parse time.
    pub fn with_read_buffer_size(mut self, read_buffer_size: usize) -> Self {
        self.options.read_buffer_size = read_buffer_size;
        self
    }

    /// Enables the given grammar extensions (combine flags with `|`).
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.options.extensions = extensions;
        self
    }

    /// Creates the final [`JsonParserOptions`] object.
    pub fn build(self) -> JsonParserOptions {
        self.options
    }
}
