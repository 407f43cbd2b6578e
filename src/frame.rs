//! The parser's explicit frame stack.
//!
//! Each frame represents one level of nesting (or, for scalar tokens, one
//! in-progress token) being parsed. The stack itself is a native `Vec`, each
//! frame owning its in-progress value, its pending return slot, and — for
//! object frames — the pending key, instead of the pointer-juggling array of
//! opaque pointers this design replaces (see `DESIGN.md`).

use crate::Value;

/// What kind of construct a frame is currently parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Start,
    ParseArray,
    ParseObject,
    ParseNumber,
    ParseString,
    ParseKeyword,
    ParseUtf8,
    Done,
}

/// Array sub-states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ArrayState {
    Default,
    NewMember,
    Separator,
}

/// Object sub-states, a bitset of which tokens are currently acceptable.
pub(crate) mod obj_state {
    pub const ACCEPT_KEY: u8 = 1 << 0;
    pub const ACCEPT_KV_DELIMITER: u8 = 1 << 1;
    pub const ACCEPT_VALUE: u8 = 1 << 2;
    pub const ACCEPT_MEMBER_DELIMITER: u8 = 1 << 3;
    pub const ACCEPT_CLOSE: u8 = 1 << 4;
}

/// Number sub-state bitset.
pub(crate) mod num_state {
    pub const IS_VALID: u16 = 1 << 0;
    pub const ACCEPT_SIGN: u16 = 1 << 1;
    pub const ACCEPT_DIGITS: u16 = 1 << 2;
    pub const ACCEPT_DEC_PT: u16 = 1 << 3;
    pub const ACCEPT_EXP: u16 = 1 << 4;
    pub const HAS_DIGITS: u16 = 1 << 5;
    pub const HAS_DEC_PT: u16 = 1 << 6;
    pub const HAS_EXP: u16 = 1 << 7;
    pub const DEFAULT: u16 = ACCEPT_SIGN | ACCEPT_DIGITS;
}

/// String sub-state bitset.
pub(crate) mod string_state {
    pub const ESCAPE: u8 = 1 << 0;
    pub const UTF8: u8 = 1 << 1;
    pub const UNICODE: u8 = 1 << 2;
    pub const SURROGATE: u8 = 1 << 3;
    pub const END: u8 = 1 << 4;
}

/// One level of the parser's stack.
#[derive(Debug)]
pub(crate) struct Frame {
    pub mode: Mode,

    /// Generic numeric state, reinterpreted according to `mode` (array state,
    /// object accept-flags, number flags, or string flags).
    pub state: u16,

    /// The value under construction at this frame (e.g. the array or object
    /// being built, or the in-progress string/number/keyword).
    pub value: Option<Value>,

    /// A completed child value handed up from the frame above, waiting to be
    /// absorbed (appended to an array, or matched against a pending key/value
    /// slot in an object).
    pub return_value: Option<Value>,

    /// For object frames: the most recently parsed member key, waiting for
    /// its value.
    pub key: Option<String>,
}

impl Frame {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            state: 0,
            value: None,
            return_value: None,
            key: None,
        }
    }
}
