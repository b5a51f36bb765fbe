//! The tokenizer's stable error taxonomy.
//!
//! Every failure `parse` can produce is a variant of [`Status`]. The status
//! codes are a closed, stable set a caller is expected to match on, so
//! they're represented as an enum rather than a message-plus-location
//! struct.

use thiserror::Error;

/// Why a [`crate::parse`] call failed, and where in the input it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Status {
    #[error("unknown error at byte {index}")]
    UnknownError { index: usize },

    #[error("token pool exhausted while allocating token {attempted}")]
    NoMemory { attempted: usize },

    #[error("invalid character at byte {index}")]
    Invalid { index: usize },

    #[error("input ended before token starting at byte {start} was closed")]
    PartialToken { start: usize },

    #[error("key at byte {key_start} has no value")]
    KeyNoVal { key_start: usize },

    #[error("comma at byte {index} with no preceding key")]
    CommaNoKey { index: usize },

    #[error("object at byte {index} has an invalid parent")]
    ObjectInvalidParent { index: usize },

    #[error("invalid primitive literal at byte {start}")]
    InvalidPrimitive { start: usize },

    #[error("outermost JSON value must be an object")]
    NonObject,

    #[error("invalid start of value at byte {index}")]
    InvalidStart { index: usize },

    #[error("invalid end of value at byte {index}")]
    InvalidEnd { index: usize },

    #[error("expected a string key at byte {index}")]
    ObjNoKey { index: usize },

    #[error("array element at byte {index} does not match the array's element kind")]
    MixedArray { index: usize },

    #[error("misplaced array separator at byte {index}")]
    ArraySeparator { index: usize },

    #[error("stray comma at byte {index}")]
    StrayComma { index: usize },

    #[error("expected ':' after key, found byte {index}")]
    ValNoColon { index: usize },

    #[error("key at byte {key_start} is bound to more than one value")]
    KeyMultipleVal { key_start: usize },

    #[error("invalid parent for token at byte {index}")]
    InvalidParent { index: usize },

    #[error("expected ',' or closing bracket at byte {index}")]
    ValNoComma { index: usize },

    #[error("outermost JSON value must not be an array")]
    NonArray,

    #[error("empty key at byte {index}")]
    EmptyKey { index: usize },

    #[error("recursion limit ({limit}) exceeded at byte {index}")]
    NestDepthExceeded { index: usize, limit: usize },
}

impl Status {
    /// Byte offset the parser had reached when it produced this status, for
    /// diagnostics. Not all variants have one byte offset that is more
    /// meaningful than another (e.g. [`Status::NonObject`] fails before any
    /// byte is consumed), in which case this returns `0`.
    pub fn index(&self) -> usize {
        match *self {
            Status::UnknownError { index }
            | Status::Invalid { index }
            | Status::CommaNoKey { index }
            | Status::ObjectInvalidParent { index }
            | Status::InvalidStart { index }
            | Status::InvalidEnd { index }
            | Status::ObjNoKey { index }
            | Status::MixedArray { index }
            | Status::ArraySeparator { index }
            | Status::StrayComma { index }
            | Status::ValNoColon { index }
            | Status::InvalidParent { index }
            | Status::ValNoComma { index }
            | Status::EmptyKey { index }
            | Status::NestDepthExceeded { index, .. } => index,
            Status::NoMemory { attempted } => attempted,
            Status::PartialToken { start } => start,
            Status::KeyNoVal { key_start } => key_start,
            Status::InvalidPrimitive { start } => start,
            Status::KeyMultipleVal { key_start } => key_start,
            Status::NonObject | Status::NonArray => 0,
        }
    }
}
