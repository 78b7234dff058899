//! Error handling for Cutpath
//!
//! Provides error types for the decoding layers of the application:
//! - Decode errors (instruction files, trace files, debug descriptors)
//! - I/O and JSON errors from import/export
//!
//! Interactive operations never produce errors; only decoding and file
//! access can fail. All error types use `thiserror`.

use thiserror::Error;

/// Decode error type
///
/// Raised while turning serialized instruction or trace data into
/// in-memory values. A decode error aborts only the operation that hit it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Instruction tag is not one of the known variants
    #[error("Unknown instruction at index {index}: {tag}")]
    UnknownInstruction {
        /// Position of the instruction in the list.
        index: usize,
        /// The unrecognized tag.
        tag: String,
    },

    /// Instruction has a known tag but an invalid payload
    #[error("Malformed instruction at index {index}: {reason}")]
    MalformedInstruction {
        /// Position of the instruction in the list.
        index: usize,
        /// Why the payload was rejected.
        reason: String,
    },

    /// Debug renderable names a kind the viewer does not know
    #[error("Unknown renderable: {descriptor}")]
    UnknownRenderable {
        /// The raw descriptor.
        descriptor: String,
    },

    /// Debug renderable could not be parsed
    #[error("Malformed renderable '{descriptor}': {reason}")]
    MalformedRenderable {
        /// The raw descriptor.
        descriptor: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Step duration is zero or out of range
    #[error("Invalid step duration: {secs}s + {nanos}ns")]
    InvalidDuration {
        /// Whole seconds.
        secs: u64,
        /// Nanosecond remainder.
        nanos: u32,
    },

    /// Required field is missing from a record
    #[error("Missing field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },
}

/// Main error type for Cutpath
///
/// A unified error type for every fallible operation in the library crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Decode error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// JSON syntax or schema error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error came from malformed input
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::Json(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
