// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for the color picker.

/// A result type alias for color picker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the color picker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be read or understood.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No async runtime was available to drive timers.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// User input was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A generic error with a message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a new error with a message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }
}

/// Why a piece of field text was not allowed to change the color.
///
/// Every variant is recoverable: the edit is dropped and the color stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The text is not a base-10 integer.
    #[error("not a number: {input:?}")]
    NotANumber {
        /// The rejected text.
        input: String,
    },

    /// The number is outside the range the field accepts.
    #[error("{value} is out of range {min}..={max}")]
    OutOfRange {
        /// The parsed value, saturated to `i64` when it overflowed.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// The text is not a 3 or 6 digit hex color.
    #[error("malformed hex color: {input:?}")]
    MalformedHex {
        /// The rejected text.
        input: String,
    },

    /// The hex digits could not be converted to an integer.
    #[error("hex color does not fit an integer: {input:?}")]
    ParseOverflow {
        /// The rejected text.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: Error = ValidationError::MalformedHex {
            input: "#12".into(),
        }
        .into();
        assert!(matches!(err, Error::Validation(ValidationError::MalformedHex { .. })));
        assert_eq!(
            err.to_string(),
            "Validation error: malformed hex color: \"#12\""
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::OutOfRange {
            value: 256,
            min: 0,
            max: 255,
        };
        assert_eq!(err.to_string(), "256 is out of range 0..=255");
    }
}
