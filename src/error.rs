//! Error handling for case conversion.
//!
//! Conversion failures are returned as a typed enum with specific fields for each
//! kind of rejected input, so callers can tell "bad value" apart from "no words".
//!
//! # Error Types
//!
//! ## NullInput
//! The input was null or undefined.
//!
//! Example:
//! ```json
//! {
//!   "type": "null-input",
//!   "value": "undefined"
//! }
//! ```
//!
//! ## InvalidType
//! The input was not text. Includes the observed type name.
//!
//! Example:
//! ```json
//! {
//!   "type": "invalid-type",
//!   "actual": "number"
//! }
//! ```
//!
//! ## NoAlphabeticContent
//! Strict conversions only. The trimmed input has characters but no letters.
//!
//! Example:
//! ```json
//! {
//!   "type": "no-alphabetic-content",
//!   "input": "03"
//! }
//! ```
//!
//! ## EmptyTokenSequence
//! Strict conversions only. The input has letters but none survived tokenization
//! (for example letters outside ASCII).
//!
//! Example:
//! ```json
//! {
//!   "type": "empty-token-sequence",
//!   "input": "ÉÈ",
//!   "style": "camelCase"
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::renderer::CaseStyle;

#[derive(Debug, Error)]
pub enum Error {
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned when an input cannot be converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ConversionError {
    /// Input was null or undefined
    #[error("Input cannot be {value}")]
    NullInput {
        /// Which absent sentinel was observed (`null` or `undefined`)
        value: String,
    },

    /// Input was not text
    #[error("Input must be a string, received {actual}")]
    InvalidType {
        /// Type name of the value that was received
        actual: String,
    },

    /// Trimmed input is non-empty but contains no letters
    #[error(
        "Invalid input: \"{input}\" contains no alphabetic characters; at least one letter is required"
    )]
    NoAlphabeticContent {
        /// The offending input
        input: String,
    },

    /// No word survived tokenization
    #[error("Invalid input: \"{input}\" does not contain any valid words for {style} conversion")]
    EmptyTokenSequence {
        /// The offending input
        input: String,
        /// Style the caller asked for
        style: CaseStyle,
    },
}

impl ConversionError {
    pub fn null_input(value: &str) -> Self {
        Self::NullInput {
            value: value.to_string(),
        }
    }

    pub fn invalid_type(actual: &str) -> Self {
        Self::InvalidType {
            actual: actual.to_string(),
        }
    }

    pub fn no_alphabetic_content(input: &str) -> Self {
        Self::NoAlphabeticContent {
            input: input.to_string(),
        }
    }

    pub fn empty_token_sequence(input: &str, style: CaseStyle) -> Self {
        Self::EmptyTokenSequence {
            input: input.to_string(),
            style,
        }
    }
}

/// Helper function to format style suggestions
fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => format!("Valid styles are: {}", CaseStyle::NAMES.join(", ")),
        [only] => format!("Did you mean '{only}'?"),
        _ => format!("Did you mean one of these? {}", suggestions.join(", ")),
    }
}

/// Errors raised while turning command line arguments into a configuration
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown case style '{style}'. {}", format_suggestions(suggestions))]
    InvalidStyle {
        style: String,
        suggestions: Vec<String>,
    },

    #[error("Invalid validation policy '{policy}'. Valid values: lenient, strict")]
    InvalidPolicy { policy: String },

    #[error("Invalid JSON input '{input}': {source}")]
    InvalidJsonInput {
        input: String,
        #[source]
        source: serde_json::Error,
    },
}
