//! Input validation, the first stage of the conversion pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{CliError, ConversionError};
use crate::input::Input;

/// How strictly input text is checked before tokenization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Any text is accepted; digit-only words are kept
    #[default]
    Lenient,
    /// Text must contain a letter; digit-only words are dropped
    Strict,
}

impl ValidationPolicy {
    #[must_use]
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationPolicy::Strict)
    }
}

impl FromStr for ValidationPolicy {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ValidationPolicy::Lenient),
            "strict" => Ok(ValidationPolicy::Strict),
            _ => Err(CliError::InvalidPolicy {
                policy: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Lenient => write!(f, "lenient"),
            ValidationPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Text that passed validation.
///
/// Holds the caller's string untouched; [`ValidatedString::is_blank`] tells
/// whether it is the "valid but empty" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedString(String);

impl ValidatedString {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing but whitespace remains after trimming
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Deref for ValidatedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidatedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of a non-failing validation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Empty when valid
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate an arbitrary input, returning the text it carries.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::NullInput`] for null or undefined
    /// - [`ConversionError::InvalidType`] for anything that is not text
    /// - [`ConversionError::NoAlphabeticContent`] under the strict policy when the
    ///   trimmed text is non-empty but has no letter
    pub fn validate(&self, input: Input) -> Result<ValidatedString, ConversionError> {
        let text = match input {
            Input::Text(text) => text,
            absent if absent.is_absent() => {
                return Err(ConversionError::null_input(absent.type_name()));
            }
            other => return Err(ConversionError::invalid_type(other.type_name())),
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(ValidatedString(text));
        }

        if self.policy.is_strict() && !trimmed.chars().any(char::is_alphabetic) {
            return Err(ConversionError::no_alphabetic_content(&text));
        }

        Ok(ValidatedString(text))
    }

    /// Same checks as [`Validator::validate`], reported instead of raised
    #[must_use]
    pub fn check(&self, input: impl Into<Input>) -> ValidationReport {
        match self.validate(input.into()) {
            Ok(_) => ValidationReport {
                is_valid: true,
                message: String::new(),
            },
            Err(e) => ValidationReport {
                is_valid: false,
                message: e.to_string(),
            },
        }
    }
}
