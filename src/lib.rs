pub mod converter;
pub mod error;
pub mod input;
pub mod renderer;
pub mod tokenizer;
pub mod validator;

pub use converter::Converter;
pub use error::{CliError, ConversionError, Error};
pub use input::Input;
pub use renderer::CaseStyle;
pub use tokenizer::{TokenSequence, Tokenizer, WordToken};
pub use validator::{ValidatedString, ValidationPolicy, ValidationReport, Validator};

/// Convert to camelCase, rejecting input without letters.
///
/// ```
/// assert_eq!(casekit::to_camel_case("SCREEN_NAME").unwrap(), "screenName");
/// assert!(casekit::to_camel_case("03").is_err());
/// ```
pub fn to_camel_case(input: impl Into<Input>) -> Result<String, ConversionError> {
    Converter::new(CaseStyle::Camel).convert(input)
}

/// Convert to kebab-case. Any text is accepted.
pub fn to_kebab_case(input: impl Into<Input>) -> Result<String, ConversionError> {
    Converter::new(CaseStyle::Kebab).convert(input)
}

/// Convert to dot.case, rejecting input without letters. Existing dots separate words.
pub fn to_dot_case(input: impl Into<Input>) -> Result<String, ConversionError> {
    Converter::new(CaseStyle::Dot).convert(input)
}

/// Split text into lowercase words using the lenient rules
pub fn split_into_words(input: impl Into<Input>) -> Result<Vec<String>, ConversionError> {
    Converter::new(CaseStyle::Kebab)
        .tokenize(input)
        .map(TokenSequence::into_strings)
}
