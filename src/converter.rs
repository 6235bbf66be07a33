use bon::Builder;
use tracing::{debug, trace};

use crate::error::ConversionError;
use crate::input::Input;
use crate::renderer::CaseStyle;
use crate::tokenizer::{TokenSequence, Tokenizer};
use crate::validator::{ValidationPolicy, Validator};

/// Validate, tokenize and render in one call.
///
/// Unset options fall back to the style's defaults: camelCase and dot.case are
/// strict, kebab-case is lenient, and only dot.case splits on `.`.
///
/// ```
/// use casekit::{CaseStyle, Converter, ValidationPolicy};
///
/// let converter = Converter::builder()
///     .style(CaseStyle::Kebab)
///     .policy(ValidationPolicy::Strict)
///     .build();
///
/// assert_eq!(converter.convert("Route 66 East").unwrap(), "route-east");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct Converter {
    style: CaseStyle,
    policy: Option<ValidationPolicy>,
    split_on_dots: Option<bool>,
}

impl Converter {
    /// Converter for `style` with all defaults
    #[must_use]
    pub fn new(style: CaseStyle) -> Self {
        Self {
            style,
            policy: None,
            split_on_dots: None,
        }
    }

    #[must_use]
    pub fn style(&self) -> CaseStyle {
        self.style
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy.unwrap_or_else(|| self.style.default_policy())
    }

    #[must_use]
    pub fn splits_on_dots(&self) -> bool {
        self.split_on_dots
            .unwrap_or_else(|| self.style.splits_on_dots())
    }

    fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.policy()).split_on_dots(self.splits_on_dots())
    }

    /// Validate `input` and split it into words without rendering.
    ///
    /// Blank text yields an empty sequence.
    pub fn tokenize(&self, input: impl Into<Input>) -> Result<TokenSequence, ConversionError> {
        let validated = Validator::new(self.policy()).validate(input.into())?;
        if validated.is_blank() {
            return Ok(TokenSequence::default());
        }
        Ok(self.tokenizer().tokenize(&validated))
    }

    /// Convert `input` to this converter's style.
    ///
    /// # Errors
    ///
    /// Any validation error, plus [`ConversionError::EmptyTokenSequence`] when the
    /// strict policy is active and no word survives tokenization. Blank text is
    /// not an error and converts to `""`.
    pub fn convert(&self, input: impl Into<Input>) -> Result<String, ConversionError> {
        let policy = self.policy();
        let validated = Validator::new(policy).validate(input.into())?;

        if validated.is_blank() {
            trace!(style = %self.style, "Blank input, nothing to convert");
            return Ok(String::new());
        }

        let tokens = self.tokenizer().tokenize(&validated);
        if tokens.is_empty() && policy.is_strict() {
            return Err(ConversionError::empty_token_sequence(
                validated.as_str(),
                self.style,
            ));
        }

        let rendered = self.style.render(&tokens);
        debug!(
            style = %self.style,
            policy = %policy,
            token_count = tokens.len(),
            "Converted input"
        );

        Ok(rendered)
    }
}
