use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CliError;
use crate::tokenizer::TokenSequence;
use crate::validator::ValidationPolicy;

/// Minimum Jaro-Winkler similarity for a style name to be suggested
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Target case style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStyle {
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "kebab-case")]
    Kebab,
    #[serde(rename = "dot.case")]
    Dot,
}

impl CaseStyle {
    /// Short names accepted on the command line
    pub const NAMES: [&'static str; 3] = ["camel", "kebab", "dot"];

    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Kebab, CaseStyle::Dot];

    /// Policy used when the caller does not pick one
    #[must_use]
    pub fn default_policy(self) -> ValidationPolicy {
        match self {
            CaseStyle::Camel | CaseStyle::Dot => ValidationPolicy::Strict,
            CaseStyle::Kebab => ValidationPolicy::Lenient,
        }
    }

    /// Whether `.` separates words by default for this style
    #[must_use]
    pub fn splits_on_dots(self) -> bool {
        matches!(self, CaseStyle::Dot)
    }

    #[must_use]
    pub fn render(self, tokens: &TokenSequence) -> String {
        match self {
            CaseStyle::Camel => render_camel(tokens),
            CaseStyle::Kebab => tokens.join("-"),
            CaseStyle::Dot => tokens.join("."),
        }
    }
}

fn render_camel(tokens: &TokenSequence) -> String {
    let mut words = tokens.iter();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut rendered = first.to_string();
    for word in words {
        rendered.push_str(&word.capitalized());
    }
    rendered
}

/// Find style names close to an unknown one
fn suggest(unknown: &str) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = CaseStyle::NAMES
        .iter()
        .map(|name| (strsim::jaro_winkler(unknown, name), *name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}

impl FromStr for CaseStyle {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            _ => Err(CliError::InvalidStyle {
                style: s.to_string(),
                suggestions: suggest(&normalized),
            }),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camelCase"),
            CaseStyle::Kebab => write!(f, "kebab-case"),
            CaseStyle::Dot => write!(f, "dot.case"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WordToken;

    fn tokens(words: &[&str]) -> TokenSequence {
        words
            .iter()
            .filter_map(|w| WordToken::from_fragment(w, false))
            .collect()
    }

    #[test]
    fn test_render_camel() {
        assert_eq!(CaseStyle::Camel.render(&tokens(&["first", "name"])), "firstName");
        assert_eq!(CaseStyle::Camel.render(&tokens(&["singleword"])), "singleword");
        assert_eq!(
            CaseStyle::Camel.render(&tokens(&["api", "key", "value"])),
            "apiKeyValue"
        );
        assert_eq!(CaseStyle::Camel.render(&tokens(&["route", "66"])), "route66");
    }

    #[test]
    fn test_render_joined_styles() {
        let words = tokens(&["camel", "case", "text"]);
        assert_eq!(CaseStyle::Kebab.render(&words), "camel-case-text");
        assert_eq!(CaseStyle::Dot.render(&words), "camel.case.text");
    }

    #[test]
    fn test_empty_sequence_renders_empty() {
        for style in CaseStyle::ALL {
            assert_eq!(style.render(&TokenSequence::default()), "");
        }
    }

    #[test]
    fn test_render_does_not_mutate_tokens() {
        let words = tokens(&["a", "b"]);
        let before = words.clone();
        let _ = CaseStyle::Camel.render(&words);
        assert_eq!(words, before);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("camel".parse::<CaseStyle>().unwrap(), CaseStyle::Camel);
        assert_eq!("camelCase".parse::<CaseStyle>().unwrap(), CaseStyle::Camel);
        assert_eq!("KEBAB-CASE".parse::<CaseStyle>().unwrap(), CaseStyle::Kebab);
        assert_eq!("dot.case".parse::<CaseStyle>().unwrap(), CaseStyle::Dot);
    }

    #[test]
    fn test_unknown_style_suggests_close_names() {
        let err = "kebap".parse::<CaseStyle>().unwrap_err();
        match err {
            CliError::InvalidStyle { style, suggestions } => {
                assert_eq!(style, "kebap");
                assert_eq!(suggestions.first().map(String::as_str), Some("kebab"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = "zzzzzz".parse::<CaseStyle>().unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidStyle { ref suggestions, .. } if suggestions.is_empty()
        ));
    }

    #[test]
    fn test_default_policies() {
        assert_eq!(CaseStyle::Camel.default_policy(), ValidationPolicy::Strict);
        assert_eq!(CaseStyle::Dot.default_policy(), ValidationPolicy::Strict);
        assert_eq!(CaseStyle::Kebab.default_policy(), ValidationPolicy::Lenient);
    }
}
