use casekit::{CaseStyle, ValidationPolicy};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One converted string per line
    #[default]
    Text,
    /// One JSON object per input
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "casekit")]
#[command(about = "Convert strings to camelCase, kebab-case or dot.case")]
pub struct Cli {
    /// Target style: camel, kebab or dot
    pub style: CaseStyle,

    /// Strings to convert
    #[arg(required = true)]
    pub inputs: Vec<String>,

    #[arg(
        long,
        env = "CASEKIT_POLICY",
        help = "Validation policy: lenient or strict (defaults to strict for camel and dot, lenient for kebab)"
    )]
    pub policy: Option<ValidationPolicy>,

    #[arg(
        long,
        env = "CASEKIT_SPLIT_DOTS",
        help = "Treat '.' as a word separator (always on for dot)"
    )]
    pub split_dots: bool,

    /// Parse each input as a JSON value instead of plain text
    #[arg(long)]
    pub json_input: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["casekit", "camel", "first name"]).unwrap();
        assert_eq!(cli.style, CaseStyle::Camel);
        assert_eq!(cli.inputs, ["first name"]);
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(!cli.json_input);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "casekit",
            "kebab-case",
            "--policy",
            "strict",
            "--split-dots",
            "--json-input",
            "--output",
            "json",
            "-v",
            "\"a.b\"",
            "null",
        ])
        .unwrap();

        assert_eq!(cli.style, CaseStyle::Kebab);
        assert_eq!(cli.policy, Some(ValidationPolicy::Strict));
        assert!(cli.split_dots);
        assert!(cli.json_input);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.verbose);
        assert_eq!(cli.inputs.len(), 2);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let err = Cli::try_parse_from(["casekit", "kebap", "x"]).unwrap_err();
        assert!(err.to_string().contains("Did you mean 'kebab'?"));
    }

    #[test]
    fn test_inputs_are_required() {
        assert!(Cli::try_parse_from(["casekit", "dot"]).is_err());
    }
}
