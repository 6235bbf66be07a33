use casekit::{ConversionError, Input};
use serde::Serialize;

/// Result of converting one input, as printed with `--output json`
#[derive(Debug, Serialize)]
pub struct ConversionRecord<'a> {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a ConversionError>,
}

impl<'a> ConversionRecord<'a> {
    pub fn new(input: &Input, result: &'a Result<String, ConversionError>) -> Self {
        let (output, error) = match result {
            Ok(converted) => (Some(converted.as_str()), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            input: input.to_string(),
            output,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    #[test]
    fn test_success_record() {
        let result = Ok("firstName".to_string());
        let record = ConversionRecord::new(&Input::from("first name"), &result);
        assert_json_snapshot!(record, @r#"
        {
          "input": "first name",
          "output": "firstName"
        }
        "#);
    }

    #[test]
    fn test_error_record() {
        let result = Err(ConversionError::no_alphabetic_content("03"));
        let record = ConversionRecord::new(&Input::from("03"), &result);
        assert_json_snapshot!(record, @r#"
        {
          "input": "03",
          "error": {
            "type": "no-alphabetic-content",
            "input": "03"
          }
        }
        "#);
    }
}
