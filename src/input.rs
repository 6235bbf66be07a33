use serde_json::Value;
use std::fmt;

/// A value handed to a conversion function by a dynamically typed caller.
///
/// Typed Rust callers pass `&str` or `String` and never hit the type checks;
/// values decoded from JSON (or any other loosely typed source) keep enough
/// shape to report what was actually received.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Input {
    /// No value at all
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Array(Vec<Value>),
    Object(serde_json::Map<String, Value>),
}

impl Input {
    /// Name of the runtime type, as reported in type errors
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Input::Undefined => "undefined",
            Input::Null => "null",
            Input::Bool(_) => "boolean",
            Input::Number(_) => "number",
            Input::Text(_) => "string",
            Input::Array(_) => "array",
            Input::Object(_) => "object",
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Input::Undefined | Input::Null)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Text(value.clone())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Undefined, Into::into)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Input::Null,
            Value::Bool(b) => Input::Bool(b),
            Value::Number(n) => Input::Number(n),
            Value::String(s) => Input::Text(s),
            Value::Array(items) => Input::Array(items),
            Value::Object(map) => Input::Object(map),
        }
    }
}

impl From<&Input> for Input {
    fn from(value: &Input) -> Self {
        value.clone()
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Undefined => write!(f, "undefined"),
            Input::Null => write!(f, "null"),
            Input::Bool(b) => write!(f, "{b}"),
            Input::Number(n) => write!(f, "{n}"),
            Input::Text(s) => write!(f, "{s}"),
            Input::Array(items) => write!(f, "{}", Value::Array(items.clone())),
            Input::Object(map) => write!(f, "{}", Value::Object(map.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names_from_json() {
        assert_eq!(Input::from(json!(null)).type_name(), "null");
        assert_eq!(Input::from(json!(42)).type_name(), "number");
        assert_eq!(Input::from(json!(true)).type_name(), "boolean");
        assert_eq!(Input::from(json!("x")).type_name(), "string");
        assert_eq!(Input::from(json!([])).type_name(), "array");
        assert_eq!(Input::from(json!({})).type_name(), "object");
    }

    #[test]
    fn test_option_maps_none_to_undefined() {
        let missing: Option<&str> = None;
        assert_eq!(Input::from(missing), Input::Undefined);
        assert_eq!(Input::from(Some("a b")), Input::Text("a b".to_string()));
        assert!(Input::from(missing).is_absent());
        assert!(Input::Null.is_absent());
        assert!(!Input::from("").is_absent());
    }

    #[test]
    fn test_display() {
        assert_eq!(Input::from(json!([1, "a"])).to_string(), r#"[1,"a"]"#);
        assert_eq!(Input::from("first name").to_string(), "first name");
        assert_eq!(Input::Undefined.to_string(), "undefined");
    }
}
