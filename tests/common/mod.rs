use casekit::{TokenSequence, Tokenizer, ValidationPolicy, Validator};

/// Inputs built only from letters, digits and the separators space, `-` and `_`
#[allow(dead_code)]
pub const SEPARATED_INPUTS: &[&str] = &[
    "first name",
    "user_id",
    "SCREEN_NAME",
    "mobile-number",
    "Hello World-test_case",
    "API_KEY_VALUE",
    "hello123world",
    "route 66 east",
    "a1 b",
    "ab 1c",
    "--leading and trailing__",
    "x",
    "v2 api endpoint",
    "a b c",
    "get x y",
    "first a b",
    "MiXeD cAsE words",
];

/// Split kebab-case output back into words
#[allow(dead_code)]
pub fn split_kebab(rendered: &str) -> Vec<String> {
    if rendered.is_empty() {
        return Vec::new();
    }
    rendered.split('-').map(str::to_string).collect()
}

/// Tokens the lenient tokenizer produces for `text`
#[allow(dead_code)]
pub fn lenient_tokens(text: &str) -> anyhow::Result<TokenSequence> {
    let validated = Validator::new(ValidationPolicy::Lenient).validate(text.into())?;
    Ok(Tokenizer::new(ValidationPolicy::Lenient).tokenize(&validated))
}
