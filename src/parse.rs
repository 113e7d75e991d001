use serde::Deserialize;
use serde_json::error::Category;
use serde_json::{Deserializer, Map, Value};
use std::io::Read;

/// Parses `text` as JSON, falling back to an empty object.
///
/// Malformed or partial input is not an error here: it yields `{}`, so that a
/// guess can still be made from whatever was pasted. Valid input is never
/// rejected for its nesting depth or for a number outside the range of `f64`.
///
/// ```
/// use serde_json::json;
/// use json_guess::parse;
///
/// assert_eq!(json!({ "a": [1, 2, 3] }), parse(r#"{"a": [1, 2, 3]}"#));
/// assert_eq!(json!({}), parse("{not json"));
/// ```
pub fn parse(text: &str) -> Value {
    parse_slice(text.as_bytes())
}

/// Like [`parse`], but reads the text from `reader`.
///
/// Only I/O failures are returned. JSON syntax errors, including invalid
/// UTF-8, still produce an empty object.
pub fn parse_reader<R: Read>(mut reader: R) -> std::io::Result<Value> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_slice(&bytes))
}

fn parse_slice(bytes: &[u8]) -> Value {
    let mut de = Deserializer::from_slice(bytes);
    de.disable_recursion_limit();

    // Deep nesting grows the stack on the heap instead of overflowing it.
    let value = match Value::deserialize(serde_stacker::Deserializer::new(&mut de)) {
        Ok(value) => value,
        Err(err) => return fallback(&err),
    };

    match de.end() {
        Ok(()) => value,
        Err(err) => fallback(&err),
    }
}

fn fallback(err: &serde_json::Error) -> Value {
    tracing::debug!(
        category = category_label(err.classify()),
        line = err.line(),
        column = err.column(),
        "input is not valid JSON, substituting an empty object"
    );

    Value::Object(Map::new())
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}
