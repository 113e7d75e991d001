use crate::number::NumberKind;
use serde_json::Value;
use std::fmt;

/// A guessed type, as it would be written in an Elm-style type signature.
///
/// Only the first element of an array is ever looked at, and objects are never
/// looked into. A guess is made from a single example, so some descriptors are
/// placeholders standing in for information the example doesn't carry:
/// [`TypeDescriptor::MaybeUnknown`], [`TypeDescriptor::AnyList`] and
/// [`TypeDescriptor::Something`].
///
/// ```
/// use serde_json::json;
/// use json_guess::TypeDescriptor;
///
/// let guess = TypeDescriptor::guess(&json!([[1], [2, "x"]]));
/// assert_eq!("List List Int", guess.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Bool,
    String,
    Int,
    Float,

    /// A list of whatever its first element was guessed as.
    List(Box<TypeDescriptor>),

    /// An empty list. Rendered as `List a`.
    AnyList,

    /// A `null`. Rendered as `Maybe _Unknown`.
    MaybeUnknown,

    /// An object of any shape. Rendered as `Something`.
    Something,

    /// Not produced for well-formed JSON.
    Unknown,
}

impl TypeDescriptor {
    /// Guesses a type for `value`.
    ///
    /// This never fails: every JSON value maps to exactly one descriptor.
    /// Nested arrays are walked in a loop, so nesting depth is bounded only by
    /// memory.
    pub fn guess(value: &Value) -> Self {
        let mut lists = 0;
        let mut value = value;

        let element = loop {
            break match value {
                // Null is checked before everything else, since it is the
                // only kind that says nothing about the type it stands in for.
                Value::Null => TypeDescriptor::MaybeUnknown,
                Value::Bool(_) => TypeDescriptor::Bool,
                Value::String(_) => TypeDescriptor::String,
                Value::Number(n) => match NumberKind::classify(n) {
                    Some(NumberKind::Int) => TypeDescriptor::Int,
                    Some(NumberKind::Float) => TypeDescriptor::Float,
                    None => {
                        tracing::trace!(
                            number = %n,
                            "number text does not read as f64, guessing Unknown"
                        );
                        TypeDescriptor::Unknown
                    }
                },

                // Heterogeneous arrays are reported as if every element
                // looked like the first one.
                Value::Array(vals) => match vals.first() {
                    None => TypeDescriptor::AnyList,
                    Some(first) => {
                        lists += 1;
                        value = first;
                        continue;
                    }
                },

                Value::Object(_) => TypeDescriptor::Something,
            };
        };

        (0..lists).fold(element, |inner, _| TypeDescriptor::List(Box::new(inner)))
    }

    /// The descriptor under all `List` wrappers.
    fn innermost(&self) -> &TypeDescriptor {
        let mut descriptor = self;
        while let TypeDescriptor::List(element) = descriptor {
            descriptor = element;
        }
        descriptor
    }

    /// Whether this descriptor, or the element type it wraps, is one of the
    /// placeholders a single example couldn't resolve.
    pub fn is_placeholder(&self) -> bool {
        match self.innermost() {
            TypeDescriptor::MaybeUnknown
            | TypeDescriptor::AnyList
            | TypeDescriptor::Something
            | TypeDescriptor::Unknown
            | TypeDescriptor::List(_) => true,
            TypeDescriptor::Bool
            | TypeDescriptor::String
            | TypeDescriptor::Int
            | TypeDescriptor::Float => false,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut descriptor = self;

        loop {
            let name = match descriptor {
                TypeDescriptor::List(element) => {
                    f.write_str("List ")?;
                    descriptor = element;
                    continue;
                }
                TypeDescriptor::Bool => "Bool",
                TypeDescriptor::String => "String",
                TypeDescriptor::Int => "Int",
                TypeDescriptor::Float => "Float",
                TypeDescriptor::AnyList => "List a",
                TypeDescriptor::MaybeUnknown => "Maybe _Unknown",
                TypeDescriptor::Something => "Something",
                TypeDescriptor::Unknown => "Unknown",
            };

            return f.write_str(name);
        }
    }
}

/// Guesses a type for `value` and renders it as signature text.
///
/// Shorthand for `TypeDescriptor::guess(value).to_string()`.
pub fn guess_type(value: &Value) -> String {
    TypeDescriptor::guess(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives() {
        assert_eq!("Maybe _Unknown", guess_type(&json!(null)));
        assert_eq!("Bool", guess_type(&json!(true)));
        assert_eq!("Bool", guess_type(&json!(false)));
        assert_eq!("String", guess_type(&json!("x")));
        assert_eq!("String", guess_type(&json!("")));
        assert_eq!("Int", guess_type(&json!(4)));
        assert_eq!("Int", guess_type(&json!(4.0)));
        assert_eq!("Float", guess_type(&json!(4.5)));
    }

    #[test]
    fn lists() {
        assert_eq!("List a", guess_type(&json!([])));
        assert_eq!("List Int", guess_type(&json!([1, 2, 3])));
        assert_eq!("List Maybe _Unknown", guess_type(&json!([null, 1])));
        assert_eq!("List List a", guess_type(&json!([[]])));
        assert_eq!("List Something", guess_type(&json!([{ "a": 1 }])));

        // Only the first element is inspected, at every level.
        assert_eq!("List String", guess_type(&json!(["x", 1, true])));
        assert_eq!("List List Int", guess_type(&json!([[1], [2, "x"]])));
        assert_eq!("List List Float", guess_type(&json!([[1.5, "x"], []])));
    }

    #[test]
    fn objects() {
        assert_eq!("Something", guess_type(&json!({})));
        assert_eq!("Something", guess_type(&json!({ "a": 1 })));
        assert_eq!("Something", guess_type(&json!({ "a": { "b": [1] } })));
    }

    #[test]
    fn structure() {
        assert_eq!(
            TypeDescriptor::List(Box::new(TypeDescriptor::List(Box::new(
                TypeDescriptor::Int
            )))),
            TypeDescriptor::guess(&json!([[1]]))
        );
    }

    #[test]
    fn placeholders() {
        assert!(TypeDescriptor::guess(&json!(null)).is_placeholder());
        assert!(TypeDescriptor::guess(&json!([])).is_placeholder());
        assert!(TypeDescriptor::guess(&json!({})).is_placeholder());
        assert!(TypeDescriptor::guess(&json!([[{}]])).is_placeholder());
        assert!(TypeDescriptor::Unknown.is_placeholder());

        assert!(!TypeDescriptor::guess(&json!([[1]])).is_placeholder());
        assert!(!TypeDescriptor::guess(&json!("x")).is_placeholder());
    }

    #[test]
    fn deep_lists() {
        let text = format!("{}1{}", "[".repeat(1000), "]".repeat(1000));
        let guess = TypeDescriptor::guess(&crate::parse(&text));

        assert_eq!(format!("{}Int", "List ".repeat(1000)), guess.to_string());
        assert!(!guess.is_placeholder());

        let text = format!("{}{}", "[".repeat(1000), "]".repeat(1000));
        let guess = guess_type(&crate::parse(&text));
        assert_eq!(format!("{}List a", "List ".repeat(999)), guess);
    }

    #[test]
    fn out_of_range_numbers() {
        assert_eq!("List Float", guess_type(&crate::parse("[1e400]")));
        assert_eq!("Float", guess_type(&crate::parse("-1e400")));
        assert_eq!(
            "Int",
            guess_type(&crate::parse("123456789012345678901234567890"))
        );
    }

    #[test]
    fn unknown_renders() {
        assert_eq!("Unknown", TypeDescriptor::Unknown.to_string());
        assert_eq!(
            "List Unknown",
            TypeDescriptor::List(Box::new(TypeDescriptor::Unknown)).to_string()
        );
    }
}
