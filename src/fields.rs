use crate::type_descriptor::TypeDescriptor;
use serde_json::{Map, Value};

static MISSING: Value = Value::Null;

/// Lists the field names of `obj`, in insertion order.
pub fn keys(obj: &Map<String, Value>) -> Vec<&str> {
    obj.keys().map(String::as_str).collect()
}

/// Looks up field `name` in `obj`.
///
/// A missing field is `None`. A field that is present but holds `null` is
/// `Some(&Value::Null)`.
///
/// ```
/// use serde_json::json;
/// use json_guess::get_field;
///
/// let obj = json!({ "a": 1, "b": null });
/// let obj = obj.as_object().unwrap();
///
/// assert_eq!(Some(&json!(1)), get_field("a", obj));
/// assert_eq!(Some(&json!(null)), get_field("b", obj));
/// assert_eq!(None, get_field("missing", obj));
/// ```
pub fn get_field<'a>(name: &str, obj: &'a Map<String, Value>) -> Option<&'a Value> {
    obj.get(name)
}

/// Looks up field `name` in `obj` without reporting whether it was there.
///
/// A missing field reads as `null`, so this is only meaningful for callers
/// that have already checked presence with [`get_field`] or [`keys`].
pub fn unsafe_get_field<'a>(name: &str, obj: &'a Map<String, Value>) -> &'a Value {
    obj.get(name).unwrap_or(&MISSING)
}

/// Guesses a type for each field of `obj`, in insertion order.
///
/// Nested objects are not looked into: they come back as
/// [`TypeDescriptor::Something`].
pub fn guess_fields(obj: &Map<String, Value>) -> Vec<(&str, TypeDescriptor)> {
    obj.iter()
        .map(|(k, v)| (k.as_str(), TypeDescriptor::guess(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(obj) => obj,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn keys_in_insertion_order() {
        assert_eq!(vec!["a", "b"], keys(&object(json!({ "a": 1, "b": 2 }))));

        let obj = object(crate::parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#));
        assert_eq!(vec!["zeta", "alpha", "mid"], keys(&obj));

        assert!(keys(&Map::new()).is_empty());
    }

    #[test]
    fn get() {
        let obj = object(json!({ "a": 1, "b": null }));

        assert_eq!(Some(&json!(1)), get_field("a", &obj));
        assert_eq!(Some(&Value::Null), get_field("b", &obj));
        assert_eq!(None, get_field("missing", &obj));
        assert_eq!(None, get_field("", &obj));
    }

    #[test]
    fn unsafe_get() {
        let obj = object(json!({ "a": [1], "b": null }));

        assert_eq!(&json!([1]), unsafe_get_field("a", &obj));
        assert_eq!(&Value::Null, unsafe_get_field("b", &obj));
        assert_eq!(&Value::Null, unsafe_get_field("missing", &obj));
    }

    #[test]
    fn guesses() {
        let obj = object(crate::parse(
            r#"{"name": "Noah", "age": 23, "tags": [], "location": {"days": 45}}"#,
        ));

        let guesses: Vec<_> = guess_fields(&obj)
            .into_iter()
            .map(|(k, t)| (k, t.to_string()))
            .collect();

        assert_eq!(
            vec![
                ("name", "String".to_string()),
                ("age", "Int".to_string()),
                ("tags", "List a".to_string()),
                ("location", "Something".to_string()),
            ],
            guesses
        );
    }
}
