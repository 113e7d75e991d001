//! Guesses Elm-style type signatures from example JSON values.
//!
//! Given a single JSON payload, this crate makes a first-draft guess at the
//! type each part of it would have in a strongly-typed program: `Int`,
//! `List String`, `Maybe _Unknown` and so on. It also provides the small
//! primitives a decoder/encoder generator needs on top of that guess: a
//! parser that never fails, field listing and lookup, codec naming, and
//! field-name case conversion.
//!
//! Guesses are made from one example only. The first element of an array
//! stands in for all of them, a `null` can't say what it is a `null` of, and
//! nested objects are flagged as `Something` rather than looked into.
//!
//! # Quick start
//!
//! ```
//! use json_guess::{guess_type, parse, get_field};
//!
//! let value = parse(r#"{"a": [1, 2, 3], "b": null}"#);
//! let obj = value.as_object().unwrap();
//!
//! assert_eq!(vec!["a", "b"], json_guess::keys(obj));
//! assert_eq!("List Int", guess_type(get_field("a", obj).unwrap()));
//! assert_eq!("Maybe _Unknown", guess_type(get_field("b", obj).unwrap()));
//!
//! // Malformed input is not an error; it just has nothing to guess from.
//! assert_eq!("Something", guess_type(&parse("{not json")));
//! ```

mod codec;
mod fields;
mod naming;
mod number;
mod parse;
mod type_descriptor;

pub use crate::codec::{codec_words, KnownDecoders, JSON_DECODE, JSON_ENCODE};
pub use crate::fields::{get_field, guess_fields, keys, unsafe_get_field};
pub use crate::naming::{camelcase_to_underscores, underscore_to_camelcase};
pub use crate::number::NumberKind;
pub use crate::parse::{parse, parse_reader};
pub use crate::type_descriptor::{guess_type, TypeDescriptor};
