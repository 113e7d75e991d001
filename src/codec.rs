use crate::naming::capitalize;
use crate::type_descriptor::TypeDescriptor;

/// The module that primitive decoders are qualified with by default.
pub const JSON_DECODE: &str = "Json.Decode.";

/// The module that primitive encoders are qualified with by default.
pub const JSON_ENCODE: &str = "Json.Encode.";

const DEFAULT_KNOWN: &[&str] = &["maybe", "list", "int", "float", "bool", "string"];

/// The set of codec names that are provided by the JSON library itself, as
/// opposed to ones generated for a custom type.
///
/// Whatever turns a guessed type into decoder or encoder names needs to tell
/// the two apart: `list` becomes `Json.Decode.list`, while `person` becomes
/// `decodePerson`.
///
/// ```
/// use json_guess::{KnownDecoders, TypeDescriptor, JSON_DECODE};
/// use serde_json::json;
///
/// let known = KnownDecoders::default();
/// let words = json_guess::codec_words(&TypeDescriptor::guess(&json!([1.5])));
///
/// assert_eq!(
///     "Json.Decode.list Json.Decode.float",
///     known.prefix_codec("decode", &words, JSON_DECODE),
/// );
/// assert_eq!("decodePerson", known.prefix_codec("decode", "person", JSON_DECODE));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KnownDecoders<'a> {
    names: &'a [&'a str],
}

impl Default for KnownDecoders<'static> {
    fn default() -> Self {
        KnownDecoders::new(DEFAULT_KNOWN)
    }
}

impl<'a> KnownDecoders<'a> {
    /// Constructs a set from lowercase codec names.
    pub fn new(names: &'a [&'a str]) -> Self {
        KnownDecoders { names }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    /// Qualifies each space-separated word of `codec`.
    ///
    /// Known names are prefixed with `module`. Anything else is treated as a
    /// custom type and becomes `prefix` followed by the capitalized word.
    pub fn prefix_codec(&self, prefix: &str, codec: &str, module: &str) -> String {
        codec
            .split_whitespace()
            .map(|word| {
                if self.is_known(word) {
                    format!("{}{}", module, word)
                } else {
                    format!("{}{}", prefix, capitalize(word))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Appends `suffix` to each space-separated word of `codec` that isn't a
    /// known name.
    pub fn suffix_codec(&self, suffix: &str, codec: &str) -> String {
        codec
            .split_whitespace()
            .map(|word| {
                if self.is_known(word) {
                    word.to_owned()
                } else {
                    format!("{}{}", word, suffix)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The unqualified codec words for a descriptor: its text, lowercased.
pub fn codec_words(descriptor: &TypeDescriptor) -> String {
    descriptor.to_string().to_lowercase()
}
