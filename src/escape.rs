//! Opt-in entity encoding
//!
//! The renderer writes all content verbatim. Use these helpers (or [`crate::builder::text_escaped`]
//! and [`crate::builder::attribute_escaped`]) when content may contain markup characters.
use crate::error::{XmlError, XmlErrorKind, XmlResult};
use htmlentity::entity::ICodedDataTrait;
use htmlentity::entity::{CharacterSet, EncodeType, encode};

/// Encode `<`, `>`, `&`, `"` and `'` as named entities. Other characters are left as-is.
///
/// # Errors
/// Returns an error if the encoded output is not valid UTF-8.
///
/// # Example
/// ```rust
/// use xmlbuild::escape::encode_entities;
/// assert_eq!(encode_entities("a<b & c>d").unwrap(), "a&lt;b &amp; c&gt;d");
/// ```
pub fn encode_entities(input: &str) -> XmlResult<String> {
    encode(
        input.as_bytes(),
        &EncodeType::NamedOrHex,
        &CharacterSet::SpecialChars,
    )
    .to_string()
    .map_err(|e| XmlError::new(XmlErrorKind::Encoding(e.to_string())))
}
