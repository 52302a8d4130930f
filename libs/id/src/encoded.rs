//! The validated encoded ID type.

use crate::{IdError, SchemaDescribable, SchemaFragment, Validatable};

/// The sub-kind of an encoded ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// A plain object ID.
    Object,
    /// A library folder ID, marked by a leading uppercase `F`.
    Folder,
}

/// A validated encoded database ID.
///
/// The only way to obtain one is [`EncodedId::validate`] (or deserialization,
/// which routes through it), so every value in existence satisfies the format
/// rules. The stored text keeps the original casing of the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedId(String);

impl EncodedId {
    /// The effective length of an ID must be a multiple of this.
    pub const LENGTH_MULTIPLE: usize = 16;

    /// Library folder IDs start with this additional marker character.
    /// Only the uppercase form triggers the marker branch; a leading
    /// lowercase `f` counts as an ordinary hex digit.
    pub const FOLDER_MARKER: char = 'F';

    /// The shape declared to the schema generator.
    ///
    /// Deliberately looser than the runtime rules: it carries neither the
    /// folder marker nor the multiple-of-16 requirement beyond the minimum
    /// length. External consumers depend on the declared shape, so it is
    /// kept as-is rather than tightened to match [`EncodedId::validate`].
    pub const SCHEMA: SchemaFragment = SchemaFragment {
        min_length: Some(Self::LENGTH_MULTIPLE),
        pattern: Some("[0-9a-fA-F]+"),
        examples: &["0123456789ABCDEF"],
    };

    /// Validates a candidate encoded ID.
    ///
    /// The effective length (total length minus one if the folder marker is
    /// present) must be a multiple of 16, and the text must consist of an
    /// optional leading `f`/`F` followed by one or more hex digits, matched
    /// case-insensitively. On success the original text is preserved.
    pub fn validate(raw: &str) -> Result<Self, IdError> {
        let mut effective_len = raw.chars().count();
        if raw.starts_with(Self::FOLDER_MARKER) {
            // Library folder ids carry an additional leading "F".
            effective_len -= 1;
        }

        // The empty string has effective length 0 and passes this check;
        // it is rejected below for having no digits.
        if effective_len % Self::LENGTH_MULTIPLE != 0 {
            return Err(IdError::InvalidLength {
                length: effective_len,
                multiple_of: Self::LENGTH_MULTIPLE,
            });
        }

        let lower = raw.to_ascii_lowercase();
        let payload = lower.strip_prefix('f').unwrap_or(&lower);
        let all_hex = payload
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if payload.is_empty() || !all_hex {
            return Err(IdError::InvalidCharacters {
                value: raw.to_string(),
            });
        }

        Ok(Self(raw.to_string()))
    }

    /// Validates a raw JSON value, classifying non-strings as
    /// [`IdError::NotAString`].
    pub fn validate_json(value: &serde_json::Value) -> Result<Self, IdError> {
        let raw = value.as_str().ok_or(IdError::NotAString)?;
        Self::validate(raw)
    }

    /// Returns which sub-kind this ID belongs to.
    #[must_use]
    pub fn kind(&self) -> IdKind {
        if self.0.starts_with(Self::FOLDER_MARKER) {
            IdKind::Folder
        } else {
            IdKind::Object
        }
    }

    /// Returns the ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EncodedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EncodedId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl AsRef<str> for EncodedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for EncodedId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EncodedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::validate(&s).map_err(serde::de::Error::custom)
    }
}

impl Validatable for EncodedId {
    type Rejection = IdError;

    fn validate_value(raw: &serde_json::Value) -> Result<Self, Self::Rejection> {
        Self::validate_json(raw)
    }
}

impl SchemaDescribable for EncodedId {
    fn describe_schema() -> SchemaFragment {
        Self::SCHEMA
    }
}
