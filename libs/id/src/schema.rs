//! Schema description contract for validated value types.
//!
//! The schema generator consumes [`SchemaFragment`] values to document and
//! pre-validate API payloads. Fragments are declarative metadata: they are
//! not required to encode every runtime validation rule, and external
//! consumers depend on the declared shape staying stable.

use serde::Serialize;

/// A structured description of a value type's accepted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaFragment {
    /// Minimum accepted length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Character-class pattern accepted values match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,

    /// Example values for documentation.
    pub examples: &'static [&'static str],
}

/// A value type constructed only by validating raw input.
///
/// The input is an arbitrary deserialized value: callers in practice only
/// ever present strings, but the contract admits anything and classifies
/// non-strings as a rejection rather than a panic.
pub trait Validatable: Sized {
    /// The rejection produced for malformed input.
    type Rejection;

    /// Validates a raw value into the typed form.
    fn validate_value(raw: &serde_json::Value) -> Result<Self, Self::Rejection>;
}

/// A value type that describes its accepted shape to the schema generator.
pub trait SchemaDescribable {
    /// Returns the static schema description for this type.
    fn describe_schema() -> SchemaFragment;
}
