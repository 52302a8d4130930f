//! # helix-fields
//!
//! Reusable field metadata descriptors for helix data API models.
//!
//! A [`FieldDescriptor`] carries the presentation and validation metadata
//! attached to a record attribute at type-definition time: a short title, a
//! description, whether the attribute is required, and for discriminator
//! fields the constant value shared by every instance of the record subtype.
//! Descriptors are process-wide constants; nothing mutates them after
//! definition, and the same descriptor is shared across every model that
//! uses the field.

use helix_id::{EncodedId, SchemaFragment};
use serde::Serialize;

/// Metadata attached to a named record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Short display label.
    pub title: &'static str,

    /// Human-readable description of the field's purpose.
    pub description: &'static str,

    /// Whether the record is invalid if the attribute is absent.
    pub required: bool,

    /// Whether the value is fixed and identical for every instance of the
    /// record subtype.
    pub constant: bool,

    /// Whether the field is deprecated.
    pub deprecated: bool,

    /// The fixed value carried by constant fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'static str>,

    /// Shape hints forwarded to the schema generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaFragment>,
}

/// Builds the descriptor for a database model class name field.
///
/// The value is constant across all instances of the record subtype and
/// serves as the type discriminator.
pub const fn model_class(class_name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        title: "Model class",
        description: "The name of the database model class.",
        required: false,
        constant: true,
        deprecated: false,
        value: Some(class_name),
        schema: None,
    }
}

/// The relative URL to access an item.
// TODO: decide whether relative URLs should be deprecated in favor of the
// download URL now that clients resolve against the API base themselves.
pub const URL: FieldDescriptor = FieldDescriptor {
    title: "URL",
    description: "The relative URL to access this item.",
    required: true,
    constant: false,
    deprecated: false,
    value: None,
    schema: None,
};

/// The absolute URL to download an item from the server.
pub const DOWNLOAD_URL: FieldDescriptor = FieldDescriptor {
    title: "Download URL",
    description: "The URL to download this item from the server.",
    required: true,
    constant: false,
    deprecated: false,
    value: None,
    schema: None,
};

/// A free-text annotation on an item.
pub const ANNOTATION: FieldDescriptor = FieldDescriptor {
    title: "Annotation",
    description: "An annotation to provide details or to help understand the purpose and usage of this item.",
    required: false,
    constant: false,
    deprecated: false,
    value: None,
    schema: None,
};

/// Whether an item is accessible to the current user.
pub const ACCESSIBLE: FieldDescriptor = FieldDescriptor {
    title: "Accessible",
    description: "Whether this item is accessible to the current user due to permissions.",
    required: true,
    constant: false,
    deprecated: false,
    value: None,
    schema: None,
};

/// An encoded database ID, with the shape hints the schema generator needs.
pub const ENCODED_ID: FieldDescriptor = FieldDescriptor {
    title: "ID",
    description: "The encoded database identifier of this item.",
    required: true,
    constant: false,
    deprecated: false,
    value: None,
    schema: Some(EncodedId::SCHEMA),
};
