//! # helix-id
//!
//! Encoded database ID validation and schema description for the helix
//! data API.
//!
//! ## Design Principles
//!
//! - Encoded IDs are opaque strings supplied by clients; this crate only
//!   validates them, it never generates or decodes them
//! - Construction goes through validation; a value that exists is valid
//! - Validated IDs behave as plain text downstream (equality, hashing,
//!   display all use the original string)
//! - The accepted shape is exported to the schema generator as a static
//!   fragment, separate from the runtime rules
//!
//! ## ID Format
//!
//! An encoded ID is a run of hex digits whose length is a positive multiple
//! of 16. Library folder IDs carry one additional leading uppercase `F`
//! that is not counted toward the length.
//!
//! Examples:
//! - `0123456789abcdef`
//! - `F0123456789abcdef`
//! - `cafef00dcafef00dcafef00dcafef00d`

mod encoded;
mod error;
mod schema;

pub use encoded::{EncodedId, IdKind};
pub use error::IdError;
pub use schema::{SchemaDescribable, SchemaFragment, Validatable};
