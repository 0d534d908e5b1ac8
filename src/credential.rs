//! Models for the OpenID for Verifiable Credential Issuance surface: issuer metadata and
//! credential offers.

/// Credential issuer metadata and its publication API.
pub mod issuer_metadata;
/// Credential offer creation API.
pub mod offer;

pub use issuer_metadata::*;
pub use offer::*;
