//! Reference codec port.
//!
//! The descriptor never stores a plaintext layout reference. Whatever goes
//! into the `layout` attribute is a token produced by this trait, and the
//! renderer hands the token back to the same codec when it needs the name.

use repeater_types::error::CodecError;

/// Reversible keyed encoding for layout references.
///
/// Contract:
/// - `encode` output must not reveal the plaintext without the key
///   (confidentiality).
/// - `decode` must reject tokens that were tampered with or produced under
///   a different key (integrity).
pub trait ReferenceCodec: Send + Sync {
    fn encode(&self, plaintext: &str) -> Result<String, CodecError>;

    fn decode(&self, token: &str) -> Result<String, CodecError>;
}
