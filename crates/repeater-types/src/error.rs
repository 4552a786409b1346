use thiserror::Error;

/// Errors raised while configuring a repeater field descriptor.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("\"{0}\" does not exist or is not supported. Only row layouts are supported by a repeater")]
    UnsupportedLayout(String),

    #[error("ajax data is not JSON-encodable: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Failures of the layout registry itself, outside this crate's control.
///
/// A name that is simply not registered is *not* a resolution error; the
/// registry reports that as an empty lookup and the binder turns it into
/// [`FieldError::UnsupportedLayout`].
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("layout registry unavailable: {0}")]
    Unavailable(String),

    #[error("layout lookup failed: {0}")]
    Lookup(String),
}

/// Errors from the reference codec.
///
/// IMPORTANT: These never include plaintext, key material, or token content
/// in their Display/Debug output.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encryption failed")]
    EncryptionFailed,

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("invalid token: too short")]
    TokenTooShort,

    #[error("invalid token encoding")]
    InvalidToken,

    #[error("key derivation failed")]
    KeyDerivationFailed,

    #[error("invalid master key")]
    InvalidKey,
}
