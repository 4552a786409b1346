//! Configuration loader for the repeater kit.
//!
//! Reads `repeater.toml` from the host's config directory and deserializes
//! it into [`RepeaterConfig`]. Falls back to defaults when the file is
//! missing or malformed.

use std::path::Path;

use repeater_types::error::CodecError;
use serde::{Deserialize, Serialize};

use crate::codec::{KeyedCodec, rand_bytes};

/// Top-level configuration, one section per concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeaterConfig {
    pub codec: CodecConfig,
}

/// Key material source for the reference codec.
///
/// Priority: explicit hex master key, then password derivation, then an
/// ephemeral per-process key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// 32-byte master key as 64 hex characters.
    pub master_key_hex: Option<String>,
    /// Password run through Argon2id when no raw key is given.
    pub password: Option<String>,
}

impl CodecConfig {
    /// Build the codec this configuration describes.
    pub fn build_codec(&self) -> Result<KeyedCodec, CodecError> {
        if let Some(hex_key) = &self.master_key_hex {
            let bytes = hex_decode(hex_key).map_err(|_| CodecError::InvalidKey)?;
            let key: [u8; 32] = bytes.try_into().map_err(|_| CodecError::InvalidKey)?;
            return Ok(KeyedCodec::new(&key));
        }

        if let Some(password) = &self.password {
            return KeyedCodec::from_password(password);
        }

        tracing::warn!("no codec key configured, using an ephemeral per-process key");
        Ok(KeyedCodec::new(&rand_bytes()))
    }
}

/// Load configuration from `{config_dir}/repeater.toml`.
///
/// - If the file does not exist, returns [`RepeaterConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub fn load_config(config_dir: &Path) -> RepeaterConfig {
    let config_path = config_dir.join("repeater.toml");

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No repeater.toml found at {}, using defaults",
                config_path.display()
            );
            return RepeaterConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return RepeaterConfig::default();
        }
    };

    match toml::from_str::<RepeaterConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            RepeaterConfig::default()
        }
    }
}

/// Hex-decode a string to bytes.
fn hex_decode(s: &str) -> Result<Vec<u8>, String> {
    if s.len() % 2 != 0 {
        return Err("odd length hex string".to_string());
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}
