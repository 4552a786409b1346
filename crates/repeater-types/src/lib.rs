//! Shared domain types for the repeater field kit.
//!
//! This crate contains the descriptor attribute record consumed by the
//! renderer and the error types shared across the workspace. Zero
//! infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod attributes;
pub mod error;
