//! Repeater field descriptor builder and its service ports.
//!
//! This crate defines the "ports" (service traits) that the infrastructure
//! layer implements: layout resolution, reference encoding, and old-input
//! lookup. It depends only on `repeater-types` -- never on `repeater-infra`
//! or any crypto/IO crate.
//!
//! The builder lifecycle is two-phase: configuration calls accumulate state
//! and may register finalization hooks; the host renderer runs
//! [`field::Repeater::finalize`] exactly once before reading the descriptor.

pub mod codec;
pub mod field;
pub mod layout;
pub mod old_input;
pub mod services;
pub mod value;
