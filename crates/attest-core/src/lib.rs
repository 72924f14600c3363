//! # attest-core
//!
//! Core types shared across the attest workspace:
//! - Entity structs mirroring the evidence backend's JSON payloads
//! - Status and cadence enums, including the submission review state machine
//! - The pagination envelope used by list endpoints
//! - Display helpers for user references
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use errors::CoreError;
