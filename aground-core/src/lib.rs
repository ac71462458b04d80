//! # aground-core
//!
//! Core types for the aground toolkit: shared data structures used across
//! all crates.
//!
//! This crate provides:
//! - **Document model**: [`AnalyzedDocument`], [`Token`], [`Chunk`],
//!   [`Entity`] — the contract a linguistic analyzer must satisfy
//! - **Event model**: [`TriggerMatch`], [`EventType`], [`ArgumentRole`],
//!   [`ArgumentBag`], [`ExtractionResult`]
//! - **Offset helpers**: byte/char offset conversion for regex-produced spans
//!
//! The extraction crates depend on `aground-core` to ensure type
//! compatibility across the workspace.

#![warn(missing_docs)]

pub mod document;
pub mod event;
pub mod offset;

// Re-exports for convenience
pub use document::{AnalyzedDocument, Chunk, DepLabel, Entity, EntityLabel, PosTag, Token};
pub use event::{ArgumentBag, ArgumentRole, EventType, ExtractionResult, TriggerMatch};
pub use offset::{bytes_to_chars, chars_to_bytes, is_ascii};
