//! Vocabulary registries for binding-table keys.
//!
//! This module is the "front door" for the spellings the naming table emits: primitive names, wrapper
//! templates and the engine value-type list. Callers work with **stable IDs** (e.g. `WrapperId::Array`,
//! `EngineTypeId::Vector`) and look up spellings via the registry tables instead of scattering string literals.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects, `const` tables only.
//! - Lookups via `from_str` are **case-insensitive**, matching how binding keys compare.
//!
//! ## Examples
//! ```rust
//! use typekey_core::lang::wrappers::{self, WrapperId};
//!
//! assert_eq!(wrappers::from_str("tarray"), Some(WrapperId::Array));
//! assert_eq!(wrappers::as_str(WrapperId::SharedPtr), "TSharedPtr");
//! ```

pub mod engine;
pub mod primitives;
pub mod registry;
pub mod wrappers;
