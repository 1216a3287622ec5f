#![forbid(unsafe_code)]
//! typekey: stable type keys and argument-tag checks for scripting-runtime bindings.
//!
//! The work is split across the workspace:
//!
//! - [`typekey_core`]: identifier strings, dynamic value tags, the compatibility rule set, split and scope
//!   helpers, and the name vocabularies.
//! - [`typekey_reflect`]: the compile-time naming table (`TypeName`), the object-handle classifier, argument
//!   checks and signature keys.
//! - [`cli`]: the `typekey` registry inspector.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The library crates and the
//!   `cli` module enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a registry bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;

pub use typekey_core;
pub use typekey_reflect;

pub use typekey_reflect::prelude;
