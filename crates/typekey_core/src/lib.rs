//! Provide the pure building blocks of the typekey binding layer.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both:
//! - the compile-time naming table (`typekey_reflect`) uses to build registry keys, and
//! - the marshaling layer of a scripting runtime uses to pre-check argument tags.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO** beyond reading the system clock, and no compiler-facing types.
//!   The only process-wide state is the identifier hash seed (see [`ident::seed`]), which is written at most once.
//! - Current scope: case-insensitive identifier strings ([`ident`]), dynamic value tags ([`tags`]), the ordered
//!   compatibility rule set ([`category`]), split helpers ([`split`]), scope guards ([`scope`]), a millisecond
//!   clock ([`clock`]) and the wrapper/engine-type vocabularies ([`lang`]).

#![deny(clippy::unwrap_used)]

pub mod category;
pub mod clock;
pub mod errors;
pub mod ident;
pub mod lang;
pub mod scope;
pub mod split;
pub mod tags;

pub use category::ParamCategory;
pub use clock::get_time;
pub use errors::TypeKeyError;
pub use ident::IdentName;
pub use scope::{Defer, ScopedArray, defer};
pub use split::{SearchCase, SearchDir, split, split_with};
pub use tags::ValueTag;
