//! Case-insensitive identifier strings used as binding-registry keys.
//!
//! [`IdentName`] is the key the naming table produces for every static type (`"int32"`, `"TArray<FString>"`,
//! `"UObject"`). Registry lookups are case-insensitive, so equality and hashing fold ASCII case while the
//! original spelling is kept for display.
//!
//! ## Notes
//! - Content never contains a NUL byte. Pieces are appended with C-string semantics: everything from the first
//!   NUL onward is dropped, so [`IdentName::to_c_string`] is always a well-formed terminated buffer.
//! - Hashing uses a process-wide seed (see [`seed`]) so that hashes are stable within one process.
//!
//! ## Examples
//! ```rust
//! use typekey_core::IdentName;
//!
//! let mut key = IdentName::from("TArray<");
//! key.append("int32").append(">");
//! assert_eq!(key, "tarray<INT32>");
//! assert_eq!(key.len_with_nul(), key.len() + 1);
//! ```

pub mod seed;

use std::ffi::{CStr, CString};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub use seed::{DEFAULT_HASH_SEED, hash_seed, set_hash_seed};

/// An owned identifier with ASCII case-insensitive equality and hashing.
#[derive(Clone, Default)]
pub struct IdentName {
    content: String,
}

impl IdentName {
    /// Create an empty identifier.
    pub const fn new() -> Self {
        Self { content: String::new() }
    }

    /// Append a piece of text.
    ///
    /// ## Parameters
    /// - `piece`: text to append; `None` is accepted and leaves the content unchanged.
    ///
    /// ## Returns
    /// - (`&mut Self`): `self`, for chaining.
    ///
    /// ## Notes
    /// - Bytes from the first NUL in `piece` onward are ignored.
    pub fn append<'a>(&mut self, piece: impl Into<Option<&'a str>>) -> &mut Self {
        if let Some(piece) = piece.into() {
            self.content.push_str(until_nul(piece));
        }
        self
    }

    /// Append a C string; `None` is a no-op. Invalid UTF-8 is replaced lossily.
    pub fn append_c_str(&mut self, piece: Option<&CStr>) -> &mut Self {
        if let Some(piece) = piece {
            self.content.push_str(&piece.to_string_lossy());
        }
        self
    }

    /// Append the raw content of another identifier.
    pub fn append_name(&mut self, other: &IdentName) -> &mut Self {
        self.content.push_str(&other.content);
        self
    }

    /// Borrow the content (without terminator).
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length of the NUL-terminated buffer handed to C callers (`len() + 1`, never zero).
    pub fn len_with_nul(&self) -> usize {
        self.content.len() + 1
    }

    /// Copy the content into a NUL-terminated C string.
    pub fn to_c_string(&self) -> CString {
        CString::new(self.content.as_bytes()).expect("INVARIANT: IdentName content never contains NUL")
    }

    /// Reset to empty content.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Hash the content with the process-wide seed.
    ///
    /// ## Returns
    /// - (`u32`): a hash that agrees with `==` (names equal ignoring ASCII case hash equal).
    pub fn key_hash(&self) -> u32 {
        self.key_hash_with_seed(hash_seed())
    }

    /// Hash the content with an explicit seed.
    ///
    /// ## Notes
    /// - The accumulator starts from `seed ^ len` and folds every `step`-th byte (uppercased) walking from the
    ///   end, `step = len / 4 + 1`. Long names therefore sample roughly four bytes.
    pub fn key_hash_with_seed(&self, seed: u32) -> u32 {
        let bytes = self.content.as_bytes();
        let mut len = bytes.len() as u32;
        let mut h = seed ^ len;
        let step = (len >> 2) + 1;
        while len >= step {
            let upper = bytes[(len - 1) as usize].to_ascii_uppercase();
            h ^= (h << 5).wrapping_add(h >> 2).wrapping_add(u32::from(upper));
            len -= step;
        }
        h
    }
}

fn until_nul(piece: &str) -> &str {
    match piece.find('\0') {
        Some(end) => &piece[..end],
        None => piece,
    }
}

impl PartialEq for IdentName {
    fn eq(&self, other: &Self) -> bool {
        self.content.len() == other.content.len() && self.content.eq_ignore_ascii_case(&other.content)
    }
}

impl Eq for IdentName {}

impl PartialEq<str> for IdentName {
    fn eq(&self, other: &str) -> bool {
        self.content.len() == other.len() && self.content.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for IdentName {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Hash for IdentName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.key_hash());
    }
}

impl From<&str> for IdentName {
    fn from(value: &str) -> Self {
        let mut name = Self::new();
        name.append(value);
        name
    }
}

impl From<String> for IdentName {
    fn from(mut value: String) -> Self {
        if let Some(end) = value.find('\0') {
            value.truncate(end);
        }
        Self { content: value }
    }
}

impl From<&CStr> for IdentName {
    fn from(value: &CStr) -> Self {
        let mut name = Self::new();
        name.append_c_str(Some(value));
        name
    }
}

impl FromStr for IdentName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl AsRef<str> for IdentName {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for IdentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl fmt::Debug for IdentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentName({:?})", self.content)
    }
}
