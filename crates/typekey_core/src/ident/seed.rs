//! Process-wide seed for identifier hashing.
//!
//! The seed is fixed the first time it is read or set and never changes afterwards, so every
//! [`IdentName`](super::IdentName) hashed in one process agrees with every other.

use std::sync::OnceLock;

use crate::errors::TypeKeyError;

/// Seed used when nothing configured one before the first hash.
pub const DEFAULT_HASH_SEED: u32 = 0x9E37_79B9;

static SEED: OnceLock<u32> = OnceLock::new();

/// Return the process-wide seed, fixing it to [`DEFAULT_HASH_SEED`] if unset.
pub fn hash_seed() -> u32 {
    *SEED.get_or_init(|| DEFAULT_HASH_SEED)
}

/// Fix the process-wide seed.
///
/// ## Parameters
/// - `seed`: requested seed value.
///
/// ## Returns
/// - `Ok(())` if the seed is now `seed` (including when it already was).
/// - `Err(TypeKeyError::SeedAlreadyInitialized)` if an earlier read or write fixed a different value.
pub fn set_hash_seed(seed: u32) -> Result<(), TypeKeyError> {
    let current = *SEED.get_or_init(|| seed);
    if current == seed {
        Ok(())
    } else {
        Err(TypeKeyError::SeedAlreadyInitialized {
            current,
            requested: seed,
        })
    }
}
