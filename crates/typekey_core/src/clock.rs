//! Wall-clock timestamps for timing binding calls.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
///
/// A clock set before the epoch yields a negative value; the result saturates at the `i64` range.
///
/// ## Examples
/// ```rust
/// use typekey_core::clock::get_time;
///
/// let before = get_time();
/// assert!(get_time() >= before);
/// ```
pub fn get_time() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
        Err(err) => i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
    }
}
