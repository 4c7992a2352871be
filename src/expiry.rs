use chrono::Utc;

/// Report whether a token expiry instant has passed.
///
/// A token without an expiry claim counts as already expired. A token whose
/// expiry equals the current second is still within its validity window.
pub fn is_expired(expiry: Option<i64>) -> bool {
    expired_at(expiry, Utc::now().timestamp())
}

fn expired_at(expiry: Option<i64>, now: i64) -> bool {
    match expiry {
        Some(expiry) => now > expiry,
        None => true,
    }
}
