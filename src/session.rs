use tracing::debug;

use crate::claims::SessionClaims;
use crate::{decode, is_expired};

/// Outcome of validating a stored session token end to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Token decoded and its expiry has not passed.
    Active(SessionClaims),
    /// Token decoded but is past its expiry, or carries none.
    Expired,
    /// Token could not be decoded.
    Invalid,
}

impl SessionStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Active(_))
    }
}

/// Classify a raw token for session restoration.
pub fn validate(token: &str) -> SessionStatus {
    match decode(token) {
        Some(decoded) if !is_expired(decoded.expiry) => SessionStatus::Active(decoded),
        Some(_) => {
            debug!("session token past expiry");
            SessionStatus::Expired
        }
        None => SessionStatus::Invalid,
    }
}

/// Whole-token expiry check: a token that cannot be decoded counts as expired.
pub fn is_token_expired(token: &str) -> bool {
    match decode(token) {
        Some(decoded) => is_expired(decoded.expiry),
        None => true,
    }
}
