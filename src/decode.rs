use base64::Engine as _;
use serde_json::{Map, Value};
use tracing::debug;

use crate::claims::{self, SessionClaims};
use crate::error::DecodeError;

/// Decode the claims payload from a session token.
///
/// This is intentionally signature-agnostic: the header and signature
/// segments are never parsed or verified, only the payload segment is
/// base64url-decoded and read as a JSON object. Every failure collapses to
/// `None`; the distinct failure kinds surface only as debug-level diagnostics.
pub fn decode(token: &str) -> Option<SessionClaims> {
    match try_decode(token) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            debug!(%error, "session token decode failed");
            None
        }
    }
}

fn try_decode(token: &str) -> Result<SessionClaims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload_b64, _] = segments.as_slice() else {
        return Err(DecodeError::MalformedStructure);
    };

    // Most tokens are base64url without padding, but some issuers pad.
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload_b64)
        .or_else(|_| base64::engine::general_purpose::URL_SAFE.decode(payload_b64))
        .map_err(|_| DecodeError::InvalidEncoding)?;

    let text = std::str::from_utf8(&bytes).map_err(|_| DecodeError::InvalidEncoding)?;

    let payload: Map<String, Value> =
        serde_json::from_str(text).map_err(|_| DecodeError::InvalidPayload)?;

    Ok(claims::normalize(&payload))
}
