use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims snapshot extracted from a session token payload.
///
/// Only the fields this crate consumes are kept; unrecognized claims are
/// dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Canonical identifier of the token's owner, if the payload carries one.
    pub subject: Option<String>,

    /// Unix timestamp (seconds) after which the token is no longer valid.
    pub expiry: Option<i64>,
}

/// Identity providers disagree on the subject field name.
const SUBJECT_FIELDS: [&str; 3] = ["id", "sub", "userId"];

/// Map a decoded payload object onto [`SessionClaims`].
///
/// The first subject field *present* in the payload wins, whether or not its
/// value is empty; a present field with a non-string value does not fall
/// through to the next name. `exp` is taken only as an integer, never coerced
/// from a string or a float.
pub(crate) fn normalize(payload: &Map<String, Value>) -> SessionClaims {
    let subject = SUBJECT_FIELDS
        .iter()
        .find_map(|field| payload.get(*field))
        .and_then(Value::as_str)
        .map(ToString::to_string);

    let expiry = payload.get("exp").and_then(Value::as_i64);

    SessionClaims { subject, expiry }
}
