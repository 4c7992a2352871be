use thiserror::Error as ThisError;

/// Decode failure taxonomy.
///
/// Callers of [`crate::decode`] only ever observe `None`; the distinct kinds
/// are kept for diagnostic logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub(crate) enum DecodeError {
    #[error("token does not have exactly three dot-separated segments")]
    MalformedStructure,

    #[error("payload segment is not valid base64url-encoded UTF-8")]
    InvalidEncoding,

    #[error("payload is not a JSON object")]
    InvalidPayload,
}
