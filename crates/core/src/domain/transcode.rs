use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("malformed base64 payload: {0}")]
    MalformedBase64(String),
    #[error("decoded payload is not valid UTF-8")]
    InvalidUtf8,
}

/// Encode text into the transport encoding used for submission payloads.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a transport-encoded payload back into text.
///
/// judge0 may wrap encoded output across lines, so ASCII whitespace is
/// stripped before decoding. Anything else that is not valid base64, or
/// decodes to invalid UTF-8, is rejected rather than returned corrupted.
pub fn decode(input: &str) -> Result<String, TranscodeError> {
    let compact: String = input.split_ascii_whitespace().collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|err| TranscodeError::MalformedBase64(err.to_string()))?;
    String::from_utf8(bytes).map_err(|_| TranscodeError::InvalidUtf8)
}
