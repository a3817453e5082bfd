use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::AuthError;

/// Builds a `Basic` authorization header value from an email/password
/// pair. Total over its inputs: any strings, including empty ones,
/// produce a defined output.
pub fn encode_basic_auth(email: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{}:{}", email, password)))
}

/// Inverse of [`encode_basic_auth`] for the server side of the exchange:
/// accepts a `Basic <payload>` header value and recovers the (email,
/// password) pair by splitting the decoded payload at the first colon.
pub fn decode_basic_auth(header: &str) -> Result<(String, String), AuthError> {
    let payload = header
        .strip_prefix("Basic ")
        .ok_or(AuthError::MalformedHeader)?;
    let decoded = BASE64
        .decode(payload)
        .map_err(|_| AuthError::MalformedHeader)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedHeader)?;
    let (email, password) = decoded.split_once(':').ok_or(AuthError::MalformedHeader)?;
    Ok((email.to_string(), password.to_string()))
}
