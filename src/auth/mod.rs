//! Authentication: the Basic-credential encoder shared by both sides of
//! the token exchange, and the server-side token endpoint.

mod credentials;
pub mod handlers;

use serde::{Deserialize, Serialize};

pub use credentials::{decode_basic_auth, encode_basic_auth};

/// Body of a successful token exchange, `tokenExpiration` on the wire
/// (unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub token_expiration: i64,
}
