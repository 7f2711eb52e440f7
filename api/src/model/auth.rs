use std::fmt;

use serde::{Deserialize, Serialize};

const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Envelope an authentication collaborator hands to clients after issuing a
/// token. No endpoint of this service constructs or returns it; the shape is
/// kept wire-stable for the consumers that do.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    pub id: String,
    pub email: String,
    pub role: String,
}

fn default_token_type() -> String {
    BEARER_TOKEN_TYPE.into()
}

impl AuthResponse {
    /// Bearer-token envelope; the common case.
    pub fn new(
        token: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self::with_token_type(token, BEARER_TOKEN_TYPE, id, email, role)
    }

    pub fn with_token_type(
        token: impl Into<String>,
        token_type: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            token_type: token_type.into(),
            id: id.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

// The token must never reach a log line, so Debug is written out by hand
// instead of derived.
impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"[redacted]")
            .field("token_type", &self.token_type)
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}
