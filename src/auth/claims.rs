use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims of the self-signed JWT a service account trades for an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,   // Service account email
    pub scope: String, // Space separated OAuth scopes
    pub aud: String,   // Token endpoint
    pub exp: usize,    // Expiration time (as UTC timestamp)
    pub iat: usize,    // Issued at (as UTC timestamp)
}

impl AssertionClaims {
    /// Google caps assertion lifetime at one hour.
    pub const LIFETIME_MINUTES: i64 = 60;

    pub fn new(client_email: &str, scopes: &[&str], token_uri: &str) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(Self::LIFETIME_MINUTES);

        Self {
            iss: client_email.to_string(),
            scope: scopes.join(" "),
            aud: token_uri.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
