use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    auth::claims::AssertionClaims,
    errors::{AppError, AppResult},
};

pub const SHEETS_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Deserialize)]
struct ServiceAccountFile {
    client_email: String,
    private_key: String,
    #[serde(default = "default_token_uri")]
    token_uri: String,
}

/// The parts of a Google service-account key file needed to sign assertions.
#[derive(Clone, Debug)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub token_uri: String,
    private_key: SecretString,
}

impl ServiceAccountKey {
    pub fn from_json(json: &SecretString) -> AppResult<Self> {
        let file: ServiceAccountFile = serde_json::from_str(json.expose_secret()).map_err(|e| {
            AppError::ConfigurationError(format!("invalid service account key: {}", e))
        })?;

        Ok(Self {
            client_email: file.client_email,
            token_uri: file.token_uri,
            private_key: SecretString::from(file.private_key),
        })
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct AccessToken {
    value: SecretString,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(60) < self.expires_at
    }
}

/// Exchanges signed assertions for OAuth access tokens, reusing a token
/// until shortly before it expires.
pub struct TokenProvider {
    key: ServiceAccountKey,
    scopes: Vec<&'static str>,
    http: reqwest::Client,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn new(key: ServiceAccountKey, scopes: &[&'static str], http: reqwest::Client) -> Self {
        Self {
            key,
            scopes: scopes.to_vec(),
            http,
            cached: Mutex::new(None),
        }
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    pub fn sign_assertion(&self) -> AppResult<String> {
        let claims = AssertionClaims::new(&self.key.client_email, &self.scopes, &self.key.token_uri);
        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.expose_secret().as_bytes())
            .map_err(|e| AppError::LeadSinkFailure(format!("Invalid service account key: {}", e)))?;

        encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| AppError::LeadSinkFailure(format!("Failed to sign assertion: {}", e)))
    }

    pub async fn access_token(&self) -> AppResult<SecretString> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let assertion = self.sign_assertion()?;
        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| AppError::LeadSinkFailure(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LeadSinkFailure(format!(
                "Token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::LeadSinkFailure(format!("Invalid token response: {}", e)))?;

        let value = SecretString::from(token.access_token);
        *cached = Some(AccessToken {
            value: value.clone(),
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        });
        log::debug!("Obtained access token for {}", self.key.client_email);

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        fixtures::{service_account_json, service_account_json_with_token_uri},
        stub_server::StubServer,
    };
    use actix_web::http::StatusCode;
    use serde_json::json;

    fn provider() -> TokenProvider {
        let key = ServiceAccountKey::from_json(&service_account_json()).unwrap();
        TokenProvider::new(key, &SHEETS_SCOPES, reqwest::Client::new())
    }

    #[test]
    fn test_key_parses_with_default_token_uri() {
        let key = ServiceAccountKey::from_json(&service_account_json()).unwrap();
        assert_eq!(key.client_email, "leads@travel-leads.iam.gserviceaccount.com");
        assert_eq!(key.token_uri, DEFAULT_TOKEN_URI);
    }

    #[test]
    fn test_malformed_key_is_configuration_error() {
        let result = ServiceAccountKey::from_json(&SecretString::from("{\"client_email\": 1}".to_string()));
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_sign_assertion_uses_rs256() {
        let token = provider().sign_assertion().unwrap();

        assert_eq!(token.split('.').count(), 3);
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
    }

    #[test]
    fn test_bad_private_key_is_sink_failure() {
        let json = SecretString::from(
            r#"{"client_email":"a@b.iam.gserviceaccount.com","private_key":"not a pem"}"#.to_string(),
        );
        let key = ServiceAccountKey::from_json(&json).unwrap();
        let provider = TokenProvider::new(key, &SHEETS_SCOPES, reqwest::Client::new());

        assert!(matches!(
            provider.sign_assertion(),
            Err(AppError::LeadSinkFailure(_))
        ));
    }

    #[test]
    fn test_token_freshness_window() {
        let now = Utc::now();
        let token = AccessToken {
            value: SecretString::from("t".to_string()),
            expires_at: now + Duration::seconds(30),
        };
        assert!(!token.is_fresh(now));

        let token = AccessToken {
            value: SecretString::from("t".to_string()),
            expires_at: now + Duration::seconds(3600),
        };
        assert!(token.is_fresh(now));
    }

    fn stub_provider(server: &StubServer) -> TokenProvider {
        let key = ServiceAccountKey::from_json(&service_account_json_with_token_uri(
            &server.url("/token"),
        ))
        .unwrap();
        TokenProvider::new(key, &SHEETS_SCOPES, reqwest::Client::new())
    }

    #[actix_web::test]
    async fn test_access_token_posts_jwt_grant_and_caches() {
        let server = StubServer::start(|_| {
            (
                StatusCode::OK,
                json!({"access_token": "ya29.test", "expires_in": 3600, "token_type": "Bearer"}),
            )
        });
        let provider = stub_provider(&server);

        let first = provider.access_token().await.unwrap();
        let second = provider.access_token().await.unwrap();
        assert_eq!(first.expose_secret(), "ya29.test");
        assert_eq!(second.expose_secret(), "ya29.test");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/token");
        assert!(requests[0]
            .body
            .contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"));
        assert!(requests[0].body.contains("assertion="));
    }

    #[actix_web::test]
    async fn test_short_lived_token_is_refreshed() {
        let server = StubServer::start(|_| {
            (
                StatusCode::OK,
                json!({"access_token": "ya29.brief", "expires_in": 30, "token_type": "Bearer"}),
            )
        });
        let provider = stub_provider(&server);

        provider.access_token().await.unwrap();
        provider.access_token().await.unwrap();

        assert_eq!(server.requests().len(), 2);
    }

    #[actix_web::test]
    async fn test_rejected_grant_is_sink_failure() {
        let server = StubServer::start(|_| {
            (
                StatusCode::BAD_REQUEST,
                json!({"error": "invalid_grant", "error_description": "Invalid JWT Signature."}),
            )
        });

        match stub_provider(&server).access_token().await {
            Err(AppError::LeadSinkFailure(msg)) => assert!(msg.contains("invalid_grant")),
            other => panic!("Expected LeadSinkFailure, got {:?}", other.map(|_| ())),
        }
    }
}
