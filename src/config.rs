use std::env;
use secrecy::SecretString;

pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_SPREADSHEET_TITLE: &str = "Travel Leads";
pub const DEFAULT_VARIANT_ID: &str = "global-lifestyle";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: String,
    pub completion_model: String,
    /// Raw service-account key JSON, either inline or read from a file.
    pub gcp_service_account: Option<SecretString>,
    pub leads_spreadsheet_id: Option<String>,
    pub leads_spreadsheet_title: String,
    pub leads_worksheet: Option<String>,
    pub default_variant: String,
    pub variants_path: Option<String>,
    pub http_timeout_secs: Option<u64>,
    pub cors_allowed_origin: Option<String>,
}

/// Reads a variable, treating unset and blank the same way.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn service_account_from_env() -> Option<SecretString> {
    if let Some(json) = non_empty_var("GCP_SERVICE_ACCOUNT_JSON") {
        return Some(SecretString::from(json));
    }

    let path = non_empty_var("GCP_SERVICE_ACCOUNT_FILE")?;
    match std::fs::read_to_string(&path) {
        Ok(contents) => Some(SecretString::from(contents)),
        Err(e) => {
            log::warn!("Could not read GCP_SERVICE_ACCOUNT_FILE '{}': {}", path, e);
            None
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_key: non_empty_var("OPENAI_API_KEY").map(SecretString::from),
            openai_api_base: non_empty_var("OPENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            completion_model: non_empty_var("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            gcp_service_account: service_account_from_env(),
            leads_spreadsheet_id: non_empty_var("LEADS_SPREADSHEET_ID"),
            leads_spreadsheet_title: non_empty_var("LEADS_SPREADSHEET_TITLE")
                .unwrap_or_else(|| DEFAULT_SPREADSHEET_TITLE.to_string()),
            leads_worksheet: non_empty_var("LEADS_WORKSHEET"),
            default_variant: non_empty_var("DEFAULT_VARIANT")
                .unwrap_or_else(|| DEFAULT_VARIANT_ID.to_string()),
            variants_path: non_empty_var("VARIANTS_PATH"),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
            cors_allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN"),
        }
    }

    /// Names of the external credentials that are not configured.
    ///
    /// Missing credentials do not stop the server: submissions fail with a
    /// configuration error (completion key) or lose lead capture (service
    /// account) until the operator fixes them.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openai_api_key.is_none() {
            missing.push("OPENAI_API_KEY");
        }
        if self.gcp_service_account.is_none() {
            missing.push("GCP_SERVICE_ACCOUNT_JSON / GCP_SERVICE_ACCOUNT_FILE");
        }
        missing
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_key: Some(SecretString::from("sk-test".to_string())),
            openai_api_base: "http://127.0.0.1:9/v1".to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            gcp_service_account: None,
            leads_spreadsheet_id: Some("test-spreadsheet".to_string()),
            leads_spreadsheet_title: DEFAULT_SPREADSHEET_TITLE.to_string(),
            leads_worksheet: None,
            default_variant: DEFAULT_VARIANT_ID.to_string(),
            variants_path: None,
            http_timeout_secs: Some(5),
            cors_allowed_origin: None,
        }
    }
}
