use async_trait::async_trait;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;

use crate::{
    auth::{ServiceAccountKey, TokenProvider, SHEETS_SCOPES},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::LeadRow,
};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/";
const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// Somewhere a captured lead can be appended. Append-only; never read back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn append(&self, row: LeadRow) -> AppResult<()>;
}

/// Which spreadsheet and worksheet receive leads.
#[derive(Clone, Debug)]
pub struct SpreadsheetTarget {
    pub id: Option<String>,
    pub title: String,
    pub worksheet: Option<String>,
}

impl SpreadsheetTarget {
    pub fn from_config(config: &Config) -> Self {
        Self {
            id: config.leads_spreadsheet_id.clone(),
            title: config.leads_spreadsheet_title.clone(),
            worksheet: config.leads_worksheet.clone(),
        }
    }

    /// A1 range for the append call. Without a sheet name the API targets
    /// the first worksheet.
    pub fn append_range(&self) -> String {
        match &self.worksheet {
            Some(name) => format!("'{}'!A1", name.replace('\'', "''")),
            None => "A1".to_string(),
        }
    }

    /// Drive search expression matching the spreadsheet by exact title.
    pub fn drive_query(&self) -> String {
        format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            self.title.replace('\\', "\\\\").replace('\'', "\\'"),
            SPREADSHEET_MIME_TYPE
        )
    }
}

#[derive(Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// Appends leads to a Google Sheets spreadsheet as a service account.
pub struct GoogleSheetsLeadSink {
    http: reqwest::Client,
    tokens: Option<TokenProvider>,
    target: SpreadsheetTarget,
    spreadsheet_id: OnceCell<String>,
    sheets_api_base: String,
    drive_files_url: String,
}

impl GoogleSheetsLeadSink {
    pub fn new(http: reqwest::Client, tokens: Option<TokenProvider>, target: SpreadsheetTarget) -> Self {
        let spreadsheet_id = match &target.id {
            Some(id) => OnceCell::new_with(Some(id.clone())),
            None => OnceCell::new(),
        };

        Self {
            http,
            tokens,
            target,
            spreadsheet_id,
            sheets_api_base: SHEETS_API_BASE.to_string(),
            drive_files_url: DRIVE_FILES_URL.to_string(),
        }
    }

    /// Points the sink at other Sheets and Drive endpoints.
    pub fn with_endpoints(mut self, sheets_api_base: &str, drive_files_url: &str) -> Self {
        self.sheets_api_base = sheets_api_base.to_string();
        self.drive_files_url = drive_files_url.to_string();
        self
    }

    pub fn from_config(config: &Config, http: reqwest::Client) -> AppResult<Self> {
        let tokens = match &config.gcp_service_account {
            Some(json) => {
                let key = ServiceAccountKey::from_json(json)?;
                Some(TokenProvider::new(key, &SHEETS_SCOPES, http.clone()))
            }
            None => None,
        };

        Ok(Self::new(http, tokens, SpreadsheetTarget::from_config(config)))
    }

    pub fn is_configured(&self) -> bool {
        self.tokens.is_some()
    }

    async fn resolve_spreadsheet_id(&self, token: &SecretString) -> AppResult<String> {
        let response = self
            .http
            .get(&self.drive_files_url)
            .bearer_auth(token.expose_secret())
            .query(&[
                ("q", self.target.drive_query().as_str()),
                ("fields", "files(id,name)"),
                ("pageSize", "1"),
            ])
            .send()
            .await
            .map_err(|e| AppError::LeadSinkFailure(format!("Spreadsheet lookup failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LeadSinkFailure(format!(
                "Spreadsheet lookup returned {}: {}",
                status, body
            )));
        }

        let list: DriveFileList = response
            .json()
            .await
            .map_err(|e| AppError::LeadSinkFailure(format!("Invalid Drive response: {}", e)))?;

        let id = list
            .files
            .into_iter()
            .next()
            .map(|f| f.id)
            .ok_or_else(|| {
                AppError::LeadSinkFailure(format!(
                    "Spreadsheet '{}' not found or not shared with the service account",
                    self.target.title
                ))
            })?;

        log::info!("Resolved spreadsheet '{}' to {}", self.target.title, id);
        Ok(id)
    }

    fn append_url(&self, spreadsheet_id: &str) -> AppResult<Url> {
        let range = format!("{}:append", self.target.append_range());
        let mut url = Url::parse(&self.sheets_api_base)
            .map_err(|e| AppError::InternalError(format!("Invalid Sheets URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::InternalError("Sheets URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend([
                "spreadsheets",
                spreadsheet_id,
                "values",
                range.as_str(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl LeadSink for GoogleSheetsLeadSink {
    async fn append(&self, row: LeadRow) -> AppResult<()> {
        let tokens = self.tokens.as_ref().ok_or_else(|| {
            AppError::LeadSinkFailure("service account credentials are not configured".to_string())
        })?;
        let token = tokens.access_token().await?;

        let spreadsheet_id = self
            .spreadsheet_id
            .get_or_try_init(|| self.resolve_spreadsheet_id(&token))
            .await?;

        let response = self
            .http
            .post(self.append_url(spreadsheet_id)?)
            .bearer_auth(token.expose_secret())
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({
                "majorDimension": "ROWS",
                "values": [row.cells],
            }))
            .send()
            .await
            .map_err(|e| AppError::LeadSinkFailure(format!("Append request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LeadSinkFailure(format!(
                "Append returned {}: {}",
                status, body
            )));
        }

        log::info!(
            "Appended lead row to spreadsheet {} as {}",
            spreadsheet_id,
            tokens.client_email()
        );
        Ok(())
    }
}
