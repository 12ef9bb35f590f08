use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};

use super::credentials::ServiceAccountKey;
use super::token;
use super::{RowAppender, SheetsError};
use crate::config::{Config, SHEET_RANGE};

/// Sheets v4 client authenticating as a service account on every append.
pub struct GoogleSheetsClient {
    client: reqwest::Client,
    credentials_path: PathBuf,
    spreadsheet_id: String,
    api_base_url: String,
}

impl GoogleSheetsClient {
    pub fn new(config: &Config) -> Result<Self, SheetsError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.sheets_timeout_secs))
            .build()
            .map_err(|e| SheetsError::Request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            credentials_path: PathBuf::from(&config.credentials_path),
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_base_url: config.sheets_api_base_url.clone(),
        })
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS`
    pub fn append_url(&self) -> Result<Url, SheetsError> {
        let mut url = Url::parse(&format!("{}/v4/spreadsheets", self.api_base_url))
            .map_err(|e| SheetsError::Request(format!("Invalid Sheets API URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| SheetsError::Request("Sheets API URL cannot be a base".to_string()))?
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{SHEET_RANGE}:append"));

        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");

        Ok(url)
    }
}

#[async_trait]
impl RowAppender for GoogleSheetsClient {
    async fn append_row(&self, values: &[Value]) -> Result<(), SheetsError> {
        let key = ServiceAccountKey::load(&self.credentials_path).await?;
        let access_token = token::fetch_access_token(&self.client, &key).await?;
        let url = self.append_url()?;

        let resp = self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(&json!({ "values": [values] }))
            .send()
            .await
            .map_err(|e| SheetsError::Request(format!("Append request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Appended row to spreadsheet {}", self.spreadsheet_id);
        Ok(())
    }
}
