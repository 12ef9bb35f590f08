pub mod client;
pub mod credentials;
pub mod token;

use async_trait::async_trait;
use serde_json::Value;

pub use client::GoogleSheetsClient;

#[derive(Debug)]
pub enum SheetsError {
    /// The service account key file could not be read or parsed.
    Credentials(String),
    /// Signing the assertion or exchanging it for an access token failed.
    Auth(String),
    /// Transport-level failure talking to the Sheets API.
    Request(String),
    /// The Sheets API answered with a non-success status.
    Api { status: u16, body: String },
}

impl std::fmt::Display for SheetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetsError::Credentials(msg) => write!(f, "Credentials error: {msg}"),
            SheetsError::Auth(msg) => write!(f, "Authentication error: {msg}"),
            SheetsError::Request(msg) => write!(f, "Request error: {msg}"),
            SheetsError::Api { status, body } => {
                write!(f, "Sheets API returned {status}: {body}")
            }
        }
    }
}

impl std::error::Error for SheetsError {}

/// Appends a single row of cell values to the configured spreadsheet.
///
/// Implementations never read or deduplicate existing rows.
#[async_trait]
pub trait RowAppender: Send + Sync {
    async fn append_row(&self, values: &[Value]) -> Result<(), SheetsError>;
}
