use std::net::IpAddr;

/// Fixed target range; rows are appended at the first open line inside it.
pub const SHEET_RANGE: &str = "Sheet1!A2:D";

pub const DEFAULT_SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub spreadsheet_id: String,
    pub credentials_path: String,
    pub sheets_api_base_url: String,
    pub sheets_timeout_secs: u64,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let spreadsheet_id = env_required("SPREADSHEET_ID")?;
        let credentials_path = env_required("GOOGLE_API_KEY_PATH")?;

        let host: IpAddr = env_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = env_or("PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let sheets_api_base_url = env_or("SHEETS_API_BASE_URL", DEFAULT_SHEETS_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let sheets_timeout_secs: u64 = env_or("SHEETS_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid SHEETS_TIMEOUT_SECS: {e}"))?;

        let max_body_size: usize = env_or("MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            spreadsheet_id,
            credentials_path,
            sheets_api_base_url,
            sheets_timeout_secs,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
