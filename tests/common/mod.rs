use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use sheetform::config::Config;
use sheetform::sheets::{RowAppender, SheetsError};

/// In-memory stand-in for the spreadsheet; records every appended row.
#[derive(Default)]
pub struct FakeSheets {
    pub rows: Mutex<Vec<Vec<Value>>>,
    pub fail: bool,
}

impl FakeSheets {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn rows(&self) -> Vec<Vec<Value>> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl RowAppender for FakeSheets {
    async fn append_row(&self, values: &[Value]) -> Result<(), SheetsError> {
        if self.fail {
            return Err(SheetsError::Api {
                status: 503,
                body: "backend unavailable".to_string(),
            });
        }
        self.rows.lock().unwrap().push(values.to_vec());
        Ok(())
    }
}

/// A running test server instance backed by a fake spreadsheet.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub sheets: Arc<FakeSheets>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit form-urlencoded data, return (html, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Submit a JSON body, return (html, status).
    pub async fn submit_json(&self, data: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        spreadsheet_id: "test-spreadsheet".to_string(),
        credentials_path: "/nonexistent/credentials.json".to_string(),
        sheets_api_base_url: "http://127.0.0.1:9".to_string(),
        sheets_timeout_secs: 30,
        max_body_size: 4096,
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(FakeSheets::default()).await
}

pub async fn spawn_app_with(sheets: FakeSheets) -> TestApp {
    let sheets = Arc::new(sheets);
    let app = sheetform::build_app(test_config(), sheets.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        sheets,
    }
}
