use std::path::Path;

use serde::Deserialize;

use super::SheetsError;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The subset of a Google service account key file needed to mint tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(raw: &[u8]) -> Result<Self, SheetsError> {
        let key: ServiceAccountKey = serde_json::from_slice(raw)
            .map_err(|e| SheetsError::Credentials(format!("Invalid key file: {e}")))?;

        if key.client_email.is_empty() || key.private_key.is_empty() {
            return Err(SheetsError::Credentials(
                "Key file is missing client_email or private_key".to_string(),
            ));
        }

        Ok(key)
    }

    /// Read and parse the key file. Called once per append, like the
    /// original client which built a fresh auth client for every request.
    pub async fn load(path: &Path) -> Result<Self, SheetsError> {
        let raw = tokio::fs::read(path).await.map_err(|e| {
            SheetsError::Credentials(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_uri_defaults_to_google() {
        let key = ServiceAccountKey::from_json(
            br#"{"client_email":"svc@example.iam.gserviceaccount.com","private_key":"pem"}"#,
        )
        .unwrap();
        assert_eq!(key.token_uri, DEFAULT_TOKEN_URI);
        assert!(key.private_key_id.is_none());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let key = ServiceAccountKey::from_json(
            br#"{
                "type": "service_account",
                "project_id": "demo",
                "private_key_id": "abc123",
                "private_key": "pem",
                "client_email": "svc@example.iam.gserviceaccount.com",
                "token_uri": "http://127.0.0.1:9/token"
            }"#,
        )
        .unwrap();
        assert_eq!(key.private_key_id.as_deref(), Some("abc123"));
        assert_eq!(key.token_uri, "http://127.0.0.1:9/token");
    }

    #[test]
    fn empty_private_key_is_rejected() {
        let err = ServiceAccountKey::from_json(
            br#"{"client_email":"svc@example.com","private_key":""}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SheetsError::Credentials(_)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(ServiceAccountKey::from_json(b"not json").is_err());
    }

    #[tokio::test]
    async fn missing_file_is_a_credentials_error() {
        let err = ServiceAccountKey::load(Path::new("/nonexistent/key.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/key.json"));
    }
}
