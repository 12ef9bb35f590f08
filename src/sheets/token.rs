use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountKey;
use super::SheetsError;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AssertionClaims {
    pub fn new(key: &ServiceAccountKey) -> Self {
        let now = Utc::now();
        Self {
            iss: key.client_email.clone(),
            scope: SPREADSHEETS_SCOPE.to_string(),
            aud: key.token_uri.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Sign a service account assertion (RS256) for the spreadsheets scope.
pub fn sign_assertion(key: &ServiceAccountKey) -> Result<String, SheetsError> {
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| SheetsError::Credentials(format!("Invalid private key: {e}")))?;

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    encode(&header, &AssertionClaims::new(key), &encoding_key)
        .map_err(|e| SheetsError::Auth(format!("JWT encode failed: {e}")))
}

/// Exchange a signed assertion for an OAuth2 access token at the key's token URI.
pub async fn fetch_access_token(
    client: &reqwest::Client,
    key: &ServiceAccountKey,
) -> Result<String, SheetsError> {
    let assertion = sign_assertion(key)?;

    let resp = client
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await
        .map_err(|e| SheetsError::Auth(format!("Token request failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SheetsError::Auth(format!(
            "Token endpoint returned {}: {}",
            status.as_u16(),
            body.chars().take(512).collect::<String>()
        )));
    }

    let token: TokenResponse = resp
        .json()
        .await
        .map_err(|e| SheetsError::Auth(format!("Invalid token response: {e}")))?;

    tracing::debug!("Obtained access token for {}", key.client_email);
    Ok(token.access_token)
}
