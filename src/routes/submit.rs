use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{parser, Submission};
use crate::views::form::success_page;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let raw_data = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    let submission = Submission::from_value(&raw_data).map_err(|missing| {
        tracing::debug!("Rejected submission, missing fields: {missing:?}");
        AppError::Validation("Error: All fields are required.".to_string())
    })?;

    let row = submission.row();
    state.sheets.append_row(&row).await?;

    tracing::info!("Submission recorded as {}", submission.status().as_str());
    Ok(success_page())
}
