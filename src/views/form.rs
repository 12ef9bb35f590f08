use askama::Template;
use axum::response::{Html, IntoResponse};

#[derive(Template)]
#[template(path = "form/index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "form/success.html")]
struct SuccessTemplate;

#[derive(Template)]
#[template(path = "form/error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

/// The submission form. Static: nothing in it depends on request or state.
pub async fn index() -> impl IntoResponse {
    Html(IndexTemplate.render().unwrap_or_default())
}

pub fn success_page() -> Html<String> {
    Html(SuccessTemplate.render().unwrap_or_default())
}

pub fn error_page(message: &str) -> Html<String> {
    Html(ErrorTemplate { message }.render().unwrap_or_default())
}
