use axum::response::Html;

const INTAKE_FORM_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the single-page intake form.
pub async fn intake_form_page() -> Html<&'static str> {
    Html(INTAKE_FORM_HTML)
}
