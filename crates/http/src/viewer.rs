use axum::response::Html;

pub const DASHBOARD_HTML: &str = include_str!("viewer.html");

/// `GET /`: static page; all data comes from the JSON endpoints.
pub async fn serve_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
