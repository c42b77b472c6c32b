//! GET /ats_score — serves the last written report wrapped in a minimal HTML page.

use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::report::read_report;
use crate::state::AppState;

/// GET /ats_score
///
/// Reads the report file on every request. A missing or unreadable report
/// becomes a 500 for that request only.
pub async fn handle_ats_score(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let report = read_report(&state.config.report_path).await?;
    let body = if state.config.escape_report_html {
        escape_html(&report)
    } else {
        report
    };

    Ok(Html(render_page(&body)))
}

fn render_page(body: &str) -> String {
    format!("<html><body><h1>ATS Score</h1><pre>{body}</pre></body></html>")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
