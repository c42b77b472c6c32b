use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Handlers read `report_path` and `escape_report_html` from here.
    pub config: Config,
}
