use eventos_shared::api::EVENTS_PATH;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CONTAINER_ID: &str = "eventos-container";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub events_url: String,
    pub container_id: String,
}

impl AppConfig {
    /// Reads overrides baked in at build time; the browser has no process
    /// environment to consult at runtime.
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("EVENTOS_API_URL"),
            option_env!("EVENTOS_CONTAINER_ID"),
        )
    }

    fn from_overrides(events_url: Option<&str>, container_id: Option<&str>) -> Self {
        Self {
            events_url: non_empty(events_url)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}{}", DEFAULT_API_BASE_URL, EVENTS_PATH)),
            container_id: non_empty(container_id)
                .unwrap_or(DEFAULT_CONTAINER_ID)
                .to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_overrides(None, None)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
