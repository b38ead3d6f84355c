use serde::Deserialize;
use std::time::Duration;

use crate::domain::errors::AppError;
use crate::domain::logging::LogLevel;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/query?id=1";
pub const DEFAULT_VIEWER_ELEMENT: &str = "perspective-viewer";

/// Runtime settings for the widget.
///
/// Every field is optional in the JSON override; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint returning the current quote batch as a JSON array
    pub server_url: String,
    /// Delay between two polls of the server
    pub poll_interval_ms: u64,
    /// Polls per streaming session
    pub max_polls: u32,
    pub log_level: LogLevel,
    /// Tag of the viewer element created inside the graph container
    pub viewer_element: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            poll_interval_ms: 100,
            max_polls: 1000,
            log_level: LogLevel::Debug,
            viewer_element: DEFAULT_VIEWER_ELEMENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override. Fields it leaves out keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config for an optional override; no override means all defaults.
    pub fn from_override(json: Option<&str>) -> Result<Self, AppError> {
        json.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
