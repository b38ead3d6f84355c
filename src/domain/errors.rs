use std::fmt;

/// Failures around the display table and its viewer element
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The visualization engine (or its worker) is not present
    EngineUnavailable(String),
    /// Operation not permitted in the feeder's current state
    InvalidState(&'static str),
    /// Table construction, append or release failed
    Table(String),
    /// Loading the table into the viewer or configuring it failed
    Viewer(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::EngineUnavailable(msg) => write!(f, "Engine unavailable: {}", msg),
            GraphError::InvalidState(state) => write!(f, "Invalid feeder state: {}", state),
            GraphError::Table(msg) => write!(f, "Table error: {}", msg),
            GraphError::Viewer(msg) => write!(f, "Viewer error: {}", msg),
        }
    }
}

impl std::error::Error for GraphError {}

/// Failures while pulling quote batches from the server
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    Network(String),
    Http(u16),
    Decode(String),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Network(msg) => write!(f, "Network error: {}", msg),
            StreamError::Http(status) => write!(f, "HTTP error: {}", status),
            StreamError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for StreamError {}

/// Errors surfaced to the page through the exported entry points
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(e: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
pub type StreamResult<T> = Result<T, StreamError>;
