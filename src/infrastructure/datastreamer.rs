use gloo_net::http::Request;

use crate::application::streaming::QuoteSource;
use crate::domain::errors::{StreamError, StreamResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Quote;
use crate::log_trace;

const COMPONENT: LogComponent = LogComponent::Infrastructure("DataStreamer");

/// Pulls the current quote batch from the quote server over HTTP
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    url: String,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decode a server response body into quotes.
    pub fn decode(body: &str) -> StreamResult<Vec<Quote>> {
        serde_json::from_str(body).map_err(|e| StreamError::Decode(e.to_string()))
    }
}

impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> StreamResult<Vec<Quote>> {
        log_trace!(COMPONENT, "GET {}", self.url);

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| StreamError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(StreamError::Http(response.status()));
        }

        let body = response.text().await.map_err(|e| StreamError::Network(format!("{e:?}")))?;
        Self::decode(&body)
    }
}
