use std::time::Duration;

use gloo_timers::future::sleep;
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::errors::StreamResult;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::market_data::Quote;
use crate::{log_debug, log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("Stream");

/// Anything that can hand out the current quote batch.
#[allow(async_fn_in_trait)]
pub trait QuoteSource {
    async fn fetch(&self) -> StreamResult<Vec<Quote>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    pub polls: u32,
    pub batches: u32,
    pub errors: u32,
}

/// Polls a [`QuoteSource`] on a fixed interval for a bounded number of
/// rounds. Cancel it by wrapping `run` in `futures::future::Abortable`.
#[derive(Debug, Clone)]
pub struct StreamSession {
    interval: Duration,
    max_polls: u32,
}

impl StreamSession {
    pub fn new(interval: Duration, max_polls: u32) -> Self {
        Self { interval, max_polls }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.poll_interval(), config.max_polls)
    }

    /// Fetch up to `max_polls` batches and hand each one to `sink`. Failed
    /// fetches are logged and count as a poll.
    pub async fn run<S, F>(&self, source: &S, mut sink: F) -> StreamSummary
    where
        S: QuoteSource,
        F: FnMut(Vec<Quote>),
    {
        let mut summary = StreamSummary::default();
        log_info!(COMPONENT, "Streaming started ({} polls every {:?})", self.max_polls, self.interval);

        while summary.polls < self.max_polls {
            summary.polls += 1;
            match source.fetch().await {
                Ok(batch) => {
                    summary.batches += 1;
                    log_debug!(COMPONENT, "Poll {} returned {} quotes", summary.polls, batch.len());
                    sink(batch);
                }
                Err(e) => {
                    summary.errors += 1;
                    log_warn!(COMPONENT, "Poll {} failed: {}", summary.polls, e);
                }
            }

            if summary.polls < self.max_polls && !self.interval.is_zero() {
                sleep(self.interval).await;
            }
        }

        match serde_json::to_string(&summary) {
            Ok(metadata) => get_logger().log_with_metadata(LogLevel::Info, COMPONENT, "Streaming finished", &metadata),
            Err(_) => {
                log_info!(COMPONENT, "Streaming finished after {} polls", summary.polls);
            }
        }
        summary
    }
}
