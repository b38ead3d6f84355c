//! Use cases driving the graph: feeding it and streaming quotes into it.

pub mod graph_service;
pub mod streaming;

pub use graph_service::{FeedStats, GraphService};
pub use streaming::{QuoteSource, StreamSession, StreamSummary};
