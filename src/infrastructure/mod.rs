//! Browser-facing adapters: the Perspective engine, the quote server and
//! console logging.

pub mod datastreamer;
pub mod perspective;
pub mod services;

pub use datastreamer::HttpQuoteSource;
pub use perspective::{PerspectiveEngine, PerspectiveTable, ViewerHandle};
pub use services::{BrowserTimeProvider, ConsoleLogger};
