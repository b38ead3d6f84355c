pub mod errors;
pub mod graph;
pub mod logging;
pub mod market_data;
