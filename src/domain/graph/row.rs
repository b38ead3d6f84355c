use crate::domain::market_data::{Quote, QuoteTimestamp, Symbol};
use serde::Serialize;

/// A row of the display table; field names match the table schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub stock: Symbol,
    pub top_ask_price: f64,
    pub top_bid_price: f64,
    pub timestamp: QuoteTimestamp,
}

impl DisplayRow {
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            stock: quote.stock.clone(),
            top_ask_price: quote.ask_price(),
            top_bid_price: quote.bid_price(),
            timestamp: quote.timestamp.clone(),
        }
    }

    pub fn key(&self) -> RowKey {
        RowKey { stock: self.stock.clone(), timestamp: self.timestamp.clone() }
    }
}

/// Identity of a row in the table: one snapshot per stock per timestamp.
/// Text and numeric timestamps never match each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub stock: Symbol,
    pub timestamp: QuoteTimestamp,
}
