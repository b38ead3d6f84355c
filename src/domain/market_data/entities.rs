pub use super::value_objects::{Price, QuoteTimestamp, Size, Symbol};
use serde::{Deserialize, Serialize};

/// Best price level on one side of the book
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TopOfBook {
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub size: Option<Size>,
}

impl TopOfBook {
    pub fn new(price: f64, size: f64) -> Self {
        Self { price: Some(Price::new(price)), size: Some(Size::new(size)) }
    }
}

/// Domain entity - one top-of-book snapshot for a stock, as served by the
/// quote server (`ServerRespond` on the wire).
///
/// Either side of the book may be missing or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub stock: Symbol,
    #[serde(default)]
    pub top_ask: Option<TopOfBook>,
    #[serde(default)]
    pub top_bid: Option<TopOfBook>,
    pub timestamp: QuoteTimestamp,
}

impl Quote {
    pub fn new(
        stock: impl Into<Symbol>,
        top_ask: Option<TopOfBook>,
        top_bid: Option<TopOfBook>,
        timestamp: impl Into<QuoteTimestamp>,
    ) -> Self {
        Self { stock: stock.into(), top_ask, top_bid, timestamp: timestamp.into() }
    }

    /// Ask price, or 0 when the ask side or its price is absent.
    pub fn ask_price(&self) -> f64 {
        resolve_price(self.top_ask.as_ref())
    }

    /// Bid price, or 0 when the bid side or its price is absent.
    pub fn bid_price(&self) -> f64 {
        resolve_price(self.top_bid.as_ref())
    }
}

fn resolve_price(side: Option<&TopOfBook>) -> f64 {
    side.and_then(|book| book.price).filter(Price::is_quoted).map_or(0.0, |price| price.value())
}
