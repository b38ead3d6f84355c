use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Value Object - quoted price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// A price counts as quoted only when it is a real, non-zero number.
    pub fn is_quoted(&self) -> bool {
        self.0 != 0.0 && !self.0.is_nan()
    }
}

/// Value Object - quantity resting at the top of book
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(f64);

impl Size {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - stock symbol, kept exactly as the server sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - quote timestamp, kept in the form the server sent it.
///
/// Date strings (`"2019-02-11 22:06:30.572453"`, ISO-8601, ...) stay text and
/// epoch milliseconds stay a number; the table's `date` column reads both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteTimestamp {
    Text(String),
    Millis(f64),
}

impl QuoteTimestamp {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Millis(_) => None,
        }
    }

    /// Bit pattern used for equality of numeric timestamps; `-0.0` folds into `0.0`.
    fn millis_bits(millis: f64) -> u64 {
        (millis + 0.0).to_bits()
    }
}

impl PartialEq for QuoteTimestamp {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Millis(a), Self::Millis(b)) => Self::millis_bits(*a) == Self::millis_bits(*b),
            _ => false,
        }
    }
}

impl Eq for QuoteTimestamp {}

impl Hash for QuoteTimestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Text(text) => {
                state.write_u8(0);
                text.hash(state);
            }
            Self::Millis(millis) => {
                state.write_u8(1);
                Self::millis_bits(*millis).hash(state);
            }
        }
    }
}

impl From<&str> for QuoteTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for QuoteTimestamp {
    fn from(millis: f64) -> Self {
        Self::Millis(millis)
    }
}
