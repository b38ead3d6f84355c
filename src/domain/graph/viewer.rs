use serde::Serialize;
use std::collections::BTreeMap;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Attributes of `<perspective-viewer>` the graph sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum ViewerAttribute {
    #[strum(serialize = "view")]
    View,
    #[strum(serialize = "column-pivots")]
    ColumnPivots,
    #[strum(serialize = "row-pivots")]
    RowPivots,
    #[strum(serialize = "columns")]
    Columns,
    #[strum(serialize = "aggregates")]
    Aggregates,
}

/// Per-column aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize)]
pub enum Aggregate {
    #[strum(serialize = "distinct count")]
    #[serde(rename = "distinct count")]
    DistinctCount,
    #[strum(serialize = "avg")]
    #[serde(rename = "avg")]
    Avg,
}

/// View configuration applied to the viewer once the table is loaded.
///
/// Defaults to a time-series line chart of the ask price, one series per
/// stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerConfig {
    pub view: String,
    pub column_pivots: Vec<String>,
    pub row_pivots: Vec<String>,
    pub columns: Vec<String>,
    pub aggregates: BTreeMap<String, Aggregate>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let aggregates = [
            ("stock", Aggregate::DistinctCount),
            ("top_ask_price", Aggregate::Avg),
            ("top_bid_price", Aggregate::Avg),
            ("timestamp", Aggregate::DistinctCount),
        ]
        .into_iter()
        .map(|(column, aggregate)| (column.to_string(), aggregate))
        .collect();

        Self {
            view: "y_line".to_string(),
            column_pivots: vec!["stock".to_string()],
            row_pivots: vec!["timestamp".to_string()],
            columns: vec!["top_ask_price".to_string()],
            aggregates,
        }
    }
}

impl ViewerConfig {
    /// Attribute value as the viewer expects it: `view` is a bare name,
    /// everything else is JSON.
    pub fn attribute_value(&self, attribute: ViewerAttribute) -> Result<String, serde_json::Error> {
        match attribute {
            ViewerAttribute::View => Ok(self.view.clone()),
            ViewerAttribute::ColumnPivots => serde_json::to_string(&self.column_pivots),
            ViewerAttribute::RowPivots => serde_json::to_string(&self.row_pivots),
            ViewerAttribute::Columns => serde_json::to_string(&self.columns),
            ViewerAttribute::Aggregates => serde_json::to_string(&self.aggregates),
        }
    }

    /// All attributes in application order.
    pub fn attributes(&self) -> Result<Vec<(ViewerAttribute, String)>, serde_json::Error> {
        ViewerAttribute::iter()
            .map(|attribute| self.attribute_value(attribute).map(|value| (attribute, value)))
            .collect()
    }
}
