use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use strum::{AsRefStr, Display as StrumDisplay};

/// Column types understood by the table engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Float,
    Integer,
    Date,
    Datetime,
    Boolean,
}

/// Ordered column-name to type mapping used to create a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    columns: Vec<(&'static str, ColumnType)>,
}

impl TableSchema {
    /// The fixed schema of the quote table:
    /// `stock: string`, `top_ask_price: float`, `top_bid_price: float`, `timestamp: date`.
    pub fn quotes() -> Self {
        Self {
            columns: vec![
                ("stock", ColumnType::String),
                ("top_ask_price", ColumnType::Float),
                ("top_bid_price", ColumnType::Float),
                ("timestamp", ColumnType::Date),
            ],
        }
    }

    pub fn columns(&self) -> &[(&'static str, ColumnType)] {
        &self.columns
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.iter().find(|(column, _)| *column == name).map(|(_, ty)| *ty)
    }
}

impl Serialize for TableSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, ty) in &self.columns {
            map.serialize_entry(name, ty)?;
        }
        map.end()
    }
}
