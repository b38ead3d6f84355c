use super::{DisplayRow, TableSchema};
use crate::domain::errors::GraphResult;

/// Handle to a live display table owned by the engine.
pub trait DisplayTable {
    /// Append rows. The engine re-renders any viewer bound to the table.
    fn update(&mut self, rows: &[DisplayRow]) -> GraphResult<()>;

    /// Release the table inside the engine.
    fn delete(&mut self) -> GraphResult<()>;
}

/// Factory for display tables.
pub trait TableEngine {
    type Table: DisplayTable;

    /// Fails with `GraphError::EngineUnavailable` when the engine is absent.
    fn create_table(&self, schema: &TableSchema) -> GraphResult<Self::Table>;
}

/// The element a table is rendered into.
pub trait ViewerElement<T> {
    fn load(&self, table: &T) -> GraphResult<()>;
    fn set_attribute(&self, name: &str, value: &str) -> GraphResult<()>;
}
