use std::collections::HashSet;

use super::ports::{DisplayTable, TableEngine, ViewerElement};
use super::{DisplayRow, RowKey, TableSchema, ViewerConfig};
use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Quote;
use crate::{log_debug, log_error, log_warn};

const COMPONENT: LogComponent = LogComponent::Domain("Feeder");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeederState {
    /// No table yet, or mounting failed
    Uninitialized,
    /// Table created and bound to the viewer
    Ready,
    /// Table released; terminal
    Disposed,
}

/// Result of feeding one batch
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    NotReady,
    Applied { appended: usize, skipped: usize },
    Failed(GraphError),
}

enum Slot<T> {
    Uninitialized,
    Ready(T),
    Disposed,
}

/// Feeds quote batches into a display table, appending each
/// `(stock, timestamp)` row at most once.
///
/// Batches may be redelivered in full or overlap the previous one; only rows
/// whose [`RowKey`] this feeder has not appended yet reach the table.
pub struct GraphFeeder<T: DisplayTable> {
    slot: Slot<T>,
    seen: HashSet<RowKey>,
    rows_appended: usize,
}

impl<T: DisplayTable> Default for GraphFeeder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DisplayTable> GraphFeeder<T> {
    pub fn new() -> Self {
        Self { slot: Slot::Uninitialized, seen: HashSet::new(), rows_appended: 0 }
    }

    pub fn state(&self) -> FeederState {
        match self.slot {
            Slot::Uninitialized => FeederState::Uninitialized,
            Slot::Ready(_) => FeederState::Ready,
            Slot::Disposed => FeederState::Disposed,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.slot, Slot::Ready(_))
    }

    /// Rows appended to the table so far.
    pub fn row_count(&self) -> usize {
        self.rows_appended
    }

    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }

    pub fn table(&self) -> Option<&T> {
        match &self.slot {
            Slot::Ready(table) => Some(table),
            _ => None,
        }
    }

    /// Create the quote table, load it into `viewer` and apply `config`.
    ///
    /// On any failure the feeder stays `Uninitialized` and later updates
    /// are no-ops.
    pub fn mount<E, V>(&mut self, engine: &E, viewer: &V, config: &ViewerConfig) -> GraphResult<()>
    where
        E: TableEngine<Table = T>,
        V: ViewerElement<T>,
    {
        match self.slot {
            Slot::Uninitialized => {}
            Slot::Ready(_) => return Err(GraphError::InvalidState("already mounted")),
            Slot::Disposed => return Err(GraphError::InvalidState("disposed")),
        }

        let mut table = engine.create_table(&TableSchema::quotes()).inspect_err(|e| {
            log_warn!(COMPONENT, "Table not created, graph stays empty: {}", e);
        })?;

        if let Err(e) = bind(&table, viewer, config) {
            log_error!(COMPONENT, "Viewer setup failed: {}", e);
            if let Err(release) = table.delete() {
                log_warn!(COMPONENT, "Releasing unbound table failed: {}", release);
            }
            return Err(e);
        }

        log_debug!(COMPONENT, "Table loaded into viewer (view={})", config.view);
        self.slot = Slot::Ready(table);
        Ok(())
    }

    /// Append the rows of `batch` that were not appended before.
    pub fn update(&mut self, batch: &[Quote]) -> UpdateOutcome {
        let Slot::Ready(table) = &mut self.slot else {
            return UpdateOutcome::NotReady;
        };

        let mut fresh_keys = HashSet::new();
        let rows: Vec<DisplayRow> = batch
            .iter()
            .map(DisplayRow::from_quote)
            .filter(|row| {
                let key = row.key();
                !self.seen.contains(&key) && fresh_keys.insert(key)
            })
            .collect();
        let skipped = batch.len() - rows.len();

        if rows.is_empty() {
            return UpdateOutcome::Applied { appended: 0, skipped };
        }

        if let Err(e) = table.update(&rows) {
            log_error!(COMPONENT, "Append of {} rows failed: {}", rows.len(), e);
            return UpdateOutcome::Failed(e);
        }

        self.seen.extend(fresh_keys);
        self.rows_appended += rows.len();
        UpdateOutcome::Applied { appended: rows.len(), skipped }
    }

    /// Release the table and stop accepting updates. Safe to call twice.
    pub fn dispose(&mut self) {
        if let Slot::Ready(mut table) = std::mem::replace(&mut self.slot, Slot::Disposed) {
            if let Err(e) = table.delete() {
                log_warn!(COMPONENT, "Table release failed: {}", e);
            }
        }
        self.seen.clear();
    }
}

impl<T: DisplayTable> Drop for GraphFeeder<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn bind<T, V: ViewerElement<T>>(table: &T, viewer: &V, config: &ViewerConfig) -> GraphResult<()> {
    viewer.load(table)?;
    let attributes = config.attributes().map_err(|e| GraphError::Viewer(e.to_string()))?;
    for (attribute, value) in attributes {
        viewer.set_attribute(attribute.as_ref(), &value)?;
    }
    Ok(())
}
