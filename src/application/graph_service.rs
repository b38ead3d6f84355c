use crate::domain::errors::GraphResult;
use crate::domain::graph::{FeederState, GraphFeeder, TableEngine, UpdateOutcome, ViewerConfig, ViewerElement};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Quote;
use crate::{log_debug, log_info};

const COMPONENT: LogComponent = LogComponent::Application("GraphService");

/// Running counters for one graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub batches: usize,
    pub rows_appended: usize,
    pub rows_skipped: usize,
    pub failures: usize,
    pub ready: bool,
}

/// Owns the engine handle and the feeder for one graph widget and drives
/// them from the widget's lifecycle: `mount` once, `on_data` per data
/// change, `dispose` on teardown.
pub struct GraphService<E: TableEngine> {
    engine: E,
    feeder: GraphFeeder<E::Table>,
    config: ViewerConfig,
    stats: FeedStats,
}

impl<E: TableEngine> GraphService<E> {
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, ViewerConfig::default())
    }

    pub fn with_config(engine: E, config: ViewerConfig) -> Self {
        Self { engine, feeder: GraphFeeder::new(), config, stats: FeedStats::default() }
    }

    pub fn mount<V: ViewerElement<E::Table>>(&mut self, viewer: &V) -> GraphResult<()> {
        self.feeder.mount(&self.engine, viewer, &self.config)?;
        self.stats.ready = true;
        log_info!(COMPONENT, "Graph ready");
        Ok(())
    }

    pub fn on_data(&mut self, batch: &[Quote]) -> UpdateOutcome {
        let outcome = self.feeder.update(batch);
        match &outcome {
            UpdateOutcome::NotReady => {
                log_debug!(COMPONENT, "Dropped batch of {} quotes, graph not ready", batch.len());
            }
            UpdateOutcome::Applied { appended, skipped } => {
                self.stats.batches += 1;
                self.stats.rows_appended += appended;
                self.stats.rows_skipped += skipped;
                log_debug!(COMPONENT, "Batch {}: +{} rows, {} already shown", self.stats.batches, appended, skipped);
            }
            UpdateOutcome::Failed(_) => self.stats.failures += 1,
        }
        outcome
    }

    pub fn dispose(&mut self) {
        if self.feeder.state() != FeederState::Disposed {
            self.feeder.dispose();
            self.stats.ready = false;
            log_info!(COMPONENT, "Graph disposed after {} rows", self.stats.rows_appended);
        }
    }

    pub fn state(&self) -> FeederState {
        self.feeder.state()
    }

    pub fn stats(&self) -> FeedStats {
        self.stats
    }

    pub fn feeder(&self) -> &GraphFeeder<E::Table> {
        &self.feeder
    }
}
