#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use quote_graph_wasm::domain::errors::{GraphError, GraphResult};
use quote_graph_wasm::domain::graph::{DisplayRow, DisplayTable, TableEngine, TableSchema, ViewerElement};
use quote_graph_wasm::domain::market_data::{Quote, TopOfBook};

/// Everything the fakes observed
#[derive(Debug, Default)]
pub struct Recorder {
    pub tables_created: usize,
    pub schemas: Vec<TableSchema>,
    pub rows: Vec<DisplayRow>,
    pub update_calls: usize,
    pub deleted: usize,
    pub loaded: usize,
    pub attributes: Vec<(String, String)>,
    pub fail_next_update: bool,
    pub fail_load: bool,
}

pub type Shared = Rc<RefCell<Recorder>>;

pub struct FakeEngine {
    pub available: bool,
    pub recorder: Shared,
}

impl FakeEngine {
    pub fn available() -> Self {
        Self { available: true, recorder: Shared::default() }
    }

    pub fn missing() -> Self {
        Self { available: false, recorder: Shared::default() }
    }

    pub fn viewer(&self) -> FakeViewer {
        FakeViewer { recorder: Rc::clone(&self.recorder) }
    }

    pub fn rows(&self) -> usize {
        self.recorder.borrow().rows.len()
    }
}

impl TableEngine for FakeEngine {
    type Table = FakeTable;

    fn create_table(&self, schema: &TableSchema) -> GraphResult<FakeTable> {
        if !self.available {
            return Err(GraphError::EngineUnavailable("no engine on page".to_string()));
        }
        let mut recorder = self.recorder.borrow_mut();
        recorder.tables_created += 1;
        recorder.schemas.push(schema.clone());
        Ok(FakeTable { recorder: Rc::clone(&self.recorder) })
    }
}

pub struct FakeTable {
    recorder: Shared,
}

impl DisplayTable for FakeTable {
    fn update(&mut self, rows: &[DisplayRow]) -> GraphResult<()> {
        let mut recorder = self.recorder.borrow_mut();
        if recorder.fail_next_update {
            recorder.fail_next_update = false;
            return Err(GraphError::Table("worker gone".to_string()));
        }
        recorder.update_calls += 1;
        recorder.rows.extend_from_slice(rows);
        Ok(())
    }

    fn delete(&mut self) -> GraphResult<()> {
        self.recorder.borrow_mut().deleted += 1;
        Ok(())
    }
}

pub struct FakeViewer {
    recorder: Shared,
}

impl ViewerElement<FakeTable> for FakeViewer {
    fn load(&self, _table: &FakeTable) -> GraphResult<()> {
        let mut recorder = self.recorder.borrow_mut();
        if recorder.fail_load {
            return Err(GraphError::Viewer("load is not a function".to_string()));
        }
        recorder.loaded += 1;
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> GraphResult<()> {
        self.recorder.borrow_mut().attributes.push((name.to_string(), value.to_string()));
        Ok(())
    }
}

pub fn quote(stock: &str, ask: Option<f64>, bid: Option<f64>, timestamp: &str) -> Quote {
    Quote::new(
        stock,
        ask.map(|price| TopOfBook::new(price, 100.0)),
        bid.map(|price| TopOfBook::new(price, 100.0)),
        timestamp,
    )
}

/// `count` quotes for ABC and DEF at consecutive timestamps starting at `from`.
pub fn batch(from: usize, count: usize) -> Vec<Quote> {
    (from..from + count)
        .map(|i| {
            let stock = if i % 2 == 0 { "ABC" } else { "DEF" };
            quote(stock, Some(120.0 + i as f64), Some(119.0 + i as f64), &format!("2019-02-11 22:06:{:02}", i))
        })
        .collect()
}
