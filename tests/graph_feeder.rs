mod common;

use common::{FakeEngine, batch, quote};
use quote_graph_wasm::domain::errors::GraphError;
use quote_graph_wasm::domain::graph::{
    DisplayRow, FeederState, GraphFeeder, TableSchema, UpdateOutcome, ViewerConfig,
};
use quote_graph_wasm::domain::market_data::Quote;

fn mounted(engine: &FakeEngine) -> GraphFeeder<common::FakeTable> {
    let mut feeder = GraphFeeder::new();
    feeder.mount(engine, &engine.viewer(), &ViewerConfig::default()).unwrap();
    feeder
}

#[test]
fn missing_ask_becomes_zero_price() {
    let row = DisplayRow::from_quote(&quote("AAPL", Some(210.5), None, "2023-01-01T10:00:00Z"));
    assert_eq!(row.stock.value(), "AAPL");
    assert_eq!(row.top_ask_price, 210.5);
    assert_eq!(row.top_bid_price, 0.0);
    assert_eq!(row.timestamp.as_text(), Some("2023-01-01T10:00:00Z"));
}

#[test]
fn row_serializes_with_schema_field_names() {
    let row = DisplayRow::from_quote(&quote("AAPL", Some(210.5), None, "2023-01-01T10:00:00Z"));
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "stock": "AAPL",
            "top_ask_price": 210.5,
            "top_bid_price": 0.0,
            "timestamp": "2023-01-01T10:00:00Z"
        })
    );
}

#[test]
fn epoch_millis_timestamp_stays_numeric() {
    let body = r#"[{"stock":"ABC","top_ask":{"price":121.2,"size":36},"top_bid":{"price":120.48,"size":109},"timestamp":1672567200000}]"#;
    let quotes: Vec<Quote> = serde_json::from_str(body).unwrap();

    let row = serde_json::to_value(DisplayRow::from_quote(&quotes[0])).unwrap();
    assert!(row["timestamp"].is_number(), "timestamp was {}", row["timestamp"]);
    assert_eq!(row["timestamp"].as_f64(), Some(1672567200000.0));
}

#[test]
fn redelivered_numeric_timestamps_are_skipped() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);
    let quotes = vec![
        Quote::new("ABC", None, None, 1672567200000.0),
        Quote::new("ABC", None, None, 1672567201000.0),
    ];

    feeder.update(&quotes);
    let outcome = feeder.update(&quotes);

    assert_eq!(outcome, UpdateOutcome::Applied { appended: 0, skipped: 2 });
    assert_eq!(engine.rows(), 2);
}

#[test]
fn mount_creates_quote_table_and_configures_viewer() {
    let engine = FakeEngine::available();
    let feeder = mounted(&engine);

    assert_eq!(feeder.state(), FeederState::Ready);
    let recorder = engine.recorder.borrow();
    assert_eq!(recorder.tables_created, 1);
    assert_eq!(recorder.schemas, vec![TableSchema::quotes()]);
    assert_eq!(recorder.loaded, 1);
    let names: Vec<&str> = recorder.attributes.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["view", "column-pivots", "row-pivots", "columns", "aggregates"]);
    assert_eq!(recorder.attributes[0].1, "y_line");
}

#[test]
fn second_mount_is_rejected() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);

    let err = feeder.mount(&engine, &engine.viewer(), &ViewerConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::InvalidState(_)));
    assert_eq!(engine.recorder.borrow().tables_created, 1);
}

#[test]
fn unavailable_engine_leaves_feeder_uninitialized() {
    let engine = FakeEngine::missing();
    let mut feeder = GraphFeeder::new();

    let err = feeder.mount(&engine, &engine.viewer(), &ViewerConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::EngineUnavailable(_)));
    assert_eq!(feeder.state(), FeederState::Uninitialized);
    assert!(!feeder.is_ready());

    assert_eq!(feeder.update(&batch(0, 3)), UpdateOutcome::NotReady);
    assert!(feeder.table().is_none());
    assert_eq!(feeder.row_count(), 0);
    assert_eq!(engine.recorder.borrow().loaded, 0);
}

#[test]
fn failed_load_releases_table() {
    let engine = FakeEngine::available();
    engine.recorder.borrow_mut().fail_load = true;
    let mut feeder = GraphFeeder::new();

    let err = feeder.mount(&engine, &engine.viewer(), &ViewerConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::Viewer(_)));
    assert_eq!(feeder.state(), FeederState::Uninitialized);
    assert_eq!(engine.recorder.borrow().deleted, 1);
}

#[test]
fn redelivered_batch_adds_nothing() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);
    let quotes = batch(0, 4);

    assert_eq!(feeder.update(&quotes), UpdateOutcome::Applied { appended: 4, skipped: 0 });
    assert_eq!(feeder.update(&quotes), UpdateOutcome::Applied { appended: 0, skipped: 4 });

    assert_eq!(engine.rows(), 4);
    assert_eq!(feeder.row_count(), 4);
    // nothing new, so no second append call reaches the table
    assert_eq!(engine.recorder.borrow().update_calls, 1);
}

#[test]
fn disjoint_batches_add_up() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);

    feeder.update(&batch(0, 3));
    feeder.update(&batch(3, 5));

    assert_eq!(engine.rows(), 8);
}

#[test]
fn overlapping_batch_appends_only_the_new_tail() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);

    feeder.update(&batch(0, 4));
    let outcome = feeder.update(&batch(2, 4));

    assert_eq!(outcome, UpdateOutcome::Applied { appended: 2, skipped: 2 });
    let recorder = engine.recorder.borrow();
    let timestamps: Vec<&str> = recorder.rows.iter().filter_map(|row| row.timestamp.as_text()).collect();
    assert_eq!(
        timestamps,
        [
            "2019-02-11 22:06:00",
            "2019-02-11 22:06:01",
            "2019-02-11 22:06:02",
            "2019-02-11 22:06:03",
            "2019-02-11 22:06:04",
            "2019-02-11 22:06:05",
        ]
    );
}

#[test]
fn duplicates_inside_one_batch_collapse_to_first() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);
    let quotes = vec![
        quote("ABC", Some(1.0), Some(0.5), "t1"),
        quote("ABC", Some(2.0), Some(1.5), "t1"),
        quote("DEF", Some(3.0), Some(2.5), "t1"),
    ];

    assert_eq!(feeder.update(&quotes), UpdateOutcome::Applied { appended: 2, skipped: 1 });
    assert_eq!(engine.recorder.borrow().rows[0].top_ask_price, 1.0);
}

#[test]
fn same_timestamp_different_stock_is_a_new_row() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);

    feeder.update(&[quote("ABC", Some(1.0), None, "t1")]);
    feeder.update(&[quote("DEF", Some(1.0), None, "t1")]);

    assert_eq!(engine.rows(), 2);
    assert_eq!(feeder.seen_len(), 2);
}

#[test]
fn failed_append_is_retried_on_redelivery() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);
    let quotes = batch(0, 2);

    engine.recorder.borrow_mut().fail_next_update = true;
    assert!(matches!(feeder.update(&quotes), UpdateOutcome::Failed(GraphError::Table(_))));
    assert_eq!(feeder.seen_len(), 0);

    assert_eq!(feeder.update(&quotes), UpdateOutcome::Applied { appended: 2, skipped: 0 });
    assert_eq!(engine.rows(), 2);
}

#[test]
fn empty_batch_touches_nothing() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);

    assert_eq!(feeder.update(&[]), UpdateOutcome::Applied { appended: 0, skipped: 0 });
    assert_eq!(engine.recorder.borrow().update_calls, 0);
}

#[test]
fn dispose_releases_table_once_and_stops_updates() {
    let engine = FakeEngine::available();
    let mut feeder = mounted(&engine);
    feeder.update(&batch(0, 2));

    feeder.dispose();
    feeder.dispose();

    assert_eq!(feeder.state(), FeederState::Disposed);
    assert_eq!(engine.recorder.borrow().deleted, 1);
    assert_eq!(feeder.update(&batch(2, 2)), UpdateOutcome::NotReady);
    assert_eq!(engine.rows(), 2);

    let err = feeder.mount(&engine, &engine.viewer(), &ViewerConfig::default()).unwrap_err();
    assert_eq!(err, GraphError::InvalidState("disposed"));
}

#[test]
fn dropping_a_ready_feeder_releases_its_table() {
    let engine = FakeEngine::available();
    {
        let _feeder = mounted(&engine);
    }
    assert_eq!(engine.recorder.borrow().deleted, 1);
}

#[test]
fn dropping_an_uninitialized_feeder_is_silent() {
    let engine = FakeEngine::missing();
    {
        let _feeder: GraphFeeder<common::FakeTable> = GraphFeeder::new();
    }
    assert_eq!(engine.recorder.borrow().deleted, 0);
}
