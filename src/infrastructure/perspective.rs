//! Bindings to the Perspective engine loaded on the page.
//!
//! Perspective registers a `window.perspective` global whose `worker()`
//! builds tables, and a `<perspective-viewer>` custom element with a
//! `load(table)` method. Both are reached dynamically through
//! `js_sys::Reflect`, so a page without Perspective degrades into
//! `GraphError::EngineUnavailable` instead of a link error.

use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::graph::{DisplayRow, DisplayTable, TableEngine, TableSchema, ViewerElement};
use crate::domain::logging::LogComponent;
use crate::log_trace;

const COMPONENT: LogComponent = LogComponent::Infrastructure("Perspective");
const GLOBAL_NAME: &str = "perspective";

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn is_missing(value: &JsValue) -> bool {
    value.is_falsy()
}

/// Call `target[method](...args)` with `this` bound to `target`.
fn invoke(target: &JsValue, method: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    let args: Array = args.iter().collect();
    function.apply(target, &args)
}

/// Table factory backed by `window.perspective.worker()`.
///
/// The global is looked up on every `create_table` call, so the engine can
/// be constructed before the Perspective bundle has finished loading.
#[derive(Debug, Clone, Default)]
pub struct PerspectiveEngine;

impl PerspectiveEngine {
    pub fn from_window() -> Self {
        Self
    }

    fn worker(&self) -> GraphResult<JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| GraphError::EngineUnavailable("window not available".to_string()))?;
        let global = Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME))
            .map_err(|e| GraphError::EngineUnavailable(describe(&e)))?;
        if is_missing(&global) {
            return Err(GraphError::EngineUnavailable(format!("window.{GLOBAL_NAME} is not defined")));
        }

        let worker =
            invoke(&global, "worker", &[]).map_err(|e| GraphError::EngineUnavailable(describe(&e)))?;
        if is_missing(&worker) {
            return Err(GraphError::EngineUnavailable("worker() returned nothing".to_string()));
        }
        Ok(worker)
    }
}

impl TableEngine for PerspectiveEngine {
    type Table = PerspectiveTable;

    fn create_table(&self, schema: &TableSchema) -> GraphResult<PerspectiveTable> {
        let worker = self.worker()?;
        let schema = JsValue::from_serde(schema).map_err(|e| GraphError::Table(e.to_string()))?;
        let inner = invoke(&worker, "table", &[&schema]).map_err(|e| GraphError::Table(describe(&e)))?;
        log_trace!(COMPONENT, "Created table from schema");
        Ok(PerspectiveTable { inner })
    }
}

/// A Perspective `Table` living in the worker
pub struct PerspectiveTable {
    inner: JsValue,
}

impl DisplayTable for PerspectiveTable {
    fn update(&mut self, rows: &[DisplayRow]) -> GraphResult<()> {
        let data = JsValue::from_serde(rows).map_err(|e| GraphError::Table(e.to_string()))?;
        invoke(&self.inner, "update", &[&data]).map_err(|e| GraphError::Table(describe(&e)))?;
        Ok(())
    }

    fn delete(&mut self) -> GraphResult<()> {
        invoke(&self.inner, "delete", &[]).map_err(|e| GraphError::Table(describe(&e)))?;
        Ok(())
    }
}

/// A `<perspective-viewer>` element in the DOM
#[derive(Debug, Clone)]
pub struct ViewerHandle {
    element: web_sys::Element,
}

impl ViewerHandle {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// Create a viewer element named `tag` and append it to `host`.
    pub fn attach(host: &web_sys::Element, tag: &str) -> GraphResult<Self> {
        let element = gloo::utils::document()
            .create_element(tag)
            .map_err(|e| GraphError::Viewer(describe(&e)))?;
        host.append_child(&element).map_err(|e| GraphError::Viewer(describe(&e)))?;
        Ok(Self { element })
    }

    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }

    pub fn remove(&self) {
        self.element.remove();
    }
}

impl ViewerElement<PerspectiveTable> for ViewerHandle {
    fn load(&self, table: &PerspectiveTable) -> GraphResult<()> {
        invoke(self.element.as_ref(), "load", &[&table.inner])
            .map_err(|e| GraphError::Viewer(describe(&e)))?;
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> GraphResult<()> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| GraphError::Viewer(describe(&e)))
    }
}
