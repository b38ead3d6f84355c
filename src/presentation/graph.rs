use leptos::html::Div;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::application::{FeedStats, GraphService};
use crate::config::DEFAULT_VIEWER_ELEMENT;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Quote;
use crate::infrastructure::{PerspectiveEngine, ViewerHandle};
use crate::{log_error, log_warn};

const COMPONENT: LogComponent = LogComponent::Presentation("Graph");

/// Live chart of the quotes in `data`.
///
/// Creates a `<perspective-viewer>` inside its container once the container
/// is in the DOM, then appends every not-yet-shown row whenever `data`
/// changes. The table is released when the component is cleaned up.
#[component]
pub fn Graph(
    #[prop(into)] data: Signal<Vec<Quote>>,
    #[prop(into, default = DEFAULT_VIEWER_ELEMENT.to_string())] viewer_element: String,
    #[prop(optional)] stats: Option<WriteSignal<FeedStats>>,
) -> impl IntoView {
    let host_ref = create_node_ref::<Div>();
    let service = Rc::new(RefCell::new(GraphService::new(PerspectiveEngine::from_window())));
    let viewer: Rc<RefCell<Option<ViewerHandle>>> = Rc::default();

    let publish = move |snapshot: FeedStats| {
        if let Some(stats) = stats {
            stats.set(snapshot);
        }
    };

    {
        let service = Rc::clone(&service);
        let viewer = Rc::clone(&viewer);
        create_effect(move |mounted: Option<bool>| {
            if mounted == Some(true) {
                return true;
            }
            let Some(host) = host_ref.get() else {
                return false;
            };

            let handle = match ViewerHandle::attach(&host, &viewer_element) {
                Ok(handle) => handle,
                Err(e) => {
                    log_error!(COMPONENT, "Could not create <{}>: {}", viewer_element, e);
                    return true;
                }
            };

            let snapshot = {
                let mut graph = service.borrow_mut();
                if let Err(e) = graph.mount(&handle) {
                    log_warn!(COMPONENT, "Graph not mounted: {}", e);
                }
                data.with_untracked(|batch| graph.on_data(batch));
                graph.stats()
            };
            *viewer.borrow_mut() = Some(handle);
            publish(snapshot);
            true
        });
    }

    {
        let service = Rc::clone(&service);
        create_effect(move |_| {
            let snapshot = data.with(|batch| {
                let mut graph = service.borrow_mut();
                graph.on_data(batch);
                graph.stats()
            });
            publish(snapshot);
        });
    }

    on_cleanup(move || {
        service.borrow_mut().dispose();
        if let Some(handle) = viewer.borrow_mut().take() {
            handle.remove();
        }
    });

    view! { <div class="Graph-container" node_ref=host_ref></div> }
}
