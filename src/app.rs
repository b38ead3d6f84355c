use futures::future::{AbortHandle, Abortable};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::application::{FeedStats, StreamSession};
use crate::config::AppConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Quote;
use crate::infrastructure::HttpQuoteSource;
use crate::presentation::Graph;
use crate::log_info;

const COMPONENT: LogComponent = LogComponent::Presentation("App");

/// Page shell: a button that starts polling the quote server and the graph
/// the polled batches are fed into.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (data, set_data) = create_signal(Vec::<Quote>::new());
    let (show_graph, set_show_graph) = create_signal(false);
    let (is_streaming, set_streaming) = create_signal(false);
    let (stats, set_stats) = create_signal(FeedStats::default());
    let abort_handle = store_value::<Option<AbortHandle>>(None);

    let viewer_element = config.viewer_element.clone();

    let start_streaming = move |_: ev::MouseEvent| {
        set_show_graph.set(true);
        if is_streaming.get_untracked() {
            return;
        }
        set_streaming.set(true);

        let (handle, registration) = AbortHandle::new_pair();
        abort_handle.set_value(Some(handle));

        let session = StreamSession::from_config(&config);
        let source = HttpQuoteSource::new(config.server_url.clone());
        log_info!(COMPONENT, "Streaming quotes from {}", source.url());
        spawn_local(async move {
            let run = session.run(&source, move |batch| {
                let _ = set_data.try_set(batch);
            });
            match Abortable::new(run, registration).await {
                Ok(summary) => {
                    log_info!(COMPONENT, "Stream ended after {} polls", summary.polls);
                }
                Err(_) => {
                    log_info!(COMPONENT, "Stream aborted");
                }
            }
            let _ = set_streaming.try_set(false);
        });
    };

    on_cleanup(move || {
        abort_handle.with_value(|handle| {
            if let Some(handle) = handle {
                handle.abort();
            }
        });
    });

    view! {
        <div class="App">
            <header class="App-header">"Bank & Merge Co Task 2"</header>
            <div class="App-content">
                <button
                    class="btn btn-primary Stream-button"
                    disabled=move || is_streaming.get()
                    on:click=start_streaming
                >
                    "Start Streaming Data"
                </button>
                <div class="Graph">
                    <Show when=move || show_graph.get()>
                        <Graph data=data viewer_element=viewer_element.clone() stats=set_stats/>
                    </Show>
                </div>
                <div class="Feed-stats">
                    {move || {
                        let s = stats.get();
                        format!("{} rows shown, {} duplicates skipped", s.rows_appended, s.rows_skipped)
                    }}
                </div>
            </div>
        </div>
    }
}
