//! Title Bar Component
//!
//! Dashboard header with data-source badge and manual refresh.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

fn source_label(source: &str) -> String {
    match source {
        "google_sheets" => "📊 Google Sheets".to_string(),
        "memory" => "💾 In-memory (demo)".to_string(),
        other => other.to_string(),
    }
}

/// Header bar
#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let source = move || ctx.store.source().get();

    view! {
        <header class="title-bar">
            <h1 class="title">"Sales Tracker"</h1>
            {move || source().map(|s| view! {
                <span class="source-badge" title="Where the backend reads leads from">
                    {source_label(&s)}
                </span>
            })}
            <button class="btn btn-refresh" on:click=move |_| ctx.refresh()>
                "🔄 Refresh"
            </button>
        </header>
    }
}
