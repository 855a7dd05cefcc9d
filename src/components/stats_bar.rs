//! Stats Bar Component
//!
//! Aggregate counters from the stats endpoint.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_context().store;
    let stats = move || store.stats().get();

    view! {
        <div class="stats-bar">
            <div class="stat-card">
                <div class="stat-value">{move || stats().total_calls}</div>
                <div class="stat-label">"Total Calls"</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{move || stats().active_leads}</div>
                <div class="stat-label">"Active Leads"</div>
            </div>
            <div class="stat-card important">
                <div class="stat-value">{move || stats().important_leads}</div>
                <div class="stat-label">"⭐ Important"</div>
            </div>
        </div>
    }
}
