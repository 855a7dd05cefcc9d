//! Tab Bar Component
//!
//! Switches between the add form and the lead table.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, Tab};

const TABS: &[(Tab, &str)] = &[
    (Tab::AddLead, "➕ Add Lead"),
    (Tab::ViewLeads, "📋 View Leads"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let active = move || ctx.store.active_tab().get();

    view! {
        <nav class="tab-bar">
            {TABS.iter().map(|(tab, label)| {
                let tab = *tab;
                view! {
                    <button
                        class=move || if active() == tab { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| ctx.show_tab(tab)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
