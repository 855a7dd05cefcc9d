//! Lead Table Component
//!
//! Search box and the table of cached leads.

use leptos::prelude::*;

use crate::board::{filter_leads, COLUMN_COUNT};
use crate::components::LeadRow;
use crate::context::use_app_context;
use crate::models::LeadField;
use crate::store::AppStateStoreFields;

#[component]
pub fn LeadTable() -> impl IntoView {
    let store = use_app_context().store;

    // Filtering runs on the cache; row numbers stay those of the full list
    let rows = Memo::new(move |_| {
        let term = store.search().get();
        store.leads().with(|leads| filter_leads(leads, &term))
    });

    view! {
        <div class="lead-table-view">
            <div class="search-box">
                <input
                    type="text"
                    placeholder="🔍 Search leads..."
                    prop:value=move || store.search().get()
                    on:input=move |ev| store.search().set(event_target_value(&ev))
                />
            </div>
            <div class="table-container">
                <table class="leads-table">
                    <thead>
                        <tr>
                            <th>"⭐"</th>
                            {LeadField::ALL.iter().map(|field| view! { <th>{field.label()}</th> }).collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan=COLUMN_COUNT.to_string() class="empty-row">
                                            "No leads found. Add your first lead!"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter()
                                    .map(|(row_num, lead)| view! { <LeadRow row_num=row_num lead=lead /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
