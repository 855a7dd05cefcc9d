//! Status Select Component
//!
//! Dropdown over the fixed lead pipeline stages.

use leptos::prelude::*;

use crate::models::LeadStatus;

/// Status dropdown used by the add form and inline edit
#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <select
            class=class
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {LeadStatus::ALL.iter().map(|status| {
                let label = status.label();
                view! {
                    <option value=label selected=move || value.get() == label>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
