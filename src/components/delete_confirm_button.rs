//! Delete Lead Button Component
//!
//! Trash button that asks "Delete <institution>?" before anything is sent.

use leptos::prelude::*;

use crate::board::{delete_question, DeletePrompt, LeadKey};

/// Delete button for one lead row
///
/// `on_confirm` receives the lead's key only after an explicit yes;
/// answering no (or ✗) returns to the trash button with no request made.
#[component]
pub fn DeleteConfirmButton(
    lead_name: String,
    key: LeadKey,
    #[prop(into)] on_confirm: Callback<LeadKey>,
) -> impl IntoView {
    let prompt = RwSignal::new(DeletePrompt::Idle);
    let key = StoredValue::new(key);
    let question = delete_question(&lead_name);

    let answer = move |yes: bool| {
        let mut state = prompt.get_untracked();
        let chosen = key.with_value(|key| state.answer(key, yes));
        prompt.set(state);
        if let Some(key) = chosen {
            on_confirm.run(key);
        }
    };

    view! {
        {move || match prompt.get() {
            DeletePrompt::Idle => view! {
                <button
                    class="btn btn-danger btn-small"
                    title="Delete lead"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        prompt.set(DeletePrompt::Asking);
                    }
                >
                    "🗑️"
                </button>
            }.into_any(),
            DeletePrompt::Asking => view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{question.clone()}</span>
                    <button class="confirm-btn" on:click=move |_| answer(true)>"✓"</button>
                    <button class="cancel-btn" on:click=move |_| answer(false)>"✗"</button>
                </span>
            }.into_any(),
        }}
    }
}
