//! Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Current notification, if any
#[component]
pub fn ToastView() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        {move || store.toast().get().map(|toast| view! {
            <div class=format!("toast {} show", toast.kind.class()) role="status">
                {toast.message}
            </div>
        })}
    }
}
