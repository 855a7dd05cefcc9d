//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{carry_edit, EditLost, EditSession, ToastKind};
use crate::models::{Lead, LeadField, Stats};

/// Transient notification; `id` lets a dismiss timer skip newer toasts
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    AddLead,
    #[default]
    ViewLeads,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last fetched lead list, replaced wholesale on every successful load
    pub leads: Vec<Lead>,
    /// Backend storage reported with the last list
    pub source: Option<String>,
    pub stats: Stats,
    /// Current search box text
    pub search: String,
    /// Row being edited inline, if any
    pub editing: Option<EditSession>,
    pub toast: Option<Toast>,
    pub active_tab: Tab,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the cached list, carrying the open edit over to the new data
///
/// Returns why the edit was closed when its record is no longer where it was.
pub fn store_replace_leads(store: &AppStore, leads: Vec<Lead>, source: Option<String>) -> Option<EditLost> {
    let mut lost = None;
    store.editing().update(|editing| lost = carry_edit(editing, &leads));
    store.leads().set(leads);
    store.source().set(source);
    lost
}

/// Write one field of the inline-edit draft
pub fn store_set_draft_field(store: &AppStore, field: LeadField, value: String) {
    store.editing().update(|editing| {
        if let Some(session) = editing.as_mut() {
            session.draft.set(field, value);
        }
    });
}
