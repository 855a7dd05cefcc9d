//! Application Context
//!
//! Lead board operations shared by every component via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::{after_mutation, EditSession, FetchSequence, FollowUp, LeadKey, Mutation, ToastKind};
use crate::commands::Api;
use crate::config::ClientConfig;
use crate::models::{Lead, LeadForm};
use crate::storage;
use crate::error::ApiError;
use crate::store::{store_replace_leads, AppState, AppStateStoreFields, AppStore, Tab, Toast};

/// App-wide handle: state store, settings and request bookkeeping
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<ClientConfig>,
    leads_seq: StoredValue<FetchSequence>,
    stats_seq: StoredValue<FetchSequence>,
    toast_seq: StoredValue<u64>,
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            store: Store::new(AppState::default()),
            config: StoredValue::new(config),
            leads_seq: StoredValue::new(FetchSequence::default()),
            stats_seq: StoredValue::new(FetchSequence::default()),
            toast_seq: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    fn api(&self) -> Api {
        Api::new(self.config())
    }

    // ========================
    // Loading
    // ========================

    /// Fetch the lead list; only the newest response is applied
    pub fn load_leads(&self) {
        let ctx = *self;
        let mut ticket = 0;
        self.leads_seq.update_value(|seq| ticket = seq.begin());
        spawn_local(async move {
            match ctx.api().list_leads().await {
                Ok(list) => {
                    let mut fresh = false;
                    ctx.leads_seq.update_value(|seq| fresh = seq.accept(ticket));
                    if !fresh {
                        log::debug!("dropping stale lead list (request #{})", ticket);
                        return;
                    }
                    log::debug!("loaded {} leads from {:?}", list.leads.len(), list.source);
                    if let Some(lost) = store_replace_leads(&ctx.store, list.leads, list.source) {
                        log::warn!("closing inline edit: {:?}", lost);
                        ctx.notify(ToastKind::Error, lost.message());
                    }
                }
                Err(e) => {
                    log::error!("Error loading leads: {}", e);
                    ctx.notify(ToastKind::Error, "Error loading leads");
                }
            }
        });
    }

    /// Fetch the counters; failures are logged only
    pub fn load_stats(&self) {
        let ctx = *self;
        let mut ticket = 0;
        self.stats_seq.update_value(|seq| ticket = seq.begin());
        spawn_local(async move {
            match ctx.api().get_stats().await {
                Ok(stats) => {
                    let mut fresh = false;
                    ctx.stats_seq.update_value(|seq| fresh = seq.accept(ticket));
                    if fresh {
                        ctx.store.stats().set(stats);
                    } else {
                        log::debug!("dropping stale stats (request #{})", ticket);
                    }
                }
                Err(e) => log::error!("Error loading stats: {}", e),
            }
        });
    }

    pub fn reload(&self) {
        self.load_leads();
        self.load_stats();
    }

    /// Manual refresh from the header button
    pub fn refresh(&self) {
        self.notify(ToastKind::Success, "🔄 Refreshing data...");
        self.reload();
    }

    pub fn show_tab(&self, tab: Tab) {
        self.store.active_tab().set(tab);
        if tab == Tab::ViewLeads {
            self.load_leads();
        }
    }

    // ========================
    // Toasts
    // ========================

    /// Show a toast, replacing any current one, and dismiss it after the configured delay
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let ctx = *self;
        let mut id = 0;
        self.toast_seq.update_value(|seq| {
            *seq += 1;
            id = *seq;
        });
        self.store.toast().set(Some(Toast { id, message: message.into(), kind }));

        let delay = self.config().toast_duration.as_millis() as u32;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            ctx.store.toast().update(|toast| {
                if toast.as_ref().is_some_and(|t| t.id == id) {
                    *toast = None;
                }
            });
        });
    }

    // ========================
    // Mutations
    // ========================

    /// Apply the follow-up of a finished mutation
    fn finish(&self, kind: Mutation, result: &Result<(), ApiError>) -> FollowUp {
        if let Err(e) = result {
            log::error!("{:?} failed: {}", kind, e);
        }
        let follow = after_mutation(kind, result);
        if follow.end_edit {
            self.cancel_edit();
        }
        if let Some((toast_kind, message)) = &follow.toast {
            self.notify(*toast_kind, message.clone());
        }
        if follow.reload {
            self.reload();
        }
        follow
    }

    /// Submit the add form; `on_success` runs after the lead is accepted
    pub fn add_lead(&self, form: LeadForm, on_success: impl FnOnce() + 'static) {
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.api().create_lead(&form).await;
            if ctx.finish(Mutation::Add, &result).clear_form {
                storage::save_username(&ctx.config().username_key, &form.added_by);
                on_success();
            }
        });
    }

    /// Flip the Important marker; the list is reloaded only on success
    pub fn toggle_star(&self, key: LeadKey) {
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.api().toggle_star(&key).await;
            ctx.finish(Mutation::ToggleStar, &result);
        });
    }

    /// Delete a lead; callers confirm with the user first
    pub fn delete_lead(&self, key: LeadKey) {
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.api().delete_lead(&key).await;
            ctx.finish(Mutation::Delete, &result);
        });
    }

    // ========================
    // Inline Edit
    // ========================

    /// Put a row into edit mode, abandoning any other row's draft
    pub fn start_edit(&self, row_num: usize, lead: &Lead) {
        let session = EditSession::start(row_num, lead);
        let key = session.key.clone();
        self.store.editing().set(Some(session));

        let ctx = *self;
        spawn_local(async move {
            match ctx.api().get_lead(&key).await {
                Ok(latest) => ctx.store.editing().update(|editing| {
                    if let Some(session) = editing.as_mut().filter(|s| s.key == key && s.accepts(&latest)) {
                        session.refresh(&latest);
                    }
                }),
                Err(e) => log::debug!("using cached copy of {:?} for edit: {}", key, e),
            }
        });
    }

    /// Leave edit mode; the row renders again from the cached record
    pub fn cancel_edit(&self) {
        self.store.editing().set(None);
    }

    pub fn save_edit(&self) {
        let Some(session) = self.store.editing().get_untracked() else { return };
        let ctx = *self;
        spawn_local(async move {
            let result = ctx.api().update_lead(&session.key, &session.draft).await;
            ctx.finish(Mutation::Update, &result);
        });
    }
}
