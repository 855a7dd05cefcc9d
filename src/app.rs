//! Lead Board App
//!
//! Root component: header, counters, tabs, and the polling timers.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LeadTable, NewLeadForm, StatsBar, TabBar, TitleBar, ToastView};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::store::{AppStateStoreFields, Tab};

/// Run `tick` every `every`, forever; never synchronized with user-triggered loads
fn start_polling(every: Duration, tick: impl Fn() + 'static) {
    let millis = every.as_millis() as u32;
    spawn_local(async move {
        loop {
            TimeoutFuture::new(millis).await;
            tick();
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    log::info!("lead board talking to {}", config.api_base);

    let ctx = AppContext::new(config.clone());
    provide_context(ctx);

    ctx.reload();
    start_polling(config.stats_interval, move || ctx.load_stats());
    start_polling(config.leads_interval, move || ctx.load_leads());

    // Both tabs stay mounted so a half-filled form survives switching
    let tab_class = move |tab: Tab| {
        if ctx.store.active_tab().get() == tab { "tab-content active" } else { "tab-content" }
    };

    view! {
        <div class="container">
            <TitleBar />
            <StatsBar />
            <TabBar />
            <section class=move || tab_class(Tab::AddLead)>
                <NewLeadForm />
            </section>
            <section class=move || tab_class(Tab::ViewLeads)>
                <LeadTable />
            </section>
            <ToastView />
        </div>
    }
}
