//! New Lead Form Component
//!
//! Form for creating leads; remembers who is adding them.

use leptos::prelude::*;

use crate::components::StatusSelect;
use crate::context::use_app_context;
use crate::models::{LeadField, LeadForm};
use crate::storage;

/// Single labelled input bound to one form field
#[component]
fn FormInput(
    form: RwSignal<LeadForm>,
    field: LeadField,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let label = if required { format!("{} *", field.label()) } else { field.label().to_string() };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                name=field.param()
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Multi-line input for the free-text notes
#[component]
fn FormNotes(form: RwSignal<LeadForm>, field: LeadField) -> impl IntoView {
    view! {
        <label class="form-field wide">
            <span class="form-label">{field.label()}</span>
            <textarea
                name=field.param()
                rows="3"
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

/// Form for adding a lead
#[component]
pub fn NewLeadForm() -> impl IntoView {
    let ctx = use_app_context();
    let username_key = ctx.config().username_key;

    let blank_form = move || LeadForm::for_user(storage::load_username(&username_key));
    let form = RwSignal::new(blank_form());

    let on_submit = {
        let blank_form = blank_form.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let blank_form = blank_form.clone();
            // On failure the form keeps what was typed
            ctx.add_lead(form.get_untracked(), move || form.set(blank_form()));
        }
    };

    view! {
        <form class="add-lead-form" on:submit=on_submit>
            <div class="form-grid">
                <FormInput form=form field=LeadField::Institution required=true placeholder="e.g. Acme University" />
                <FormInput form=form field=LeadField::ContactPerson />
                <FormInput form=form field=LeadField::Phone input_type="tel" required=true />
                <FormInput form=form field=LeadField::Email input_type="email" />
                <label class="form-field">
                    <span class="form-label">"Status"</span>
                    <StatusSelect
                        value=Signal::derive(move || form.with(|f| f.status.clone()))
                        on_change=move |status| form.update(|f| f.set(LeadField::Status, status))
                    />
                </label>
                <FormInput form=form field=LeadField::FollowupDate input_type="date" />
                <FormNotes form=form field=LeadField::Requirements />
                <FormNotes form=form field=LeadField::ProposalShared />
                <FormNotes form=form field=LeadField::Remarks />
                <FormInput form=form field=LeadField::AddedBy placeholder="Your name" />
            </div>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary">"💾 Save Lead"</button>
                <button type="button" class="btn" on:click=move |_| form.set(blank_form())>
                    "Clear"
                </button>
            </div>
        </form>
    }
}
