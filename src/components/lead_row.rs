//! Lead Row Component
//!
//! One table row with star toggle, inline edit and delete.

use leptos::prelude::*;

use crate::board::{LeadKey, RowView};
use crate::components::{DeleteConfirmButton, StatusSelect};
use crate::context::{use_app_context, AppContext};
use crate::models::{InputKind, Lead, LeadField};
use crate::store::{store_set_draft_field, AppStateStoreFields};

/// Read-only cell content
fn display_cell(field: LeadField, row: &RowView) -> AnyView {
    let text = row.cell(field).to_string();
    match field {
        LeadField::Institution => view! { <strong>{text}</strong> }.into_any(),
        LeadField::Status => view! {
            <span class=format!("status-badge {}", row.status_class)>{text}</span>
        }.into_any(),
        LeadField::AddedBy => view! { <em>{text}</em> }.into_any(),
        _ => text.into_any(),
    }
}

/// Input bound to the edit draft
fn editor_cell(ctx: AppContext, field: LeadField) -> AnyView {
    let value = move || {
        ctx.store.editing().with(|editing| {
            editing
                .as_ref()
                .map(|session| session.draft.get(field).to_string())
                .unwrap_or_default()
        })
    };
    let set = move |v: String| store_set_draft_field(&ctx.store, field, v);

    match field.input_kind() {
        InputKind::StatusSelect => view! {
            <StatusSelect value=Signal::derive(value) on_change=set class="inline-edit-select" />
        }.into_any(),
        InputKind::Date => view! {
            <input
                type="date"
                class="inline-edit-input"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }.into_any(),
        InputKind::TextArea => view! {
            <textarea
                class="inline-edit-textarea"
                rows="2"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }.into_any(),
        InputKind::Text => view! {
            <input
                type="text"
                class="inline-edit-input"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }.into_any(),
    }
}

#[component]
pub fn LeadRow(row_num: usize, lead: Lead) -> impl IntoView {
    let ctx = use_app_context();
    let key = LeadKey::for_lead(&lead, row_num);
    let row = RowView::from(&lead);
    let star_class = if lead.is_important() { "star-cell starred" } else { "star-cell" };
    let lead = StoredValue::new(lead);

    let is_editing = Memo::new(move |_| {
        ctx.store
            .editing()
            .with(|editing| editing.as_ref().is_some_and(|session| session.is_row(row_num)))
    });

    let star_key = key.clone();
    let cells = LeadField::ALL.iter().map(|field| {
        let field = *field;
        let row = row.clone();
        view! {
            <td data-field=field.label()>
                {move || if is_editing.get() {
                    editor_cell(ctx, field)
                } else {
                    display_cell(field, &row)
                }}
            </td>
        }
    }).collect_view();

    view! {
        <tr
            id=format!("row-{}", row_num)
            class=move || if is_editing.get() { "editing-row" } else { "" }
        >
            <td
                class=star_class
                title="Toggle important"
                on:click=move |_| ctx.toggle_star(star_key.clone())
            >
                {row.star.clone()}
            </td>
            {cells}
            <td>
                <div class="action-buttons">
                    {move || if is_editing.get() {
                        view! {
                            <button class="btn btn-save" on:click=move |_| ctx.save_edit()>"💾 Save"</button>
                            <button class="btn-cancel" on:click=move |_| ctx.cancel_edit()>"❌"</button>
                        }.into_any()
                    } else {
                        let key = key.clone();
                        view! {
                            <button
                                class="btn-edit"
                                on:click=move |_| lead.with_value(|l| ctx.start_edit(row_num, l))
                            >
                                "✏️ Edit"
                            </button>
                            <DeleteConfirmButton
                                lead_name=lead.with_value(|l| l.institution.clone())
                                key=key
                                on_confirm=Callback::new(move |key: LeadKey| ctx.delete_lead(key))
                            />
                        }.into_any()
                    }}
                </div>
            </td>
        </tr>
    }
}
