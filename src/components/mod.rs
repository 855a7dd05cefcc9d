//! UI Components
//!
//! Reusable Leptos components.

mod title_bar;
mod stats_bar;
mod tab_bar;
mod new_lead_form;
mod status_select;
mod lead_table;
mod lead_row;
mod delete_confirm_button;
mod toast;

pub use title_bar::TitleBar;
pub use stats_bar::StatsBar;
pub use tab_bar::TabBar;
pub use new_lead_form::NewLeadForm;
pub use status_select::StatusSelect;
pub use lead_table::LeadTable;
pub use lead_row::LeadRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use toast::ToastView;
