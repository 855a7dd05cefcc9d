//! Lead Board Logic
//!
//! DOM-free helpers behind the lead table: addressing, filtering,
//! cell formatting, inline-edit sessions and response sequencing.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ApiError;
use crate::models::{Lead, LeadField, LeadForm, LeadStatus};

/// Number of columns in the lead table (star + 10 fields + actions)
pub const COLUMN_COUNT: usize = 12;

/// Placeholder shown for blank optional cells
pub const EMPTY_CELL: &str = "-";

const ELLIPSIS: &str = "...";

/// Characters escaped when an identifier is used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// ========================
// Addressing
// ========================

/// How a mutation addresses a lead
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeadKey {
    /// Backend-issued identifier
    Id(String),
    /// 1-based position in the last fetched list
    Row(usize),
}

impl LeadKey {
    pub fn for_lead(lead: &Lead, row_num: usize) -> Self {
        match &lead.id {
            Some(id) => LeadKey::Id(id.clone()),
            None => LeadKey::Row(row_num),
        }
    }

    pub fn path_segment(&self) -> String {
        match self {
            LeadKey::Id(id) => utf8_percent_encode(id, PATH_SEGMENT).to_string(),
            LeadKey::Row(row) => row.to_string(),
        }
    }
}

// ========================
// Filtering
// ========================

/// Leads matching `term`, paired with their row number in the full list
///
/// Case-insensitive substring match against every value of a record.
/// An empty term keeps everything.
pub fn filter_leads(leads: &[Lead], term: &str) -> Vec<(usize, Lead)> {
    let needle = term.to_lowercase();
    leads
        .iter()
        .enumerate()
        .filter(|(_, lead)| needle.is_empty() || lead.values().any(|v| v.to_lowercase().contains(&needle)))
        .map(|(i, lead)| (i + 1, lead.clone()))
        .collect()
}

// ========================
// Cell Formatting
// ========================

/// Cut `text` to `max` characters, appending `...` when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        return EMPTY_CELL.to_string();
    }
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() { placeholder.to_string() } else { text.to_string() }
}

/// Badge class for a raw status string; unknown values use the new-lead class
pub fn status_class(status: &str) -> &'static str {
    LeadStatus::parse(status).unwrap_or_default().badge_class()
}

/// Display text of one table row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub star: String,
    pub institution: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub status_class: &'static str,
    pub followup_date: String,
    pub requirements: String,
    pub proposal_shared: String,
    pub remarks: String,
    pub added_by: String,
}

impl From<&Lead> for RowView {
    fn from(lead: &Lead) -> Self {
        Self {
            star: lead.important.clone(),
            institution: lead.institution.clone(),
            contact_person: lead.contact_person.clone(),
            phone: lead.phone.clone(),
            email: or_placeholder(&lead.email, EMPTY_CELL),
            status: lead.status.clone(),
            status_class: status_class(&lead.status),
            followup_date: or_placeholder(&lead.followup_date, EMPTY_CELL),
            requirements: truncate(&lead.requirements, 50),
            proposal_shared: truncate(&lead.proposal_shared, 40),
            remarks: truncate(&lead.remarks, 50),
            added_by: or_placeholder(&lead.added_by, "Unknown"),
        }
    }
}

impl RowView {
    /// Text shown in the cell of an editable column
    pub fn cell(&self, field: LeadField) -> &str {
        match field {
            LeadField::Institution => &self.institution,
            LeadField::ContactPerson => &self.contact_person,
            LeadField::Phone => &self.phone,
            LeadField::Email => &self.email,
            LeadField::Status => &self.status,
            LeadField::FollowupDate => &self.followup_date,
            LeadField::Requirements => &self.requirements,
            LeadField::ProposalShared => &self.proposal_shared,
            LeadField::Remarks => &self.remarks,
            LeadField::AddedBy => &self.added_by,
        }
    }
}

// ========================
// Inline Edit
// ========================

/// The single row currently being edited inline
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub key: LeadKey,
    pub row_num: usize,
    /// Record as it was when editing started
    pub original: Lead,
    pub draft: LeadForm,
}

impl EditSession {
    pub fn start(row_num: usize, lead: &Lead) -> Self {
        Self {
            key: LeadKey::for_lead(lead, row_num),
            row_num,
            original: lead.clone(),
            draft: LeadForm::from(lead),
        }
    }

    /// Replace the draft with a fresher copy, unless the user already typed
    pub fn refresh(&mut self, lead: &Lead) {
        if !self.is_dirty() {
            self.original = lead.clone();
            self.draft = LeadForm::from(lead);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != LeadForm::from(&self.original)
    }

    pub fn is_row(&self, row_num: usize) -> bool {
        self.row_num == row_num
    }

    /// Whether `lead` is the record this session was opened on
    ///
    /// Row-addressed leads have no key of their own, so a row still holds the
    /// same record only while its timestamp, institution and phone match.
    pub fn accepts(&self, lead: &Lead) -> bool {
        match &self.key {
            LeadKey::Id(id) => lead.id.as_deref() == Some(id.as_str()),
            LeadKey::Row(_) => {
                lead.extra.get("Timestamp") == self.original.extra.get("Timestamp")
                    && lead.institution == self.original.institution
                    && lead.phone == self.original.phone
            }
        }
    }

    /// Find the edited record in a freshly fetched list
    pub fn locate<'a>(&self, leads: &'a [Lead]) -> Located<'a> {
        let found = match &self.key {
            LeadKey::Id(_) => leads.iter().enumerate().find(|(_, lead)| self.accepts(lead)),
            LeadKey::Row(row) => match row.checked_sub(1).and_then(|i| leads.get(i).map(|lead| (i, lead))) {
                Some((i, lead)) if !self.accepts(lead) => {
                    log::debug!("row {} now holds {:?}", i + 1, lead.institution);
                    return Located::Replaced;
                }
                other => other,
            },
        };
        match found {
            Some((i, lead)) => Located::Found(i + 1, lead),
            None => Located::Missing,
        }
    }
}

/// Where an edited record ended up after a reload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Located<'a> {
    Found(usize, &'a Lead),
    Missing,
    /// The row now holds a different record
    Replaced,
}

/// Why an open edit was closed by a reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditLost {
    Removed,
    RowChanged,
}

impl EditLost {
    pub fn message(self) -> &'static str {
        match self {
            EditLost::Removed => "❌ The lead you were editing was removed",
            EditLost::RowChanged => "❌ That row changed on the server, edit discarded",
        }
    }
}

/// Carry an open edit over to a freshly fetched list, closing it if its record is gone
pub fn carry_edit(editing: &mut Option<EditSession>, leads: &[Lead]) -> Option<EditLost> {
    let session = editing.as_mut()?;
    let lost = match session.locate(leads) {
        Located::Found(row_num, lead) => {
            session.row_num = row_num;
            session.refresh(lead);
            return None;
        }
        Located::Missing => EditLost::Removed,
        Located::Replaced => EditLost::RowChanged,
    };
    *editing = None;
    Some(lost)
}

// ========================
// Confirmation
// ========================

/// Two-step delete prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePrompt {
    #[default]
    Idle,
    Asking,
}

impl DeletePrompt {
    /// Answer the prompt; yields the lead to delete only on an explicit yes
    pub fn answer(&mut self, key: &LeadKey, yes: bool) -> Option<LeadKey> {
        let asked = *self == DeletePrompt::Asking;
        *self = DeletePrompt::Idle;
        (asked && yes).then(|| key.clone())
    }
}

/// Prompt text naming the lead about to be deleted
pub fn delete_question(institution: &str) -> String {
    if institution.trim().is_empty() {
        "Delete this lead?".to_string()
    } else {
        format!("Delete {}?", institution.trim())
    }
}

// ========================
// Mutation Outcomes
// ========================

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Update,
    Delete,
    ToggleStar,
}

/// What the board does once a mutation has answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    /// Re-fetch leads and stats
    pub reload: bool,
    pub toast: Option<(ToastKind, String)>,
    /// Reset the add form and remember its user
    pub clear_form: bool,
    /// Close the inline editor
    pub end_edit: bool,
}

pub fn after_mutation(kind: Mutation, result: &Result<(), ApiError>) -> FollowUp {
    let ok = result.is_ok();
    let toast = match (kind, result) {
        (Mutation::Add, Ok(())) => Some((ToastKind::Success, "✅ Lead added successfully!".to_string())),
        (Mutation::Add, Err(e)) => Some((ToastKind::Error, e.toast_text("adding lead"))),
        (Mutation::Update, Ok(())) => Some((ToastKind::Success, "✅ Lead updated successfully!".to_string())),
        (Mutation::Update, Err(e)) => Some((ToastKind::Error, e.toast_text("updating lead"))),
        (Mutation::Delete, Ok(())) => Some((ToastKind::Success, "Lead deleted successfully".to_string())),
        (Mutation::Delete, Err(_)) => Some((ToastKind::Error, "Error deleting lead".to_string())),
        (Mutation::ToggleStar, Ok(())) => None,
        (Mutation::ToggleStar, Err(e)) => Some((ToastKind::Error, e.toast_text("toggling star"))),
    };
    FollowUp {
        // A failed save reloads so the row shows server state again
        reload: ok || kind == Mutation::Update,
        toast,
        clear_form: ok && kind == Mutation::Add,
        end_edit: kind == Mutation::Update,
    }
}

// ========================
// Response Sequencing
// ========================

/// Monotonic tickets so an older response never overwrites a newer one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSequence {
    issued: u64,
    applied: u64,
}

impl FetchSequence {
    /// Ticket for a request about to be sent
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the response for `ticket` may be applied; records it if so
    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lead(institution: &str, status: &str) -> Lead {
        Lead {
            institution: institution.to_string(),
            contact_person: format!("Contact at {}", institution),
            phone: "555-0000".to_string(),
            status: status.to_string(),
            ..Lead::default()
        }
    }

    #[test]
    fn test_filter_empty_term_keeps_all() {
        let leads = vec![make_lead("Acme Univ", "Contacted"), make_lead("Beta College", "New Lead")];
        let rows = filter_leads(&leads, "");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (1, leads[0].clone()));
        assert_eq!(rows[1], (2, leads[1].clone()));
    }

    #[test]
    fn test_filter_case_insensitive_any_field() {
        let mut beta = make_lead("Beta College", "New Lead");
        beta.remarks = "Wants DRONE kits".to_string();
        let leads = vec![make_lead("Acme Univ", "Contacted"), beta, make_lead("Gamma School", "Closed Won")];

        let rows = filter_leads(&leads, "drone");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 2);

        let rows = filter_leads(&leads, "CLOSED");
        assert_eq!(rows.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![3]);

        assert!(filter_leads(&leads, "zzz").is_empty());
    }

    #[test]
    fn test_filter_keeps_full_list_row_numbers() {
        let leads = vec![make_lead("Acme", "New Lead"), make_lead("Beta", "New Lead"), make_lead("Acme West", "New Lead")];
        let rows = filter_leads(&leads, "acme");
        assert_eq!(rows.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(leads.len(), 3);
    }

    #[test]
    fn test_truncate_lengths() {
        assert_eq!(truncate("", 50), "-");
        assert_eq!(truncate("short", 50), "short");

        let exact = "a".repeat(40);
        assert_eq!(truncate(&exact, 40), exact);

        let long = "b".repeat(41);
        let cut = truncate(&long, 40);
        assert_eq!(cut.chars().count(), 43);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "é".repeat(60);
        let cut = truncate(&text, 50);
        assert_eq!(cut.chars().count(), 53);
    }

    #[test]
    fn test_status_class_fallback() {
        assert_eq!(status_class("Negotiating"), "status-negotiating");
        assert_eq!(status_class("On Hold"), "status-new");
        assert_eq!(status_class(""), "status-new");
    }

    #[test]
    fn test_row_view_placeholders() {
        let lead = Lead {
            institution: "Acme Univ".to_string(),
            phone: "555-1111".to_string(),
            status: "New Lead".to_string(),
            ..Lead::default()
        };
        let row = RowView::from(&lead);
        assert_eq!(row.institution, "Acme Univ");
        assert_eq!(row.email, "-");
        assert_eq!(row.followup_date, "-");
        assert_eq!(row.requirements, "-");
        assert_eq!(row.added_by, "Unknown");
        assert_eq!(row.status, "New Lead");
        assert_eq!(row.status_class, "status-new");
        assert_eq!(row.star, "");
    }

    #[test]
    fn test_row_view_keeps_markup_as_text() {
        let lead = Lead {
            institution: "<script>alert(1)</script>".to_string(),
            remarks: "<b>bold</b>".to_string(),
            ..Lead::default()
        };
        let row = RowView::from(&lead);
        assert_eq!(row.institution, "<script>alert(1)</script>");
        assert_eq!(row.remarks, "<b>bold</b>");
    }

    #[test]
    fn test_row_view_truncation_caps() {
        let lead = Lead {
            requirements: "r".repeat(51),
            proposal_shared: "p".repeat(41),
            remarks: "m".repeat(50),
            ..Lead::default()
        };
        let row = RowView::from(&lead);
        assert_eq!(row.cell(LeadField::Requirements).len(), 53);
        assert_eq!(row.cell(LeadField::ProposalShared).len(), 43);
        assert_eq!(row.cell(LeadField::Remarks).len(), 50);
    }

    #[test]
    fn test_lead_key() {
        let mut lead = make_lead("Acme", "New Lead");
        assert_eq!(LeadKey::for_lead(&lead, 4), LeadKey::Row(4));
        assert_eq!(LeadKey::for_lead(&lead, 4).path_segment(), "4");

        lead.id = Some("lead/7 a".to_string());
        let key = LeadKey::for_lead(&lead, 4);
        assert_eq!(key, LeadKey::Id("lead/7 a".to_string()));
        assert_eq!(key.path_segment(), "lead%2F7%20a");
    }

    #[test]
    fn test_edit_session_refresh_respects_typing() {
        let lead = make_lead("Acme", "Contacted");
        let mut session = EditSession::start(2, &lead);
        assert!(session.is_row(2));
        assert!(!session.is_dirty());

        let mut fresher = lead.clone();
        fresher.remarks = "called back".to_string();
        session.refresh(&fresher);
        assert_eq!(session.draft.remarks, "called back");

        session.draft.set(LeadField::Email, "a@acme.edu".to_string());
        assert!(session.is_dirty());
        let mut newest = fresher.clone();
        newest.remarks = "overwritten".to_string();
        session.refresh(&newest);
        assert_eq!(session.draft.remarks, "called back");
        assert_eq!(session.draft.email, "a@acme.edu");
    }

    #[test]
    fn test_edit_session_locate() {
        let leads = vec![make_lead("Acme", "New Lead"), make_lead("Beta", "New Lead")];
        let session = EditSession::start(2, &leads[1]);
        assert_eq!(session.locate(&leads), Located::Found(2, &leads[1]));
        assert_eq!(session.locate(&leads[..1]), Located::Missing);

        let mut with_ids = leads.clone();
        with_ids[0].id = Some("a".into());
        with_ids[1].id = Some("b".into());
        let session = EditSession::start(2, &with_ids[1]);
        with_ids.swap(0, 1);
        assert_eq!(session.locate(&with_ids), Located::Found(1, &with_ids[0]));
    }

    #[test]
    fn test_row_edit_closed_when_row_shifts() {
        let leads = vec![make_lead("Acme", "New Lead"), make_lead("Beta", "New Lead"), make_lead("Gamma", "New Lead")];
        let mut session = EditSession::start(2, &leads[1]);
        session.draft.set(LeadField::Remarks, "call Friday".to_string());

        // Acme was deleted elsewhere; Gamma moved into row 2
        let after_delete = vec![leads[1].clone(), leads[2].clone()];
        assert_eq!(session.locate(&after_delete), Located::Replaced);

        let mut editing = Some(session);
        assert_eq!(carry_edit(&mut editing, &after_delete), Some(EditLost::RowChanged));
        assert_eq!(editing, None);
    }

    #[test]
    fn test_row_edit_closed_when_row_removed() {
        let leads = vec![make_lead("Acme", "New Lead"), make_lead("Beta", "New Lead")];
        let mut editing = Some(EditSession::start(2, &leads[1]));
        assert_eq!(carry_edit(&mut editing, &leads[..1]), Some(EditLost::Removed));
        assert_eq!(editing, None);
    }

    #[test]
    fn test_row_edit_kept_when_same_record() {
        let mut beta = make_lead("Beta", "New Lead");
        beta.extra.insert("Timestamp".into(), "2024-05-01 10:00:00".into());
        let leads = vec![make_lead("Acme", "New Lead"), beta.clone()];
        let mut editing = Some(EditSession::start(2, &leads[1]));

        let mut reloaded = leads.clone();
        reloaded[1].remarks = "updated elsewhere".to_string();
        assert_eq!(carry_edit(&mut editing, &reloaded), None);
        assert_eq!(editing.as_ref().map(|s| s.draft.remarks.as_str()), Some("updated elsewhere"));

        // Same institution and phone, different timestamp: another record
        let mut twin = beta.clone();
        twin.extra.insert("Timestamp".into(), "2024-06-02 09:00:00".into());
        assert_eq!(carry_edit(&mut editing, &[leads[0].clone(), twin]), Some(EditLost::RowChanged));
    }

    #[test]
    fn test_id_edit_follows_record() {
        let mut leads = vec![make_lead("Acme", "New Lead"), make_lead("Beta", "New Lead")];
        leads[0].id = Some("a".into());
        leads[1].id = Some("b".into());
        let mut editing = Some(EditSession::start(2, &leads[1]));

        assert_eq!(carry_edit(&mut editing, &leads[1..]), None);
        assert_eq!(editing.as_ref().map(|s| s.row_num), Some(1));
        assert_eq!(carry_edit(&mut editing, &leads[..1]), Some(EditLost::Removed));
    }

    #[test]
    fn test_delete_prompt_declined_yields_nothing() {
        let key = LeadKey::Row(3);
        let mut prompt = DeletePrompt::default();
        assert_eq!(prompt.answer(&key, true), None);

        prompt = DeletePrompt::Asking;
        assert_eq!(prompt.answer(&key, false), None);
        assert_eq!(prompt, DeletePrompt::Idle);

        prompt = DeletePrompt::Asking;
        assert_eq!(prompt.answer(&key, true), Some(LeadKey::Row(3)));
        assert_eq!(prompt, DeletePrompt::Idle);
    }

    #[test]
    fn test_delete_question() {
        assert_eq!(delete_question(" Acme Univ "), "Delete Acme Univ?");
        assert_eq!(delete_question(""), "Delete this lead?");
    }

    #[test]
    fn test_failed_star_toggle_does_not_reload() {
        let follow = after_mutation(Mutation::ToggleStar, &Err(ApiError::Status(500)));
        assert!(!follow.reload);
        assert_eq!(follow.toast.map(|(kind, _)| kind), Some(ToastKind::Error));

        let follow = after_mutation(Mutation::ToggleStar, &Ok(()));
        assert!(follow.reload);
        assert_eq!(follow.toast, None);
    }

    #[test]
    fn test_add_clears_form_only_on_success() {
        let follow = after_mutation(Mutation::Add, &Ok(()));
        assert!(follow.reload && follow.clear_form);
        assert_eq!(follow.toast, Some((ToastKind::Success, "✅ Lead added successfully!".to_string())));

        let follow = after_mutation(Mutation::Add, &Err(ApiError::Rejected("quota".into())));
        assert!(!follow.reload);
        assert!(!follow.clear_form);
        assert_eq!(follow.toast, Some((ToastKind::Error, "❌ Error adding lead".to_string())));

        let follow = after_mutation(Mutation::Add, &Err(ApiError::Validation("Missing: Phone".into())));
        assert_eq!(follow.toast, Some((ToastKind::Error, "❌ Missing: Phone".to_string())));
    }

    #[test]
    fn test_update_always_ends_edit_and_reloads() {
        for result in [Ok(()), Err(ApiError::Status(404))] {
            let follow = after_mutation(Mutation::Update, &result);
            assert!(follow.reload);
            assert!(follow.end_edit);
            assert!(!follow.clear_form);
        }
    }

    #[test]
    fn test_delete_outcomes() {
        let follow = after_mutation(Mutation::Delete, &Ok(()));
        assert!(follow.reload);
        assert_eq!(follow.toast.map(|(kind, _)| kind), Some(ToastKind::Success));

        let follow = after_mutation(Mutation::Delete, &Err(ApiError::Rejected("Invalid row number".into())));
        assert!(!follow.reload);
        assert!(!follow.end_edit);
        assert_eq!(follow.toast, Some((ToastKind::Error, "Error deleting lead".to_string())));
    }

    #[test]
    fn test_added_lead_renders_after_refetch() {
        let form = LeadForm {
            institution: "Acme Univ".to_string(),
            phone: "555-1111".to_string(),
            ..LeadForm::default()
        };

        // Backend stores the submitted params under its column labels
        let params = serde_json::to_value(&form).unwrap();
        let mut record = serde_json::Map::new();
        for field in LeadField::ALL {
            record.insert(field.label().to_string(), params[field.param()].clone());
        }
        record.insert("Important".to_string(), "".into());
        record.insert("Timestamp".to_string(), "2024-05-01 10:00:00".into());
        let body = serde_json::json!({ "success": true, "data": [record] }).to_string();

        let envelope: crate::models::ApiEnvelope<Vec<Lead>> = serde_json::from_str(&body).unwrap();
        let leads = envelope.data.unwrap();
        assert_eq!(LeadForm::from(&leads[0]), form);

        let row = RowView::from(&leads[0]);
        assert_eq!(row.institution, "Acme Univ");
        assert_eq!(row.phone, "555-1111");
        assert_eq!(row.email, "-");
        assert_eq!(row.status, "New Lead");
        assert_eq!(row.status_class, "status-new");
    }

    #[test]
    fn test_fetch_sequence_drops_stale() {
        let mut seq = FetchSequence::default();
        let first = seq.begin();
        let second = seq.begin();

        assert!(seq.accept(second));
        assert!(!seq.accept(first));

        let third = seq.begin();
        assert!(seq.accept(third));
    }
}
