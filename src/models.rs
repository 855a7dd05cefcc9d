//! Frontend Models
//!
//! Data structures matching the lead API.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Lead record as returned by `GET /api/leads`
///
/// Column names are the human labels used by the sheet backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Stable identifier, when the backend issues one
    #[serde(default, alias = "ID", skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(rename = "Institution", default, deserialize_with = "lenient_string")]
    pub institution: String,
    #[serde(rename = "Contact Person", default, deserialize_with = "lenient_string")]
    pub contact_person: String,
    #[serde(rename = "Phone", default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(rename = "Email", default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(rename = "Status", default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(rename = "Follow-up Date", default, deserialize_with = "lenient_string")]
    pub followup_date: String,
    #[serde(rename = "Requirements", default, deserialize_with = "lenient_string")]
    pub requirements: String,
    #[serde(rename = "Proposal Shared", default, deserialize_with = "lenient_string")]
    pub proposal_shared: String,
    #[serde(rename = "Remarks", default, deserialize_with = "lenient_string")]
    pub remarks: String,
    #[serde(rename = "Added By", default, deserialize_with = "lenient_string")]
    pub added_by: String,
    #[serde(rename = "Important", default, deserialize_with = "lenient_string")]
    pub important: String,
    /// Columns the client does not model (e.g. `Timestamp`)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Lead {
    pub fn is_important(&self) -> bool {
        !self.important.trim().is_empty()
    }

    /// Value of an editable column
    pub fn field(&self, field: LeadField) -> &str {
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

    /// String form of every value in the record, unknown columns included
    pub fn values(&self) -> impl Iterator<Item = String> + '_ {
        let known = LeadField::ALL
            .iter()
            .map(|f| self.field(*f).to_string())
            .chain(std::iter::once(self.important.clone()))
            .chain(self.id.clone());
        let extra = self.extra.values().map(value_to_string);
        known.chain(extra)
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let s = lenient_string(deserializer)?;
    Ok(if s.is_empty() { None } else { Some(s) })
}

/// Editable lead columns, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Institution,
    ContactPerson,
    Phone,
    Email,
    Status,
    FollowupDate,
    Requirements,
    ProposalShared,
    Remarks,
    AddedBy,
}

impl LeadField {
    pub const ALL: [LeadField; 10] = [
        LeadField::Institution,
        LeadField::ContactPerson,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Status,
        LeadField::FollowupDate,
        LeadField::Requirements,
        LeadField::ProposalShared,
        LeadField::Remarks,
        LeadField::AddedBy,
    ];

    /// Column label used by the list endpoint
    pub fn label(self) -> &'static str {
        match self {
            LeadField::Institution => "Institution",
            LeadField::ContactPerson => "Contact Person",
            LeadField::Phone => "Phone",
            LeadField::Email => "Email",
            LeadField::Status => "Status",
            LeadField::FollowupDate => "Follow-up Date",
            LeadField::Requirements => "Requirements",
            LeadField::ProposalShared => "Proposal Shared",
            LeadField::Remarks => "Remarks",
            LeadField::AddedBy => "Added By",
        }
    }

    /// Form parameter name used by create/update
    pub fn param(self) -> &'static str {
        match self {
            LeadField::Institution => "institution",
            LeadField::ContactPerson => "contact_person",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::Status => "status",
            LeadField::FollowupDate => "followup_date",
            LeadField::Requirements => "requirements",
            LeadField::ProposalShared => "proposal_shared",
            LeadField::Remarks => "remarks",
            LeadField::AddedBy => "added_by",
        }
    }

    /// Input widget used when the field is edited inline
    pub fn input_kind(self) -> InputKind {
        match self {
            LeadField::Status => InputKind::StatusSelect,
            LeadField::FollowupDate => InputKind::Date,
            LeadField::Requirements | LeadField::ProposalShared | LeadField::Remarks => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    TextArea,
    StatusSelect,
}

/// Pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeadStatus {
    #[default]
    NewLead,
    Contacted,
    Interested,
    ProposalSent,
    Negotiating,
    ClosedWon,
    ClosedLost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 7] = [
        LeadStatus::NewLead,
        LeadStatus::Contacted,
        LeadStatus::Interested,
        LeadStatus::ProposalSent,
        LeadStatus::Negotiating,
        LeadStatus::ClosedWon,
        LeadStatus::ClosedLost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::NewLead => "New Lead",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Interested => "Interested",
            LeadStatus::ProposalSent => "Proposal Sent",
            LeadStatus::Negotiating => "Negotiating",
            LeadStatus::ClosedWon => "Closed Won",
            LeadStatus::ClosedLost => "Closed Lost",
        }
    }

    /// CSS class of the status badge
    pub fn badge_class(self) -> &'static str {
        match self {
            LeadStatus::NewLead => "status-new",
            LeadStatus::Contacted => "status-contacted",
            LeadStatus::Interested => "status-interested",
            LeadStatus::ProposalSent => "status-proposal",
            LeadStatus::Negotiating => "status-negotiating",
            LeadStatus::ClosedWon => "status-won",
            LeadStatus::ClosedLost => "status-lost",
        }
    }

    pub fn parse(label: &str) -> Option<LeadStatus> {
        LeadStatus::ALL.iter().copied().find(|s| s.label() == label)
    }
}

/// Form payload for create (`POST /api/leads`) and update (`PUT /api/leads/{key}`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadForm {
    pub institution: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub followup_date: String,
    pub requirements: String,
    pub proposal_shared: String,
    pub remarks: String,
    pub added_by: String,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            institution: String::new(),
            contact_person: String::new(),
            phone: String::new(),
            email: String::new(),
            status: LeadStatus::NewLead.label().to_string(),
            followup_date: String::new(),
            requirements: String::new(),
            proposal_shared: String::new(),
            remarks: String::new(),
            added_by: String::new(),
        }
    }
}

impl LeadForm {
    /// Blank form with only the remembered user filled in
    pub fn for_user(username: Option<String>) -> Self {
        Self {
            added_by: username.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
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

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Institution => &mut self.institution,
            LeadField::ContactPerson => &mut self.contact_person,
            LeadField::Phone => &mut self.phone,
            LeadField::Email => &mut self.email,
            LeadField::Status => &mut self.status,
            LeadField::FollowupDate => &mut self.followup_date,
            LeadField::Requirements => &mut self.requirements,
            LeadField::ProposalShared => &mut self.proposal_shared,
            LeadField::Remarks => &mut self.remarks,
            LeadField::AddedBy => &mut self.added_by,
        };
        *slot = value;
    }

    /// Fields required before a create is sent
    pub fn missing_required(&self) -> Vec<&'static str> {
        [LeadField::Institution, LeadField::Phone]
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .map(LeadField::label)
            .collect()
    }
}

impl From<&Lead> for LeadForm {
    fn from(lead: &Lead) -> Self {
        let mut form = LeadForm::default();
        for field in LeadField::ALL {
            form.set(field, lead.field(field).to_string());
        }
        if form.status.is_empty() {
            form.status = LeadStatus::NewLead.label().to_string();
        }
        form
    }
}

/// Standard `{success, data, ...}` response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
}

/// Aggregate counters from `GET /api/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_calls: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub active_leads: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub important_leads: u64,
}

/// Counter that may arrive as `null`
fn count_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}
