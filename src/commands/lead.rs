//! Lead Commands
//!
//! Bindings for listing and mutating leads.

use serde_json::Value;

use crate::board::LeadKey;
use crate::error::ApiError;
use crate::models::{ApiEnvelope, Lead, LeadForm};
use super::{into_result, read_json, Api};

/// Result of `GET /api/leads`
#[derive(Debug, Clone, PartialEq)]
pub struct LeadList {
    pub leads: Vec<Lead>,
    /// Storage the backend served from (`google_sheets` / `memory`)
    pub source: Option<String>,
}

fn lead_path(key: &LeadKey) -> String {
    format!("/api/leads/{}", key.path_segment())
}

fn toggle_star_path(key: &LeadKey) -> String {
    format!("{}/toggle-star", lead_path(key))
}

impl Api {
    pub async fn list_leads(&self) -> Result<LeadList, ApiError> {
        let response = self.http.get(self.url("/api/leads")).send().await?;
        let envelope = into_result(read_json::<ApiEnvelope<Vec<Lead>>>(response).await?)?;
        Ok(LeadList {
            leads: envelope.data.unwrap_or_default(),
            source: envelope.source,
        })
    }

    pub async fn get_lead(&self, key: &LeadKey) -> Result<Lead, ApiError> {
        let response = self.http.get(self.url(&lead_path(key))).send().await?;
        let envelope = into_result(read_json::<ApiEnvelope<Lead>>(response).await?)?;
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("lead response without data".to_string()))
    }

    pub async fn create_lead(&self, form: &LeadForm) -> Result<(), ApiError> {
        let missing = form.missing_required();
        if !missing.is_empty() {
            return Err(ApiError::Validation(format!("Missing: {}", missing.join(", "))));
        }
        let response = self.http.post(self.url("/api/leads")).form(form).send().await?;
        into_result(read_json::<ApiEnvelope<Value>>(response).await?)?;
        Ok(())
    }

    pub async fn update_lead(&self, key: &LeadKey, form: &LeadForm) -> Result<(), ApiError> {
        let response = self.http.put(self.url(&lead_path(key))).form(form).send().await?;
        into_result(read_json::<ApiEnvelope<Value>>(response).await?)?;
        Ok(())
    }

    pub async fn delete_lead(&self, key: &LeadKey) -> Result<(), ApiError> {
        let response = self.http.delete(self.url(&lead_path(key))).send().await?;
        into_result(read_json::<ApiEnvelope<Value>>(response).await?)?;
        Ok(())
    }

    pub async fn toggle_star(&self, key: &LeadKey) -> Result<(), ApiError> {
        let response = self.http.post(self.url(&toggle_star_path(key))).send().await?;
        into_result(read_json::<ApiEnvelope<Value>>(response).await?)?;
        Ok(())
    }
}
