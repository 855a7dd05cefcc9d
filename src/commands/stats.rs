//! Stats Commands

use crate::error::ApiError;
use crate::models::Stats;
use super::{read_json, Api};

impl Api {
    /// `GET /api/stats` (bare object, no envelope)
    pub async fn get_stats(&self) -> Result<Stats, ApiError> {
        let response = self.http.get(self.url("/api/stats")).send().await?;
        read_json(response).await
    }
}
