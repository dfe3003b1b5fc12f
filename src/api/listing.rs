//! Listing Endpoints
//!
//! Per-user form lists for the landing view.

use form_schema::backend::wire::{parse_answered_count, parse_form_list, FormSummary};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn list_published(&self) -> ApiResult<Vec<FormSummary>> {
        let path = format!("/api/form/list/published/{}", self.config().user_id);
        Ok(parse_form_list(self.get_json(&path).await?)?)
    }

    pub async fn answered_count(&self) -> ApiResult<usize> {
        let path = format!("/api/form/answered/{}", self.config().user_id);
        Ok(parse_answered_count(self.get_json(&path).await?)?)
    }
}
