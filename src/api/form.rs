//! Form Endpoints
//!
//! Fetching, creating, publishing and answering a single form.

use form_schema::backend::to_backend_components;
use form_schema::backend::wire::{
    parse_answer_form, parse_created_id, parse_fetch_form, AnswerSubmission, CreateFormRequest,
};
use form_schema::Document;

use super::{ApiClient, ApiResult};

/// Body for `POST /api/form/create`
pub fn create_request(doc: &Document, user_id: &str) -> CreateFormRequest {
    CreateFormRequest {
        title: doc.title.clone(),
        user_id: user_id.to_string(),
        components: to_backend_components(doc),
    }
}

impl ApiClient {
    /// Load a form for editing
    pub async fn fetch_form(&self, form_id: i64) -> ApiResult<Document> {
        let body = self.get_json(&format!("/api/form/fetch/{}", form_id)).await?;
        let doc = parse_fetch_form(body)?.into_document();
        log::info!("[API] Fetched form {}: {} nodes", form_id, doc.len());
        Ok(doc)
    }

    /// Load a published form for answering
    pub async fn fetch_answer_form(&self, form_id: i64) -> ApiResult<Document> {
        let body = self.get_json(&format!("/api/form/answer/{}", form_id)).await?;
        let doc = parse_answer_form(body)?.into_document();
        log::info!("[API] Fetched answer form {}: {} nodes", form_id, doc.len());
        Ok(doc)
    }

    /// Save the document as a new form, returning its id
    pub async fn create_form(&self, doc: &Document) -> ApiResult<i64> {
        let request = create_request(doc, &self.config().user_id);
        log::info!("[API] Creating form '{}' with {} components", request.title, request.components.len());
        let body = self.post_json("/api/form/create", &request).await?;
        Ok(parse_created_id(body)?)
    }

    pub async fn publish_form(&self, form_id: i64) -> ApiResult<()> {
        self.get_json(&format!("/api/form/edit/publish/{}", form_id)).await?;
        log::info!("[API] Published form {}", form_id);
        Ok(())
    }

    pub async fn submit_answers(&self, form_id: i64, submission: &AnswerSubmission) -> ApiResult<()> {
        log::info!("[API] Submitting {} answers for form {}", submission.answers.len(), form_id);
        self.post_json(&format!("/api/form/answer/{}", form_id), submission).await?;
        Ok(())
    }
}
