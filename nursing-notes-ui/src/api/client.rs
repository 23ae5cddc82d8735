//! HTTP API Client
//!
//! Functions for communicating with the Nursing Notes REST API.

use std::fmt;

use gloo_net::http::{Request, Response};
use nursing_notes::notes::NoteRecord;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

/// Local storage key holding an alternative API base URL
const API_BASE_KEY: &str = "nursing_notes_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteRecord>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TemplateInfo {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateInfo>,
    #[serde(default)]
    pub summarizer_available: bool,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SummaryResult {
    pub patient_id: String,
    pub template_label: String,
    pub model: String,
    pub summary: String,
    pub record_count: usize,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// A failed API call; `code` is the server's error code when it sent one
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub code: Option<String>,
    pub message: String,
}

impl ApiFailure {
    fn local(message: String) -> Self {
        Self { code: None, message }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ApiErrorResponse> for ApiFailure {
    fn from(body: ApiErrorResponse) -> Self {
        Self {
            code: body.error.code,
            message: body.error.message,
        }
    }
}

// ============ API Functions ============

/// Fetch all note records
pub async fn fetch_notes() -> Result<Vec<NoteRecord>, String> {
    let response = Request::get(&format!("{}/notes", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let result: NoteListResponse = read_json(response).await.map_err(|e| e.to_string())?;
    Ok(result.notes)
}

/// Fetch the summary templates
pub async fn fetch_templates() -> Result<TemplateListResponse, String> {
    let response = Request::get(&format!("{}/templates", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await.map_err(|e| e.to_string())
}

/// Generate a summary for one patient
pub async fn generate_summary(
    patient_id: &str,
    template: &str,
) -> Result<SummaryResult, ApiFailure> {
    #[derive(serde::Serialize)]
    struct SummaryRequest<'a> {
        template: &'a str,
    }

    let id = String::from(js_sys::encode_uri_component(patient_id));
    let url = format!("{}/patients/{}/summary", get_api_base(), id);

    let response = Request::post(&url)
        .json(&SummaryRequest { template })
        .map_err(|e| ApiFailure::local(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiFailure::local(format!("Network error: {}", e)))?;

    read_json(response).await
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiErrorResponse>().await {
            Ok(body) => body.into(),
            Err(_) => ApiFailure::local(format!("Request failed ({})", status)),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiFailure::local(format!("Parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://ward-3:8082/api/v1/ "), "http://ward-3:8082/api/v1");
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }

    #[test]
    fn test_error_body_shape() {
        let json = r#"{"error":{"code":"NO_DATA","message":"Summary error: no records"},"request_id":"x"}"#;
        let failure = ApiFailure::from(serde_json::from_str::<ApiErrorResponse>(json).unwrap());
        assert_eq!(failure.code.as_deref(), Some("NO_DATA"));
        assert_eq!(failure.to_string(), "Summary error: no records");
    }

    #[test]
    fn test_error_body_without_code() {
        let json = r#"{"error":{"message":"gateway down"}}"#;
        let failure = ApiFailure::from(serde_json::from_str::<ApiErrorResponse>(json).unwrap());
        assert_eq!(failure.code, None);
    }

    #[test]
    fn test_note_list_accepts_sparse_records() {
        let json = r#"{"notes":[{"patient_name":"王小明"},{}],"total":2}"#;
        let list: NoteListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.notes.len(), 2);
        assert_eq!(list.notes[1], NoteRecord::default());
    }
}
