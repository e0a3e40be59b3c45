//! Blocking client for the three remote endpoints: file upload, question
//! answering, and flow creation/execution.
//!
//! Calls are independent of each other: no two requests are coordinated,
//! there is no retry or cancellation, and a failed call never blocks
//! further local graph edits.

use std::path::Path;

use log::{debug, info};
use serde_json::json;

use crate::error::ClientError;
use crate::flow::ApiFlowRequest;

/// Target URLs for the remote service.
///
/// The defaults match the reference deployment on localhost; every field
/// can be overridden so the client is not tied to one machine.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Flow-creation / execution endpoint.
    pub create_api: String,
    /// Multipart file upload endpoint.
    pub upload: String,
    /// Question-answering endpoint.
    pub ask: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            create_api: "http://localhost:8000/createapi".to_string(),
            upload: "http://127.0.0.1:5000/api/upload_pdf".to_string(),
            ask: "http://127.0.0.1:5000/api/ask".to_string(),
        }
    }
}

/// Client for submitting assembled flows and their supporting requests.
pub struct FlowClient {
    http: reqwest::blocking::Client,
    endpoints: Endpoints,
}

impl FlowClient {
    /// A client against the default localhost endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Uploads a single file as a multipart form. The response body is an
    /// opaque success payload: it is logged and handed back untouched.
    pub fn upload_file(&self, path: &Path) -> Result<String, ClientError> {
        let form = reqwest::blocking::multipart::Form::new()
            .file("file", path)
            .map_err(|e| ClientError::UploadFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let response = self
            .http
            .post(&self.endpoints.upload)
            .multipart(form)
            .send()?;
        let body = response.text()?;
        info!("Upload response: {}", body);
        Ok(body)
    }

    /// Posts `{ "query": ... }` and extracts the `answer.result` string
    /// from the response.
    pub fn ask(&self, query: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.endpoints.ask)
            .json(&json!({ "query": query }))
            .send()?;
        let body: serde_json::Value = response.json()?;

        body.get("answer")
            .and_then(|answer| answer.get("result"))
            .and_then(|result| result.as_str())
            .map(str::to_string)
            .ok_or_else(|| ClientError::MalformedResponse {
                url: self.endpoints.ask.clone(),
                message: "missing 'answer.result' field".to_string(),
            })
    }

    /// Posts an assembled API specification to the flow-creation endpoint.
    /// Non-2xx responses are turned into an error carrying the status and
    /// the raw body text; success returns the `result` payload.
    pub fn create_api(&self, request: &ApiFlowRequest) -> Result<serde_json::Value, ClientError> {
        if let Ok(payload) = serde_json::to_string_pretty(request) {
            debug!("Submitting flow request: {}", payload);
        }

        let response = self
            .http
            .post(&self.endpoints.create_api)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json()?;
        body.get("result")
            .cloned()
            .ok_or_else(|| ClientError::MalformedResponse {
                url: self.endpoints.create_api.clone(),
                message: "missing 'result' field".to_string(),
            })
    }
}

impl Default for FlowClient {
    fn default() -> Self {
        Self::new()
    }
}
