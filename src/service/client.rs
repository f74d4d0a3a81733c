//! Blocking client for the remote analysis service.

use std::thread;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::error::{Error, Result};
use crate::service::schema::{AnalyzeOperation, AnalyzeResult, OperationStatus};

/// Analysis model used when none is specified.
pub const DEFAULT_MODEL: &str = "prebuilt-document";

const API_VERSION: &str = "2023-07-31";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION: &str = "operation-location";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Client for the document analysis REST API.
///
/// Drives a single synchronous request/poll cycle per call: the document
/// bytes are posted to the analyze endpoint, then the returned operation
/// is polled until it reaches a terminal status. There is no retry or
/// backoff; any failure is terminal for the invocation.
#[derive(Debug)]
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
    key: String,
    model_id: String,
    poll_interval: Duration,
}

impl AnalysisClient {
    /// Create a client for the default analysis model.
    pub fn new(endpoint: &str, key: &str) -> Result<Self> {
        Self::with_model(endpoint, key, DEFAULT_MODEL)
    }

    /// Create a client for a specific analysis model.
    pub fn with_model(endpoint: &str, key: &str, model_id: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .map_err(|e| Error::ClientInit(format!("invalid endpoint '{endpoint}': {e}")))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::ClientInit(format!(
                "invalid endpoint '{endpoint}': expected an http(s) URL"
            )));
        }

        let http = Client::builder()
            .build()
            .map_err(|e| Error::ClientInit(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
            model_id: model_id.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Set the delay between status probes while an operation runs.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// The model this client analyzes with.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Analyze a document and return the raw result.
    ///
    /// Blocks until the service reports a terminal status. The operation
    /// poll respects whatever timeout the HTTP transport imposes; the
    /// client itself does not bound the overall analysis duration.
    pub fn analyze(&self, document: &[u8]) -> Result<AnalyzeResult> {
        let url = format!(
            "{}/formrecognizer/documentModels/{}:analyze?api-version={}",
            self.endpoint, self.model_id, API_VERSION
        );

        debug!("submitting {} bytes to {}", document.len(), url);
        let response = self
            .http
            .post(&url)
            .header(KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(document.to_vec())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Analysis(format!(
                "analyze request rejected: HTTP {status}: {body}"
            )));
        }

        let operation_url = response
            .headers()
            .get(OPERATION_LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .ok_or_else(|| {
                Error::Analysis("service response is missing the operation location".into())
            })?;

        self.poll(&operation_url)
    }

    fn poll(&self, operation_url: &str) -> Result<AnalyzeResult> {
        loop {
            thread::sleep(self.poll_interval);

            let operation: AnalyzeOperation = self
                .http
                .get(operation_url)
                .header(KEY_HEADER, &self.key)
                .send()?
                .error_for_status()
                .map_err(|e| Error::Analysis(format!("operation poll failed: {e}")))?
                .json()
                .map_err(|e| Error::Analysis(format!("malformed operation payload: {e}")))?;

            debug!("operation status: {:?}", operation.status);
            match operation.status {
                OperationStatus::Succeeded => {
                    return operation.analyze_result.ok_or_else(|| {
                        Error::Analysis("operation succeeded without a result payload".into())
                    });
                }
                OperationStatus::Failed => {
                    let detail = operation
                        .error
                        .map(|e| format!("{}: {}", e.code, e.message))
                        .unwrap_or_else(|| "no error detail reported".into());
                    return Err(Error::Analysis(detail));
                }
                OperationStatus::NotStarted | OperationStatus::Running => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_endpoint() {
        let err = AnalysisClient::new("not a url", "key").unwrap_err();
        assert!(matches!(err, Error::ClientInit(_)));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let err = AnalysisClient::new("ftp://example.com", "key").unwrap_err();
        assert!(matches!(err, Error::ClientInit(_)));
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let client = AnalysisClient::new("https://example.cognitiveservices.azure.com/", "key")
            .unwrap();
        assert_eq!(
            client.endpoint,
            "https://example.cognitiveservices.azure.com"
        );
        assert_eq!(client.model_id(), DEFAULT_MODEL);
    }
}
