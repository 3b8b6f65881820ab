//! GraphQL client for the CMS.
//!
//! DESIGN
//! ======
//! A request passes three stages in order: error logging, auth-header
//! injection, HTTP transport. The logging stage only observes; it never
//! rewrites the request or the response. Every request is sent uncached, and
//! responses keep partial `data` next to `errors` (error policy "all") so
//! callers decide what a partial result means.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::CmsError;
use crate::config::CmsTimeouts;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<SourceLocation>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    headers: HeaderMap,
}

impl GraphqlClient {
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(endpoint: String, api_key: &str, timeouts: CmsTimeouts) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CmsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint, headers: link_headers(api_key)? })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one operation through the link chain.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures or undecodable bodies.
    /// GraphQL-level errors come back inside `GraphqlResponse::errors`.
    pub async fn execute<V, T>(&self, request: &GraphqlRequest<'_, V>) -> Result<GraphqlResponse<T>, CmsError>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        let result = self.transport(request).await;
        log_outcome(request.operation_name, &result);
        result
    }

    async fn transport<V, T>(&self, request: &GraphqlRequest<'_, V>) -> Result<GraphqlResponse<T>, CmsError>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        parse_response(status, &text)
    }
}

/// Headers attached by the auth stage.
pub(crate) fn link_headers(api_key: &str) -> Result<HeaderMap, CmsError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    if !api_key.is_empty() {
        let value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| CmsError::InvalidApiKey)?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// Decode a body under error policy "all": any body shaped like a GraphQL
/// response is returned, whatever the HTTP status.
pub(crate) fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<GraphqlResponse<T>, CmsError> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<GraphqlResponse<T>>(body) {
        Ok(parsed) if success || parsed.data.is_some() || parsed.has_errors() => Ok(parsed),
        Ok(_) => Err(CmsError::Response { status, body: body.to_owned() }),
        Err(_) if !success => Err(CmsError::Response { status, body: body.to_owned() }),
        Err(e) => Err(CmsError::Parse(e.to_string())),
    }
}

// =============================================================================
// ERROR LOGGING STAGE
// =============================================================================

fn log_outcome<T>(operation: &str, result: &Result<GraphqlResponse<T>, CmsError>) {
    match result {
        Ok(response) => {
            for err in &response.errors {
                tracing::warn!(operation, "{}", describe_graphql_error(err));
            }
        }
        Err(err) => tracing::error!(operation, error = %err, "[Network error]"),
    }
}

pub(crate) fn describe_graphql_error(err: &GraphqlError) -> String {
    let locations = err
        .locations
        .iter()
        .map(|l| format!("{}:{}", l.line, l.column))
        .collect::<Vec<_>>()
        .join(",");
    let path = err
        .path
        .iter()
        .map(|seg| match seg {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".");
    format!("[GraphQL error]: Message: {}, Location: {locations}, Path: {path}", err.message)
}

#[cfg(test)]
#[path = "graphql_test.rs"]
mod tests;
