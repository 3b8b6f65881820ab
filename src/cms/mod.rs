//! CMS adapter: GraphQL content queries, user lookup, and auth forwarding.
//!
//! DESIGN
//! ======
//! Handlers talk to the CMS only through the `CmsApi` trait so tests can
//! substitute a mock. `CmsClient` is the HTTP implementation: GraphQL for
//! content, REST for `users/me` and the auth plugin endpoints.

pub mod blog;
pub mod graphql;
pub mod users;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::config::Config;
use blog::{Blog, BlogsBySlug};
use graphql::{GraphqlClient, GraphqlResponse};
use users::User;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("API key is not a valid header value")]
    InvalidApiKey,
    #[error("CMS request failed: {0}")]
    Request(String),
    #[error("CMS response error: status {status}")]
    Response { status: u16, body: String },
    #[error("CMS response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// API SEAM
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Put,
}

impl Verb {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A request relayed unchanged to a CMS REST endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Forward<'a> {
    pub verb: Verb,
    /// API-relative path, e.g. `/auth/send-otp`.
    pub path: &'a str,
    pub bearer: Option<&'a str>,
    pub body: &'a [u8],
}

/// Upstream reply passed back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forwarded {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[async_trait::async_trait]
pub trait CmsApi: Send + Sync {
    /// Run `GetBlogBySlug`. Partial data and GraphQL errors are both returned.
    async fn blog_by_slug(&self, slug: &str) -> Result<GraphqlResponse<BlogsBySlug>, CmsError>;

    /// Resolve a bearer token to its user. `Ok(None)` means the CMS rejected it.
    async fn current_user(&self, token: &str) -> Result<Option<User>, CmsError>;

    /// Relay an auth-plugin call.
    async fn forward(&self, request: Forward<'_>) -> Result<Forwarded, CmsError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct CmsClient {
    http: reqwest::Client,
    graphql: GraphqlClient,
    config: Config,
}

impl CmsClient {
    /// # Errors
    ///
    /// Returns an error if the API key is not header-safe or an HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CmsError::HttpClientBuild(e.to_string()))?;
        let graphql = GraphqlClient::new(config.graphql_url(), &config.api_key, config.timeouts)?;
        Ok(Self { http, graphql, config })
    }

    #[must_use]
    pub fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }
}

#[async_trait::async_trait]
impl CmsApi for CmsClient {
    async fn blog_by_slug(&self, slug: &str) -> Result<GraphqlResponse<BlogsBySlug>, CmsError> {
        self.graphql.execute(&blog::blog_by_slug_request(slug)).await
    }

    async fn current_user(&self, token: &str) -> Result<Option<User>, CmsError> {
        let response = self
            .http
            .get(self.config.rest_url("/users/me?populate=role"))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;
        users::parse_user_response(status, &text)
    }

    async fn forward(&self, request: Forward<'_>) -> Result<Forwarded, CmsError> {
        let url = self.config.rest_url(request.path);
        let builder = match request.verb {
            Verb::Post => self.http.post(&url),
            Verb::Put => self.http.put(&url),
        };
        let mut builder = builder
            .header(CONTENT_TYPE, "application/json")
            .body(request.body.to_vec());
        if let Some(token) = request.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?
            .to_vec();

        Ok(Forwarded { status, content_type, body })
    }
}

/// `GetBlogBySlug` reduced to the first match.
///
/// # Errors
///
/// Propagates transport and decode failures from the CMS.
pub async fn fetch_blog(cms: &dyn CmsApi, slug: &str) -> Result<Option<Blog>, CmsError> {
    let response = cms.blog_by_slug(slug).await?;
    Ok(blog::first_blog(response))
}
