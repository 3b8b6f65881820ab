//! Blog content fetched from the CMS.

use serde::{Deserialize, Serialize};

use super::graphql::{GraphqlRequest, GraphqlResponse};

pub const GET_BLOG_BY_SLUG: &str = r"query GetBlogBySlug($slug: String!) {
  blogs(filters: { slug: { eq: $slug } }) {
    documentId
    title
    slug
    createdAt
    updatedAt
    publishedAt
    description
    content
    image {
      url
      alternativeText
      width
      height
      formats
    }
  }
}";

#[derive(Debug, Serialize)]
pub struct SlugVariables<'a> {
    pub slug: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogsBySlug {
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub document_id: String,
    pub title: String,
    pub slug: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
    pub description: Option<String>,
    /// Rich-text blocks or markdown, depending on the CMS field type.
    #[serde(default)]
    pub content: serde_json::Value,
    pub image: Option<ImageMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMeta {
    pub url: String,
    pub alternative_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub formats: serde_json::Value,
}

impl ImageMeta {
    /// Absolute image URL; CMS uploads are served relative to the API origin.
    #[must_use]
    pub fn absolute_url(&self, api_url: &str) -> String {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            self.url.clone()
        } else {
            format!("{api_url}{}", self.url)
        }
    }
}

#[must_use]
pub fn blog_by_slug_request(slug: &str) -> GraphqlRequest<'static, SlugVariables<'_>> {
    GraphqlRequest { operation_name: "GetBlogBySlug", query: GET_BLOG_BY_SLUG, variables: SlugVariables { slug } }
}

/// First matching blog, if the response carried any data.
#[must_use]
pub fn first_blog(response: GraphqlResponse<BlogsBySlug>) -> Option<Blog> {
    response.data?.blogs.into_iter().next()
}

#[cfg(test)]
#[path = "blog_test.rs"]
mod tests;
