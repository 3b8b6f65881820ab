//! Blog content routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::cms::blog::Blog;
use crate::cms::{self, CmsError};
use crate::state::AppState;

pub(crate) fn cms_error_to_status(err: &CmsError) -> StatusCode {
    match err {
        CmsError::Request(_) | CmsError::Response { .. } | CmsError::Parse(_) => StatusCode::BAD_GATEWAY,
        CmsError::HttpClientBuild(_) | CmsError::InvalidApiKey => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/blogs/{slug}`: one blog post by slug, with absolute image URL.
pub async fn blog_by_slug(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<Blog>, StatusCode> {
    let blog = cms::fetch_blog(state.cms.as_ref(), &slug)
        .await
        .map_err(|e| {
            tracing::error!(%slug, error = %e, "blog fetch failed");
            cms_error_to_status(&e)
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(with_absolute_image(blog, &state.api_url)))
}

fn with_absolute_image(mut blog: Blog, api_url: &str) -> Blog {
    if let Some(image) = blog.image.as_mut() {
        image.url = image.absolute_url(api_url);
    }
    blog
}

#[cfg(test)]
#[path = "blog_test.rs"]
mod tests;
