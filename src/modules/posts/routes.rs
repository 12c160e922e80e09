//! HTTP handlers for the posts module.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::json;
use voyage_http::error::AppError;

use super::feed::{self, FeedView};
use super::generator::PostGenerator;
use super::models::{FeedQuery, GenerateResponse, TravelPost};

pub const GENERATION_FAILED: &str = "Failed to generate travel post";

/// Shared by every handler of the module.
pub struct PostsState {
    pub generator: PostGenerator,
    pub catalog: &'static [TravelPost],
}

pub type SharedState = Arc<PostsState>;

pub async fn health_check() -> &'static str {
    "posts module is healthy"
}

/// Feed over the seed catalog, optionally narrowed to one tag.
pub async fn list_feed(
    State(state): State<SharedState>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<FeedView<'static>>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let view = FeedView::project(state.catalog, query.selected_tag());
    tracing::debug!(
        tag = ?view.selected_tag,
        matches = view.total,
        "feed projected"
    );

    Ok(Json(view))
}

pub async fn list_tags(State(state): State<SharedState>) -> Json<Vec<&'static str>> {
    Json(feed::all_tags(state.catalog))
}

/// trigger-generation: a fresh post on every call.
pub async fn generate_post(
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let post = state.generator.generate();
    tracing::info!(
        post_id = %post.id,
        destination = %post.destination,
        "generated travel post"
    );

    let body = serde_json::to_value(GenerateResponse::new(post))
        .map_err(|err| AppError::internal(err, GENERATION_FAILED))?;

    Ok(Json(body))
}

/// describe-capability: static, always succeeds.
pub async fn describe_generation() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Use POST method to generate a new AI travel post",
        "endpoints": {
            "POST /api/posts/generate": "Generate a new AI travel post"
        }
    }))
}
