//! HTTP handlers for the JSON API

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use super::error::ApiError;
use super::validation::Validate;
use super::SharedState;
use crate::content::BlogPost;
use crate::generator::sitemap_xml;
use crate::store::{BlogQuery, CategorySummary, Comment, NewComment, NewContactMessage};

fn owned(posts: Vec<&BlogPost>) -> Vec<BlogPost> {
    posts.into_iter().cloned().collect()
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// `GET /api/blogs`
pub async fn list_blogs(
    State(state): State<SharedState>,
    query: Result<Query<BlogQuery>, QueryRejection>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let blogs = state.blogs.read().await;
    Ok(Json(owned(blogs.search(&query))))
}

/// `GET /api/blogs/featured`
pub async fn list_featured(State(state): State<SharedState>) -> Json<Vec<BlogPost>> {
    let blogs = state.blogs.read().await;
    Json(owned(blogs.list_featured()))
}

/// `GET /api/blogs/:slug`
pub async fn get_blog(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let blogs = state.blogs.read().await;
    blogs
        .get_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("Blog not found"))
}

/// `GET /api/blogs/related/:id`
pub async fn related_blogs(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<Vec<BlogPost>> {
    let blogs = state.blogs.read().await;
    Json(owned(blogs.get_related(&id, state.config.related_limit)))
}

/// `GET /api/categories`
pub async fn list_categories(State(state): State<SharedState>) -> Json<Vec<CategorySummary>> {
    let blogs = state.blogs.read().await;
    Json(blogs.categories())
}

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<SharedState>,
    payload: Result<Json<NewContactMessage>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = parse_body(payload)?.trimmed();
    input.validate().map_err(ApiError::Validation)?;

    let message = state.messages.write().await.create_contact_message(input);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": message })),
    ))
}

/// `GET /api/comments/:blog_id`
pub async fn list_comments(
    State(state): State<SharedState>,
    Path(blog_id): Path<String>,
) -> Json<Vec<Comment>> {
    let messages = state.messages.read().await;
    Json(
        messages
            .list_comments_by_blog_id(&blog_id)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// `POST /api/comments`
///
/// Comments must reference a loaded post.
pub async fn submit_comment(
    State(state): State<SharedState>,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = parse_body(payload)?.trimmed();
    input.validate().map_err(ApiError::Validation)?;

    if state.blogs.read().await.get(&input.blog_id).is_none() {
        return Err(ApiError::NotFound("Blog not found"));
    }

    let comment = state.messages.write().await.create_comment(input);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "comment": comment })),
    ))
}

/// `GET /api/sitemap.xml`
pub async fn sitemap(State(state): State<SharedState>) -> impl IntoResponse {
    let blogs = state.blogs.read().await;
    let xml = sitemap_xml(&state.config, &blogs.list_all());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
}

/// Unknown `/api/*` paths
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound("Not found")
}
