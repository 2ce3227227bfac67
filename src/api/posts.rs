use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;

use super::validation::{validate_limit, validate_required, validate_skip};
use super::{
    ApiError, AppState, CreatePostRequest, ListQuery, MessageResponse, PostDto, UpdatePostRequest,
};
use crate::constants::pagination::DEFAULT_POST_LIMIT;
use crate::models::post::{NewPost, PostChanges};
use crate::services::PostError;

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(id) => Self::not_found("Post", id),
            PostError::UnknownBoard(id) => Self::validation(format!("Board {id} does not exist")),
            PostError::Database(msg) => Self::database(msg),
        }
    }
}

/// `POST /posts/`
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<PostDto>, ApiError> {
    let Json(payload) = payload?;

    validate_required("title", &payload.title)?;
    validate_required("content", &payload.content)?;
    validate_required("author", &payload.author)?;

    let post = state
        .post_service()
        .create_post(NewPost {
            board_id: payload.board_id,
            title: payload.title,
            content: payload.content,
            author: payload.author,
            password: payload.password,
            is_notice: payload.is_notice,
            is_secret: payload.is_secret,
        })
        .await?;

    Ok(Json(post))
}

/// `GET /posts/`
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<PostDto>>, ApiError> {
    let Query(query) = query?;
    let skip = validate_skip(query.skip.unwrap_or(0))?;
    let limit = validate_limit(query.limit.unwrap_or(DEFAULT_POST_LIMIT))?;

    let posts = state.post_service().list_posts(skip, limit).await?;
    Ok(Json(posts))
}

/// `GET /posts/{id}`
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<PostDto>, ApiError> {
    let Path(id) = id?;
    let post = state.post_service().get_post(id).await?;
    Ok(Json(post))
}

/// `PUT /posts/{id}`
///
/// Only the fields present in the body change.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<PostDto>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    for (field, value) in [
        ("title", &payload.title),
        ("content", &payload.content),
        ("author", &payload.author),
    ] {
        if let Some(value) = value {
            validate_required(field, value)?;
        }
    }

    let changes = PostChanges {
        board_id: payload.board_id,
        title: payload.title,
        content: payload.content,
        author: payload.author,
        password: payload.password,
        is_notice: payload.is_notice,
        is_secret: payload.is_secret,
    };

    let post = state.post_service().update_post(id, changes).await?;
    Ok(Json(post))
}

/// `DELETE /posts/{id}`
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.post_service().delete_post(id).await?;
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

/// `GET /boards/`
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<super::BoardDto>>, ApiError> {
    let boards = state.post_service().list_boards().await?;
    Ok(Json(boards))
}
