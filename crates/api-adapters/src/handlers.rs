//! # Handlers
//!
//! Each handler converts the request into a typed service call and the
//! result into its response DTO. No logic lives here.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    Json,
};

use crate::dto::{
    CreateReviewBody, CreateWorkBody, CreatedResponse, ReviewResponse, SuccessResponse,
    WorkResponse,
};
use crate::error::ApiError;
use crate::router::AppState;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn list_works(State(state): State<AppState>) -> ApiResult<Vec<WorkResponse>> {
    let works = state.service.list_works().await?;
    Ok(Json(works.into_iter().map(WorkResponse::from).collect()))
}

pub async fn create_work(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkBody>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(body) = payload?;
    let id = state.service.create_work(body.into()).await?;
    Ok(Json(CreatedResponse { id }))
}

pub async fn delete_work(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<SuccessResponse> {
    let admin_key = headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    state.service.delete_work(&id, admin_key).await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Vec<ReviewResponse>> {
    let reviews = state.service.list_reviews().await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewBody>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(body) = payload?;
    let id = state.service.create_review(body.into()).await?;
    Ok(Json(CreatedResponse { id }))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SuccessResponse> {
    state.service.delete_review(&id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
