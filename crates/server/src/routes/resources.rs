//! List/create handlers for the five store-backed resources.

use axum::{extract::State, Json};
use models::{Campaign, CampaignCreate, Feedback, ForumPost, Resource, Talent, User, UserCreate};
use service::{create_checked, ResourceStore};
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

async fn list_records<R: Resource>(store: &ResourceStore<R>) -> Json<Vec<R>> {
    Json(store.list().await)
}

async fn create_record<R: Resource>(store: &ResourceStore<R>, input: R::Input) -> Result<Json<R>, JsonApiError> {
    let record = create_checked(store, input).await?;
    info!(resource = R::KIND, "record created");
    Ok(Json(record))
}

#[utoipa::path(get, path = "/api/users", tag = "users", responses((status = 200, description = "All users in creation order")))]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    list_records(&state.stores.users).await
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::UserCreateDoc,
    responses((status = 200, description = "Created user with assigned id"), (status = 400, description = "Validation Error"))
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserCreate>,
) -> Result<Json<User>, JsonApiError> {
    create_record(&state.stores.users, input).await
}

#[utoipa::path(get, path = "/api/campaigns", tag = "campaigns", responses((status = 200, description = "All campaigns in creation order")))]
pub async fn list_campaigns(State(state): State<AppState>) -> Json<Vec<Campaign>> {
    list_records(&state.stores.campaigns).await
}

#[utoipa::path(
    post, path = "/api/campaigns", tag = "campaigns",
    request_body = crate::openapi::CampaignCreateDoc,
    responses((status = 200, description = "Created campaign with assigned id"), (status = 400, description = "Validation Error"))
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(input): Json<CampaignCreate>,
) -> Result<Json<Campaign>, JsonApiError> {
    create_record(&state.stores.campaigns, input).await
}

#[utoipa::path(get, path = "/api/forum", tag = "forum", responses((status = 200, description = "All forum posts")))]
pub async fn list_forum(State(state): State<AppState>) -> Json<Vec<ForumPost>> {
    list_records(&state.stores.forum_posts).await
}

#[utoipa::path(
    post, path = "/api/forum", tag = "forum",
    request_body = crate::openapi::ForumPostDoc,
    responses((status = 200, description = "Stored post"), (status = 400, description = "Validation Error"))
)]
pub async fn create_forum_post(
    State(state): State<AppState>,
    Json(input): Json<ForumPost>,
) -> Result<Json<ForumPost>, JsonApiError> {
    create_record(&state.stores.forum_posts, input).await
}

#[utoipa::path(get, path = "/api/talent", tag = "talent", responses((status = 200, description = "All talent listings")))]
pub async fn list_talent(State(state): State<AppState>) -> Json<Vec<Talent>> {
    list_records(&state.stores.talent).await
}

#[utoipa::path(
    post, path = "/api/talent", tag = "talent",
    request_body = crate::openapi::TalentDoc,
    responses((status = 200, description = "Stored listing"), (status = 400, description = "Validation Error"))
)]
pub async fn create_talent(
    State(state): State<AppState>,
    Json(input): Json<Talent>,
) -> Result<Json<Talent>, JsonApiError> {
    create_record(&state.stores.talent, input).await
}

#[utoipa::path(get, path = "/api/feedback", tag = "feedback", responses((status = 200, description = "All feedback entries")))]
pub async fn list_feedback(State(state): State<AppState>) -> Json<Vec<Feedback>> {
    list_records(&state.stores.feedback).await
}

#[utoipa::path(
    post, path = "/api/feedback", tag = "feedback",
    request_body = crate::openapi::FeedbackDoc,
    responses((status = 200, description = "Stored feedback"), (status = 400, description = "Validation Error"))
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(input): Json<Feedback>,
) -> Result<Json<Feedback>, JsonApiError> {
    create_record(&state.stores.feedback, input).await
}
