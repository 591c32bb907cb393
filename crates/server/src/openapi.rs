use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct UserCreateDoc { pub name: String, pub email: String }

#[derive(ToSchema)]
pub struct CampaignCreateDoc { pub name: String }

/// `user` defaults to "Anonymous" when omitted.
#[derive(ToSchema)]
pub struct ForumPostDoc { pub user: Option<String>, pub text: String }

#[derive(ToSchema)]
pub struct TalentDoc { pub name: String, pub skills: String }

#[derive(ToSchema)]
pub struct FeedbackDoc { pub text: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::resources::list_users,
        crate::routes::resources::create_user,
        crate::routes::resources::list_campaigns,
        crate::routes::resources::create_campaign,
        crate::routes::resources::list_forum,
        crate::routes::resources::create_forum_post,
        crate::routes::resources::list_talent,
        crate::routes::resources::create_talent,
        crate::routes::resources::list_feedback,
        crate::routes::resources::create_feedback,
        crate::routes::analytics::metrics,
    ),
    components(
        schemas(
            HealthResponse,
            UserCreateDoc,
            CampaignCreateDoc,
            ForumPostDoc,
            TalentDoc,
            FeedbackDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "campaigns"),
        (name = "forum"),
        (name = "talent"),
        (name = "feedback"),
        (name = "analytics")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
