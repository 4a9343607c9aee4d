// src/presentation/http/controllers/profiles.rs
use crate::application::{dto::ProfileDto, queries::profiles::GetProfileByIdQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}",
    params(("id" = i64, Path, description = "Profile identifier")),
    responses(
        (status = 200, description = "The requested profile.", body = ProfileDto),
        (status = 404, description = "No such profile.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn get_profile_by_id(
    Extension(state): Extension<HttpState>,
    _actor: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .get_profile_by_id(GetProfileByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
