// src/presentation/http/controllers/customers.rs
use crate::application::{dto::CustomerDto, queries::customers::GetCustomerByIdQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    params(("id" = i64, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "The requested customer.", body = CustomerDto),
        (status = 404, description = "No such customer, or the caller may not see it.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Customers"
)]
pub async fn get_customer_by_id(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CustomerDto>> {
    state
        .services
        .customer_queries
        .get_customer_by_id(&actor, GetCustomerByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
