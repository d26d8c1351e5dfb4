use actix_web::{web, HttpResponse};

use crate::models::{User, UserCreatedResponse, UserDetailResponse};
use crate::state::ServiceState;

/// POST /{prefix}/user - nothing is stored, the body comes straight back
#[utoipa::path(
    post,
    path = "/user",
    tag = "Demo",
    request_body = User,
    responses(
        (status = 200, description = "Echo of the posted user", body = UserCreatedResponse),
        (status = 400, description = "Body is not valid JSON")
    )
)]
pub async fn create_user(
    state: web::Data<ServiceState>,
    user: web::Json<User>,
) -> HttpResponse {
    log::info!("📝 POST {}/user", state.profile.prefix);

    HttpResponse::Ok().json(UserCreatedResponse::new(user.into_inner()))
}

/// GET /{prefix}/user/{id} - no lookup, any id is echoed
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Demo",
    params(
        ("id" = String, Path, description = "Any user id, echoed as-is")
    ),
    responses(
        (status = 200, description = "Echo of the requested id", body = UserDetailResponse)
    )
)]
pub async fn get_user(state: web::Data<ServiceState>, path: web::Path<String>) -> HttpResponse {
    // Decoded segment; invalid UTF-8 escapes come through as U+FFFD
    let id = path.into_inner();
    log::info!("🔍 GET {}/user/{:?}", state.profile.prefix, id);

    HttpResponse::Ok().json(UserDetailResponse::new(id))
}
