use utoipa::OpenApi;

use crate::config::ServiceProfile;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Demo Service",
        version = "1.0.0",
        description = "Stub endpoints of a demo service. \n\n**Endpoints:**\n- Fixed greeting\n- Create user (echoes the posted body)\n- Get user by id (echoes the id)\n- Health check and metrics"
    ),
    paths(
        // Demo
        crate::api::greeting::hello,
        crate::api::users::create_user,
        crate::api::users::get_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::GreetingResponse,
            crate::models::UserCreatedResponse,
            crate::models::UserDetailResponse,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Demo", description = "Greeting and user echo endpoints. Nothing is persisted."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;

// Documented relative to the service scope
const SCOPED_PATHS: &[&str] = &["/hello", "/user", "/user/{id}"];

/// OpenAPI document for one service, with its demo paths under its prefix.
pub fn openapi_for(profile: &ServiceProfile) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = format!("API Demo Service ({})", profile.name);

    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| {
            if SCOPED_PATHS.contains(&path.as_str()) {
                (format!("{}{}", profile.prefix, path), item)
            } else {
                (path, item)
            }
        })
        .collect();

    doc
}
