pub mod greeting;
pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::RequestMetrics;
use crate::state::ServiceState;
use crate::utils::AppError;

/// Registers every route of one demo service.
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<ServiceState>) {
    let openapi = swagger::openapi_for(&state.profile);

    cfg.app_data(state.clone())
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", openapi)
        )
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::scope(&state.profile.prefix)
                .wrap(RequestMetrics::new(state.clone()))
                .route("/hello", web::get().to(greeting::hello))
                .route("/user", web::post().to(users::create_user))
                // ids may be empty
                .route("/user/{id:[^/]*}", web::get().to(users::get_user))
        )
        .default_service(web::to(not_found));
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("⚠️  Rejected body on {} {}: {}", req.method(), req.path(), err);
    AppError::InvalidRequest(err.to_string()).into()
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}
