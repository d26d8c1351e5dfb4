use actix_web::{web, HttpResponse, Responder};

use crate::models::GreetingResponse;
use crate::state::ServiceState;

/// GET /{prefix}/hello
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Demo",
    responses(
        (status = 200, description = "Fixed greeting of this service", body = GreetingResponse)
    )
)]
pub async fn hello(state: web::Data<ServiceState>) -> impl Responder {
    log::info!("👋 GET {}/hello", state.profile.prefix);

    HttpResponse::Ok().json(GreetingResponse {
        message: state.profile.greeting.clone(),
    })
}
