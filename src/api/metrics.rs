use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::state::ServiceState;

/// Request counters for one service's demo scope.
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    requests: AtomicU64,
    errors: AtomicU64,
}

impl ServiceMetrics {
    pub fn increment_request_count(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_error_count(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsResponse {
        MetricsResponse {
            http_requests_total: self.requests.load(Ordering::Relaxed),
            http_errors_total: self.errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
}

impl MetricsResponse {
    fn to_prometheus(&self, service: &str) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total{{service=\"{service}\"}} {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP errors\n\
             # TYPE http_errors_total counter\n\
             http_errors_total{{service=\"{service}\"}} {}\n",
            self.http_requests_total, self.http_errors_total
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus counters for the demo endpoints", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics(state: web::Data<ServiceState>) -> HttpResponse {
    let metrics = state.metrics.snapshot().to_prometheus(&state.profile.name);

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics)
}
