use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::state::ServiceState;

/// Counts every request passing through the wrapped scope, and every one
/// that ends in a 4xx/5xx status or an error.
pub struct RequestMetrics {
    state: web::Data<ServiceState>,
}

impl RequestMetrics {
    pub fn new(state: web::Data<ServiceState>) -> Self {
        Self { state }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware {
            service,
            state: self.state.clone(),
        }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: S,
    state: web::Data<ServiceState>,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let state = self.state.clone();
        state.metrics.increment_request_count();

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let status = res.status();
                    if status.is_client_error() || status.is_server_error() {
                        state.metrics.increment_error_count();
                    }
                    Ok(res)
                }
                Err(e) => {
                    state.metrics.increment_error_count();
                    Err(e)
                }
            }
        })
    }
}
