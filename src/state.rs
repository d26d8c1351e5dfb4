use crate::api::metrics::ServiceMetrics;
use crate::config::ServiceProfile;

/// Per-server application data, shared by every worker through `web::Data`.
#[derive(Debug)]
pub struct ServiceState {
    pub profile: ServiceProfile,
    pub metrics: ServiceMetrics,
}

impl ServiceState {
    pub fn new(profile: ServiceProfile) -> Self {
        Self {
            profile,
            metrics: ServiceMetrics::default(),
        }
    }
}
