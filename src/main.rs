mod api;
mod config;
mod middleware;
mod models;
mod state;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;

use crate::config::AppConfig;
use crate::state::ServiceState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(e.into());
        }
    };

    log::info!("🚀 Starting API demo services...");

    let mut servers = Vec::with_capacity(config.services.len());

    for profile in &config.services {
        let state = web::Data::new(ServiceState::new(profile.clone()));
        let cors_origins = config.cors_allowed_origins.clone();

        log::info!(
            "🌐 {} service on {}:{} (base path {})",
            profile.name, config.host, profile.port, profile.prefix
        );
        log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, profile.port);

        let mut server = HttpServer::new(move || {
            let state = state.clone();

            App::new()
                .wrap(build_cors(&cors_origins))
                .wrap(Compress::default())
                .wrap(Logger::default())
                .configure(move |cfg| api::configure(cfg, state))
        })
        .shutdown_timeout(config.shutdown_timeout);

        if let Some(workers) = config.workers {
            server = server.workers(workers);
        }

        servers.push(server.bind((config.host.as_str(), profile.port))?.run());
    }

    // Each server stops on SIGINT/SIGTERM; wait for all of them.
    futures::future::try_join_all(servers).await?;

    log::info!("👋 All services stopped");
    Ok(())
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .expose_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
