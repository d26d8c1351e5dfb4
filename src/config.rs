use std::collections::HashSet;
use std::env;
use std::str::FromStr;

use crate::utils::AppError;

/// Services started when `SERVICES` is not set.
pub const DEFAULT_SERVICES: &str = "jaxrs,spring";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_SHUTDOWN_TIMEOUT: u64 = 30;

// name, greeting, default port
const BUILTIN_SERVICES: &[(&str, &str, u16)] = &[
    ("jaxrs", "Hello from JAX-RS!", 8084),
    ("spring", "Hello from Spring Boot!", 8085),
    ("gin", "Hello from Gin!", 8080),
    ("echo", "Hello from Echo!", 8081),
    ("fastapi", "Hello from FastAPI!", 8082),
    ("flask", "Hello from Flask!", 8083),
];

/// Everything that tells one demo service apart from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProfile {
    pub name: String,
    /// Base path of the demo scope, always with a leading slash (`/jaxrs`).
    pub prefix: String,
    pub greeting: String,
    pub port: u16,
}

impl ServiceProfile {
    pub fn builtin(name: &str) -> Option<Self> {
        BUILTIN_SERVICES
            .iter()
            .find(|(builtin, _, _)| *builtin == name)
            .map(|(name, greeting, port)| ServiceProfile {
                name: name.to_string(),
                prefix: format!("/{}", name),
                greeting: greeting.to_string(),
                port: *port,
            })
    }

    pub fn builtin_names() -> Vec<&'static str> {
        BUILTIN_SERVICES.iter().map(|(name, _, _)| *name).collect()
    }

    /// Environment variable overriding this service's port, e.g. `JAXRS_PORT`.
    pub fn port_var(&self) -> String {
        format!("{}_PORT", self.name.to_uppercase())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub services: Vec<ServiceProfile>,
    pub workers: Option<usize>,
    pub shutdown_timeout: u64,
    /// Empty means any origin is accepted.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let service_list = read("SERVICES").unwrap_or_else(|| DEFAULT_SERVICES.to_string());

        let mut services = Vec::new();
        let mut seen_names = HashSet::new();
        let mut seen_ports = HashSet::new();

        for raw in split_list(&service_list) {
            let name = raw.to_lowercase();
            let mut profile = ServiceProfile::builtin(&name).ok_or_else(|| {
                AppError::Config(format!(
                    "unknown service '{}' (expected one of: {})",
                    raw,
                    ServiceProfile::builtin_names().join(", ")
                ))
            })?;

            if !seen_names.insert(name) {
                return Err(AppError::Config(format!("service '{}' listed twice", raw)));
            }

            let port_var = profile.port_var();
            if let Some(port) = parse_var::<u16>(read(&port_var), &port_var)? {
                profile.port = port;
            }

            if !seen_ports.insert(profile.port) {
                return Err(AppError::Config(format!(
                    "port {} is used by more than one service",
                    profile.port
                )));
            }

            services.push(profile);
        }

        if services.is_empty() {
            return Err(AppError::Config("SERVICES selects no service".to_string()));
        }

        let workers = parse_var::<usize>(read("WORKERS"), "WORKERS")?;
        if workers == Some(0) {
            return Err(AppError::Config("WORKERS must be at least 1".to_string()));
        }

        let shutdown_timeout = parse_var::<u64>(read("SHUTDOWN_TIMEOUT"), "SHUTDOWN_TIMEOUT")?
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT);

        let cors_allowed_origins = match read("CORS_ALLOWED_ORIGINS") {
            Some(origins) => split_list(&origins)
                .map(|origin| validate_origin(origin).map(|()| origin.to_string()))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(AppConfig {
            host,
            services,
            workers,
            shutdown_timeout,
            cors_allowed_origins,
        })
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Origins must look like `scheme://host[:port]`; actix-cors panics on anything else.
fn validate_origin(origin: &str) -> Result<(), AppError> {
    let invalid = || {
        AppError::Config(format!(
            "CORS_ALLOWED_ORIGINS entry '{}' is not of the form http(s)://host[:port]",
            origin
        ))
    };

    let authority = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(invalid)?;

    let (host, port) = if authority.starts_with('[') {
        // IPv6 literal
        let end = authority.find(']').ok_or_else(invalid)?;
        let (host, rest) = authority.split_at(end + 1);
        match rest {
            "" => (host, None),
            _ => (host, Some(rest.strip_prefix(':').ok_or_else(invalid)?)),
        }
    } else {
        match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    let host_ok = match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        Some(ipv6) => !ipv6.is_empty() && ipv6.chars().all(|c| c.is_ascii_hexdigit() || matches!(c, ':' | '.')),
        None => !host.is_empty() && host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-')),
    };
    let port_ok = port.map_or(true, |port| port.parse::<u16>().is_ok());

    if host_ok && port_ok {
        Ok(())
    } else {
        Err(invalid())
    }
}

fn parse_var<T: FromStr>(value: Option<String>, key: &str) -> Result<Option<T>, AppError> {
    value
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| AppError::Config(format!("{} has invalid value '{}'", key, raw)))
        })
        .transpose()
}
