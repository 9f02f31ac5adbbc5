use actix_web::http::Method;
use std::env;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_JWT_EXPIRES_IN: i64 = 60 * 60 * 24;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt: JwtConfig,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_env = |key: &'static str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => Ok(v),
                Some(v) => Err(ConfigError::Invalid { key, value: v }),
                None => Err(ConfigError::Missing(key)),
            }
        };

        let expires_in = parse_or(&lookup, "JWT_EXPIRES_IN", DEFAULT_JWT_EXPIRES_IN)?;
        if expires_in <= 0 {
            return Err(ConfigError::Invalid { key: "JWT_EXPIRES_IN", value: expires_in.to_string() });
        }

        Ok(EnvConfig {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            db_url: get_env("POSTGRES_URI")?,
            jwt: JwtConfig {
                secret: get_env("JWT_SECRET")?,
                expires_in,
            },
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

/// A route reachable without a bearer token.
pub struct PublicRoute {
    pub path: &'static str,
    pub method: Method,
}

pub const PUBLIC_ROUTES: [PublicRoute; 3] = [
    PublicRoute { path: "/api/auth/register", method: Method::POST },
    PublicRoute { path: "/api/auth/login", method: Method::POST },
    // health check
    PublicRoute { path: "/", method: Method::GET },
];

pub fn is_public_route(method: &Method, path: &str) -> bool {
    PUBLIC_ROUTES
        .iter()
        .any(|route| route.path == path && route.method == *method)
}
