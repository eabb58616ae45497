use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Browser origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Reads `SYLLABUS_*` variables; unset ones keep their defaults.
    pub fn new_from_env() -> Result<Self, ConfigError> {
        let host = parse_var("SYLLABUS_HOST", DEFAULT_HOST)?;
        let port = parse_var("SYLLABUS_PORT", &DEFAULT_PORT.to_string())?;
        let max_upload_bytes =
            parse_var("SYLLABUS_MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())?;

        let allowed_origins = env::var("SYLLABUS_ALLOWED_ORIGINS")
            .map(|v| split_origins(&v))
            .unwrap_or_else(|_| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);

        Ok(Self {
            host,
            port,
            allowed_origins,
            max_upload_bytes,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
