use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub data_path: PathBuf,
    pub public_dir: PathBuf,
    pub log_json: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        let host = lookup("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = lookup("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let data_path = lookup("DATA_PATH").unwrap_or_else(|_| "data.json".to_string());
        let public_dir = lookup("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());
        let log_json = match lookup("LOG_JSON") {
            Ok(value) => parse_bool(&value)
                .ok_or_else(|| AppError::Config(format!("Invalid LOG_JSON value: {}", value)))?,
            Err(env::VarError::NotPresent) => false,
            Err(e) => return Err(e.into()),
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            data_path: PathBuf::from(data_path),
            public_dir: PathBuf::from(public_dir),
            log_json,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
