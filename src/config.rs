// region:    --- Imports
use std::env;
use std::str::FromStr;
use thiserror::Error;

// endregion: --- Imports

pub const DEFAULT_COLLECTION_NAME: &str = "auctions";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// region:    --- Config Error
/// 설정 오류
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },

    #[error("Invalid collection name '{0}': expected letters, digits and underscores")]
    InvalidCollectionName(String),
}
// endregion: --- Config Error

// region:    --- Config
/// 서비스 설정 (시작 시 한 번 환경 변수에서 읽는다)
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub collection_name: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let collection_name = env_or_default("COLLECTION_NAME", DEFAULT_COLLECTION_NAME);
        if !is_valid_identifier(&collection_name) {
            return Err(ConfigError::InvalidCollectionName(collection_name));
        }
        Ok(Self {
            database_url: env_required("DATABASE_URL")?,
            collection_name,
            port: env_parse_or("PORT", DEFAULT_PORT)?,
            max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }
}

/// 기본값이 있는 환경 변수
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// 필수 환경 변수
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// SQL 식별자로 쓸 수 있는 이름인지 확인
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
// endregion: --- Config
