use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the single stored resume.
    pub upload_dir: PathBuf,
    /// Static root; `GET /` serves `index.html` from here.
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default_when_unset() {
        let value: u16 = parse_env("INTERVIEW_API_TEST_UNSET_PORT", 5000).unwrap();
        assert_eq!(value, 5000);
    }

    #[test]
    fn test_parse_env_reads_and_trims_value() {
        std::env::set_var("INTERVIEW_API_TEST_LIMIT", " 2048 ");
        let value: usize = parse_env("INTERVIEW_API_TEST_LIMIT", 1).unwrap();
        assert_eq!(value, 2048);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("INTERVIEW_API_TEST_BAD_PORT", "not-a-port");
        let err = parse_env::<u16>("INTERVIEW_API_TEST_BAD_PORT", 5000).unwrap_err();
        assert!(err.to_string().contains("INTERVIEW_API_TEST_BAD_PORT"));
    }
}
