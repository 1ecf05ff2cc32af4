//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 8000).
    pub port: u16,

    /// Directory holding the built frontend (default: ./frontend/out).
    pub frontend_dir: PathBuf,

    /// Live frontend dev server used in dev mode (default: http://localhost:3000).
    pub frontend_dev_url: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Redirect `/` to the dev server instead of serving built files.
    pub dev_mode: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let frontend_dir = env::var("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./frontend/out"));

        let frontend_dev_url = env::var("FRONTEND_DEV_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["*".to_string()]);

        Ok(Self {
            port,
            frontend_dir,
            frontend_dev_url,
            cors_allowed_origins,
            dev_mode: false,
        })
    }

    /// Switch dev mode on or off.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            frontend_dir: PathBuf::from("./frontend/out"),
            frontend_dev_url: "http://localhost:3000".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            dev_mode: false,
        }
    }
}
