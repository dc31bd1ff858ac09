use std::path::PathBuf;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Selects defaults; production turns on `strict_validation`.
    pub env: Environment,
    pub log_level: String,
    /// Directory searched when a product is referenced by id.
    pub catalog_dir: PathBuf,
    /// Refuse snapshots that fail catalog validation.
    pub strict_validation: bool,
    /// Fixed clock for sale windows; `None` uses the system clock.
    pub now_override: Option<DateTime<Utc>>,
}

impl AppConfig {
    /// The instant sale windows are evaluated at.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now_override.unwrap_or_else(Utc::now)
    }
}
