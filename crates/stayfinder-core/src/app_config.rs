use std::path::PathBuf;

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
    pub env: Environment,
    pub log_level: String,
    /// Catalog YAML to load instead of the embedded default, when set.
    pub catalog_path: Option<PathBuf>,
    /// Currency symbol prefixed to displayed amounts.
    pub currency: String,
    /// Default ceiling of the nightly-rate filter.
    pub max_nightly_rate: u32,
}
