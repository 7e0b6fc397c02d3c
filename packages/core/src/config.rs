use std::env;

use crate::cli::Cli;

/// Data store used when `NEWS_DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://news.db";
/// Number of articles listed by the popular-articles report.
pub const DEFAULT_TOP_ARTICLES: u32 = 3;
/// Error percentage at or above which a day is reported.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub top_articles: u32,
    pub error_threshold: f64,
}

/// Location of the news database, handed to the executor at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::new(DEFAULT_DATABASE_URL),
            top_articles: DEFAULT_TOP_ARTICLES,
            error_threshold: DEFAULT_ERROR_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("NEWS_DATABASE_URL") {
            if url.trim().is_empty() {
                return Err("NEWS_DATABASE_URL must not be empty".to_string());
            }
            config.database = DatabaseConfig::new(url);
        }

        if let Some(raw) = lookup("NEWS_TOP_ARTICLES") {
            config.top_articles = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| "NEWS_TOP_ARTICLES must be a valid number")?;
        }

        if let Some(raw) = lookup("NEWS_ERROR_THRESHOLD") {
            config.error_threshold = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| "NEWS_ERROR_THRESHOLD must be a valid number")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, String> {
        if let Some(url) = &cli.database_url {
            self.database = DatabaseConfig::new(url.clone());
        }
        if let Some(count) = cli.top_articles {
            self.top_articles = count;
        }
        if let Some(threshold) = cli.error_threshold {
            self.error_threshold = threshold;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), String> {
        if !self.error_threshold.is_finite() || self.error_threshold < 0.0 {
            return Err(format!(
                "Invalid error threshold: {}",
                self.error_threshold
            ));
        }
        Ok(())
    }
}
