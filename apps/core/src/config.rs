use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::ScoringWeights;

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to the documented defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub weights: ScoringWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            keyword: env_or("MATCH_KEYWORD_WEIGHT", defaults.keyword)?,
            must_have: env_or("MATCH_MUST_HAVE_WEIGHT", defaults.must_have)?,
            title: env_or("MATCH_TITLE_WEIGHT", defaults.title)?,
            neutral_score: env_or("MATCH_NEUTRAL_SCORE", defaults.neutral_score)?,
        };
        weights.validate()?;

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            weights,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            weights: ScoringWeights::default(),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
