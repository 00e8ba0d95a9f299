use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::resume::Language;

/// A job posting as produced by the upstream fetching/parsing layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub must_have_keywords: Vec<String>,
    #[serde(default)]
    pub nice_to_have_keywords: Vec<String>,
    #[serde(default)]
    pub language: Language,
}

impl JobPosting {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
