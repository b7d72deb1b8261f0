//! Request/response models for fiche generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::templates;

/// Allowed seniority levels, in display order for validation messages.
pub const SENIORITY_LEVELS: &[&str] = &["junior", "intermediate", "senior", "expert"];

/// Supported output languages.
pub const LANGUAGES: &[&str] = &["fr", "en"];

/// A single fiche-generation request. All optional fields carry serde
/// defaults so validation always runs against fully-populated values.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequest {
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default = "default_seniority")]
    pub seniority: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_contract_type")]
    pub contract_type: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Accepted for API compatibility but not interpolated into the prompt.
    #[serde(default = "default_tone")]
    #[allow(dead_code)]
    pub tone: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default)]
    pub key_skills: Vec<String>,
    #[serde(default)]
    pub salary_band: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub company_context: String,
    #[serde(default)]
    pub policies: String,
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_seniority() -> String {
    "junior".to_string()
}

fn default_contract_type() -> String {
    "permanent".to_string()
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_tone() -> String {
    "neutral".to_string()
}

fn default_length() -> String {
    "standard".to_string()
}

fn default_template() -> String {
    "standard".to_string()
}

impl JobRequest {
    /// Validates enum-like fields against their allowed sets.
    /// Must pass before any prompt construction or external call.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation(
                "title: must not be empty".to_string(),
            ));
        }
        if !SENIORITY_LEVELS.contains(&self.seniority.as_str()) {
            return Err(enum_violation("seniority", &self.seniority, SENIORITY_LEVELS));
        }
        if !LANGUAGES.contains(&self.language.as_str()) {
            return Err(enum_violation("language", &self.language, LANGUAGES));
        }
        if templates::get(&self.template).is_none() {
            return Err(enum_violation("template", &self.template, &templates::names()));
        }
        Ok(())
    }
}

fn enum_violation(field: &str, value: &str, allowed: &[&str]) -> AppError {
    AppError::Validation(format!(
        "{field}: '{value}' is not allowed (expected one of: {})",
        allowed.join(", ")
    ))
}

/// The generated fiche returned by `POST /generate`. Ephemeral — built per
/// request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub template: String,
    pub language: String,
    pub markdown: String,
}
