//! Prompt log records and their validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// AI provider that served a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenRouter,
    OpenAi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenRouter => "openrouter",
            Self::OpenAi => "openai",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openrouter" => Ok(Self::OpenRouter),
            "openai" => Ok(Self::OpenAi),
            other => Err(ValidationError::UnknownProvider(other.to_string())),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Citation style the correction was requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    Abnt,
    Apa,
    Vancouver,
    Mla,
}

impl CitationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abnt => "abnt",
            Self::Apa => "apa",
            Self::Vancouver => "vancouver",
            Self::Mla => "mla",
        }
    }
}

impl std::str::FromStr for CitationStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abnt" => Ok(Self::Abnt),
            "apa" => Ok(Self::Apa),
            "vancouver" => Ok(Self::Vancouver),
            "mla" => Ok(Self::Mla),
            other => Err(ValidationError::UnknownStyle(other.to_string())),
        }
    }
}

impl std::fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate log entry, as received from the AI-integration handler.
///
/// `provider` and `style` are carried as the uninterpreted strings that
/// arrived with the request; [`NewPromptLog::validate`] turns a candidate
/// into a typed [`PromptLogRecord`] or rejects it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewPromptLog {
    pub system: String,
    pub user: String,
    pub provider: String,
    pub model: String,
    pub style: String,
    pub response: Option<String>,
    pub response_time_ms: Option<u32>,
    pub success: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub original_length: Option<i32>,
    pub corrected_length: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewPromptLog {
    /// Check the candidate against the schema and produce the typed record.
    ///
    /// `system`, `user` and `model` must be non-empty after trimming;
    /// `provider` and `style` must name known values.
    pub fn validate(self) -> Result<PromptLogRecord, ValidationError> {
        let system = required(self.system, "system")?;
        let user = required(self.user, "user")?;
        let model = required(self.model, "model")?;
        let provider: Provider = self.provider.parse()?;
        let style: CitationStyle = self.style.parse()?;

        Ok(PromptLogRecord {
            system,
            user,
            provider,
            model,
            style,
            response: self.response,
            response_time_ms: self.response_time_ms,
            success: self.success,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            original_length: self.original_length,
            corrected_length: self.corrected_length,
            created_at: self.created_at,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// A validated entry, ready to persist.
#[derive(Debug, Clone)]
pub struct PromptLogRecord {
    pub system: String,
    pub user: String,
    pub provider: Provider,
    pub model: String,
    pub style: CitationStyle,
    pub response: Option<String>,
    pub response_time_ms: Option<u32>,
    pub success: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub original_length: Option<i32>,
    pub corrected_length: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl PromptLogRecord {
    /// Materialize the persisted form, assigning identity and falling back
    /// to `default_created_at` when the caller supplied no timestamp.
    pub fn into_entry(self, id: Uuid, default_created_at: DateTime<Utc>) -> PromptLogEntry {
        PromptLogEntry {
            id,
            created_at: self.created_at.unwrap_or(default_created_at),
            system: self.system,
            user: self.user,
            provider: self.provider,
            model: self.model,
            style: self.style,
            response: self.response,
            response_time_ms: self.response_time_ms,
            success: self.success,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            original_length: self.original_length,
            corrected_length: self.corrected_length,
        }
    }
}

/// A persisted log entry.
#[derive(Debug, Clone, Serialize)]
pub struct PromptLogEntry {
    pub id: Uuid,
    pub system: String,
    pub user: String,
    pub provider: Provider,
    pub model: String,
    pub style: CitationStyle,
    pub response: Option<String>,
    pub response_time_ms: Option<u32>,
    pub success: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub original_length: Option<i32>,
    pub corrected_length: Option<i32>,
    pub created_at: DateTime<Utc>,
}
