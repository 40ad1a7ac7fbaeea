//! Prompt logging and usage analytics backend for the InovAcademico
//! bibliography corrector.
//!
//! The AI-integration handler records one [`promptlog::PromptLogEntry`] per
//! attempted completion call through a [`promptlog::PromptLogger`], and the
//! reporting path reads aggregate [`promptlog::UsageStats`] back out. Both
//! operations are best-effort: the request path that triggers them never
//! sees a failure from this crate.

pub mod config;
pub mod db;
pub mod error;
pub mod promptlog;
