//! Error types for the fantasy football co-manager

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Missing required setting: {name}")]
    MissingSetting { name: String },

    #[error("Both ESPN_S2 and SWID must be set for a private league (only {present} was provided)")]
    PartialCredentials { present: String },

    #[error("Team index must be a positive 1-based number, got {value}")]
    InvalidTeamIndex { value: String },

    #[error("Team index {index} is out of range for a league of {team_count} teams")]
    TeamIndexOutOfRange { index: usize, team_count: usize },

    #[error("{provider} returned no usable data")]
    NoData { provider: &'static str },

    #[error("Completion provider error: {message}")]
    Completion { message: String },

    #[error("Request field `{field}` is missing or empty")]
    MissingField { field: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("Template not found: {name}")]
    TemplateMissing { name: String },
}

/// Coarse failure classes surfaced to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    UpstreamUnavailable,
    Validation,
    AssetMissing,
}

impl ErrorKind {
    /// Machine-readable reason string carried in JSON error bodies.
    pub fn reason(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration_error",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::Validation => "validation_error",
            ErrorKind::AssetMissing => "asset_missing",
        }
    }
}

impl FflError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FflError::Http(_)
            | FflError::Json(_)
            | FflError::NoData { .. }
            | FflError::Completion { .. } => ErrorKind::UpstreamUnavailable,
            FflError::InvalidHeader(_)
            | FflError::InvalidNumber(_)
            | FflError::MissingSetting { .. }
            | FflError::PartialCredentials { .. }
            | FflError::InvalidTeamIndex { .. }
            | FflError::TeamIndexOutOfRange { .. } => ErrorKind::Configuration,
            FflError::MissingField { .. } | FflError::InvalidBody { .. } => ErrorKind::Validation,
            FflError::TemplateMissing { .. } | FflError::Io(_) => ErrorKind::AssetMissing,
        }
    }
}
