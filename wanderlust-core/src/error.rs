//! Error types shared across the core crate.
use crate::destination::Region;

/// Raised when a user-supplied label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Failures while loading or querying the destination catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate destination {name:?} in {region}")]
    DuplicateDestination { name: String, region: Region },
    #[error("destination {name:?} has match percentage {value} (max 100)")]
    MatchOutOfRange { name: String, value: u8 },
    #[error("no destination named {name:?} in {region}")]
    NotFound { name: String, region: Region },
}

/// Failures while loading a scoring configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("scoring config JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("candidate pool size must be at least 1")]
    EmptyPool,
    #[error("sample range {min}..={max} is empty")]
    EmptySampleRange { min: usize, max: usize },
    #[error("max score {value} is above 100")]
    MaxScoreOutOfRange { value: u8 },
}
