//! Station Reviews Library
//!
//! A Rust library for turning raw gas-station datasets (stations with embedded
//! customer reviews) into a clean, deduplicated collection ready for a map dashboard.
//!
//! This library provides tools for:
//! - Validating raw station records against their identity and geographic fields
//! - Deduplicating stations by `place_id` with a stable first-wins policy
//! - Computing summary statistics and data-quality reports over the cleaned dataset
//! - Loading the raw dataset once from an HTTP endpoint or a local JSON file
//! - Case-insensitive search over station names and addresses

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod search;
        pub mod station_cleaner;
        pub mod station_loader;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ReviewRecord, StationDataset, StationRecord};
pub use app::services::station_cleaner::{CleaningResult, CleaningStats, clean_stations};
pub use app::services::statistics::{DatasetStats, calculate_stats};
pub use config::Config;

/// Result type alias for the station reviews library
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure classes reported to the caller of a load
///
/// The dashboard shows every class the same way (end of loading, manual retry
/// offered), but callers that want to distinguish them can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network, HTTP status or file read failure
    Transport,
    /// Payload is not a non-empty JSON array
    Structural,
    /// No station survived cleaning
    EmptyDataset,
    /// Anything else (configuration, interruption)
    Other,
}

/// Error types for station loading, cleaning and reporting
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Network or TLS failure while fetching the dataset
    #[error("Transport error fetching '{location}': {message}")]
    Transport {
        location: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Non-success HTTP status
    #[error("HTTP error! status: {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Payload could not be interpreted as a station array
    #[error("Invalid or empty data received: {message}")]
    Structural { message: String },

    /// Nothing survived cleaning
    #[error(
        "No valid station data found after cleaning ({valid}/{total_input} valid, {unique} unique)"
    )]
    EmptyDataset {
        total_input: usize,
        valid: usize,
        unique: usize,
    },

    /// JSON (de)serialization error outside of payload parsing
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Station lookup failed
    #[error("Station not found: place_id = {place_id}")]
    StationNotFound { place_id: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a transport error with an optional underlying HTTP client error
    pub fn transport(
        location: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Transport {
            location: location.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unexpected HTTP status error
    pub fn unexpected_status(status: u16, url: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a structural payload error
    pub fn structural(message: impl Into<String>) -> Self {
        Self::Structural {
            message: message.into(),
        }
    }

    /// Create an empty-after-cleaning error
    pub fn empty_dataset(total_input: usize, valid: usize, unique: usize) -> Self {
        Self::EmptyDataset {
            total_input,
            valid,
            unique,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a station not found error
    pub fn station_not_found(place_id: impl Into<String>) -> Self {
        Self::StationNotFound {
            place_id: place_id.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Classify the error for display and retry decisions
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Io { .. } | Self::Transport { .. } | Self::UnexpectedStatus { .. } => {
                FailureKind::Transport
            }
            Self::Structural { .. } => FailureKind::Structural,
            Self::EmptyDataset { .. } => FailureKind::EmptyDataset,
            Self::Json { .. }
            | Self::Configuration { .. }
            | Self::StationNotFound { .. }
            | Self::ProcessingInterrupted { .. } => FailureKind::Other,
        }
    }

    /// Whether re-running the whole fetch-and-clean path could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.failure_kind(),
            FailureKind::Transport | FailureKind::Structural | FailureKind::EmptyDataset
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let location = error
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Transport {
            location,
            message: error.to_string(),
            source: Some(error),
        }
    }
}
