//! Station dataset loading
//!
//! Fetches the raw station payload exactly once from an HTTP(S) endpoint or a local
//! JSON file, checks that it is a non-empty JSON array, and runs it through the
//! cleaning pipeline to produce a
//! [`StationDataset`](crate::app::models::StationDataset).
//!
//! There are no automatic retries: any failure ends the load and the caller decides
//! whether to try again (see [`crate::Error::is_retryable`]).

use reqwest::Client;

pub mod loader;
pub mod source;

#[cfg(test)]
pub mod tests;

pub use loader::parse_payload;
pub use source::DataSource;

/// One-shot loader for the station dataset
#[derive(Debug, Clone)]
pub struct StationLoader {
    /// Where the payload is read from
    pub(crate) source: DataSource,

    /// HTTP client, configured with the loader timeouts and user agent
    pub(crate) client: Client,
}
