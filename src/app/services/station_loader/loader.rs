//! Fetching and structural checks for the raw station payload

use super::StationLoader;
use super::source::DataSource;
use crate::app::models::StationDataset;
use crate::app::services::station_cleaner::clean_stations;
use crate::config::LoaderConfig;
use crate::{Error, Result};
use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

impl StationLoader {
    /// Create a loader from configuration
    ///
    /// # Errors
    /// * Returns `Error::Configuration` for an empty source or if the HTTP client
    ///   cannot be constructed
    pub fn new(config: &LoaderConfig) -> Result<Self> {
        let source = DataSource::parse(&config.source)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { source, client })
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Fetch the raw payload and check that it is a non-empty JSON array
    ///
    /// # Errors
    /// * `Error::Transport` / `Error::UnexpectedStatus` for network failures and
    ///   non-success responses
    /// * `Error::Io` if a file source cannot be read
    /// * `Error::Structural` if the body is not JSON, not an array, or empty
    pub async fn fetch_raw(&self) -> Result<Vec<Value>> {
        let bytes = match &self.source {
            DataSource::Http(url) => self.fetch_http(url).await?,
            DataSource::File(path) => read_file(path).await?,
        };
        debug!("Fetched {} bytes from {}", bytes.len(), self.source);

        let payload: Value = serde_json::from_slice(&bytes)
            .map_err(|e| Error::structural(format!("body is not valid JSON: {e}")))?;

        parse_payload(payload)
    }

    /// Fetch, validate and clean the dataset
    ///
    /// # Errors
    /// Everything [`fetch_raw`](Self::fetch_raw) returns, plus `Error::EmptyDataset`
    /// when no station survives cleaning
    pub async fn load(&self) -> Result<StationDataset> {
        info!("Loading station data from {}", self.source);
        let start_time = Instant::now();

        let raw = self.fetch_raw().await?;
        let result = clean_stations(&raw)?;
        let dataset = StationDataset::from_cleaning(result);

        info!(
            "Loaded {} stations in {:.2}s ({})",
            dataset.len(),
            start_time.elapsed().as_secs_f64(),
            dataset.stats().summary()
        );

        Ok(dataset)
    }

    async fn fetch_http(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::transport(url, e.to_string(), Some(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::unexpected_status(status.as_u16(), url));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(url, e.to_string(), Some(e)))?;

        Ok(body.to_vec())
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read '{}'", path.display()), e))
}

/// Accept a payload only if it is a non-empty JSON array
///
/// The elements themselves are not inspected here; that is the validator's job.
pub fn parse_payload(payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(records) if records.is_empty() => {
            Err(Error::structural("payload is an empty array"))
        }
        Value::Array(records) => Ok(records),
        other => Err(Error::structural(format!(
            "expected a JSON array of stations, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
