//! Data source resolution
//!
//! A source string is either an HTTP(S) URL or a filesystem path, optionally
//! written with a `file://` prefix.

use crate::constants::{FILE_SCHEME, HTTP_SCHEMES};
use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Location of the raw station payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Remote JSON resource fetched with a single GET
    Http(String),
    /// Local JSON file
    File(PathBuf),
}

impl DataSource {
    /// Resolve a source string
    ///
    /// # Errors
    /// * Returns `Error::Configuration` for an empty source
    pub fn parse(source: &str) -> Result<Self> {
        let source = source.trim();
        if source.is_empty() {
            return Err(Error::configuration("Data source must not be empty"));
        }

        let lowered = source.to_ascii_lowercase();
        if HTTP_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
            return Ok(Self::Http(source.to_string()));
        }

        let path = source.strip_prefix(FILE_SCHEME).unwrap_or(source);
        if path.is_empty() {
            return Err(Error::configuration(format!(
                "File source '{source}' has no path"
            )));
        }
        Ok(Self::File(PathBuf::from(path)))
    }

    /// Human-readable location used in logs and error messages
    pub fn location(&self) -> String {
        match self {
            Self::Http(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl FromStr for DataSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}
