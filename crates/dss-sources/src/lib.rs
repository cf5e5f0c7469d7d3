//! # dss-sources
//!
//! Dataset loaders for the data safety catalog.
//!
//! Five sources are read once at startup, each from a local file or an
//! HTTP(S) URL:
//! - the app directory (JSON)
//! - the relation-icon ("arrows") directory (JSON)
//! - the datatype directory (JSON)
//! - the shared and collected exports (CSV)
//!
//! This crate only fetches and decodes. Joining the datasets happens in
//! `dss-safety`.

pub mod directories;
pub mod tabular;

mod error;
mod http;

pub use error::SourceError;
pub use tabular::TableRow;

use std::fmt;
use std::path::PathBuf;

use dss_config::HttpConfig;
use dss_core::entities::{AppEntry, DataTypeEntry, RelationIcon};

use crate::http::check_response;

// ── Types ──────────────────────────────────────────────────────────

/// Where a dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Url(String),
    Path(PathBuf),
}

impl Location {
    /// `http://` and `https://` values are URLs; anything else is a path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Fetches dataset text from disk or over HTTP and decodes it.
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: reqwest::Client,
}

impl SourceClient {
    /// Create a client using the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &HttpConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http })
    }

    /// Read the raw text of a source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] for unreadable files, or an HTTP error
    /// variant for failed requests.
    pub async fn fetch_text(&self, location: &Location) -> Result<String, SourceError> {
        match location {
            Location::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            Location::Url(url) => {
                let resp = check_response(self.http.get(url).send().await?).await?;
                Ok(resp.text().await?)
            }
        }
    }

    /// Load the app directory.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch or the JSON decode fails.
    pub async fn load_apps(&self, location: &Location) -> Result<Vec<AppEntry>, SourceError> {
        let text = self.fetch_text(location).await?;
        directories::parse_apps(&text)
    }

    /// Load the relation-icon directory.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch or the JSON decode fails.
    pub async fn load_relations(
        &self,
        location: &Location,
    ) -> Result<Vec<RelationIcon>, SourceError> {
        let text = self.fetch_text(location).await?;
        directories::parse_relations(&text)
    }

    /// Load the datatype directory.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch or the JSON decode fails.
    pub async fn load_datatypes(
        &self,
        location: &Location,
    ) -> Result<Vec<DataTypeEntry>, SourceError> {
        let text = self.fetch_text(location).await?;
        directories::parse_datatypes(&text)
    }

    /// Load one of the tabular exports.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the fetch or the CSV decode fails.
    pub async fn load_table(&self, location: &Location) -> Result<Vec<TableRow>, SourceError> {
        let text = self.fetch_text(location).await?;
        tabular::parse_table(&text)
    }
}
