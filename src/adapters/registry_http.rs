//! npm registry and Node.js release index client using reqwest.

use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::node_release::major_version;
use crate::domain::{AppError, PackageName, StrapConfig};
use crate::ports::{NodeReleaseIndex, PackageRegistry};

const TIMEOUT_SECS: u64 = 30;

/// HTTP client for registry metadata.
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    registry_url: Url,
    node_dist_index_url: Url,
    client: Client,
}

impl HttpRegistryClient {
    pub fn new(config: &StrapConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            registry_url: config.registry_url.clone(),
            node_dist_index_url: config.node_dist_index_url.clone(),
            client,
        })
    }

    /// Append the name as one path segment; scoped names encode the `/`.
    fn package_url(&self, name: &PackageName) -> Result<Url, AppError> {
        let mut url = self.registry_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Http {
                url: self.registry_url.to_string(),
                details: "registry URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(name.as_str());
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct PackageDocument {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NodeRelease {
    version: String,
    lts: serde_json::Value,
}

impl PackageRegistry for HttpRegistryClient {
    fn package_exists(&self, name: &PackageName) -> Result<bool, AppError> {
        let url = self.package_url(name)?;
        debug!(%url, "querying registry");
        let http_err = |details: String| AppError::Http { url: url.to_string(), details };

        let response = self.client.get(url.clone()).send().map_err(|e| http_err(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(http_err(format!("unexpected status {}", response.status())));
        }
        let document: PackageDocument = response.json().map_err(|e| http_err(e.to_string()))?;
        Ok(document.name.is_some())
    }
}

impl NodeReleaseIndex for HttpRegistryClient {
    fn lts_majors(&self) -> Result<BTreeSet<u64>, AppError> {
        let url = &self.node_dist_index_url;
        debug!(%url, "fetching node release index");
        let http_err = |details: String| AppError::Http { url: url.to_string(), details };

        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| http_err(e.to_string()))?;
        let releases: Vec<NodeRelease> = response.json().map_err(|e| http_err(e.to_string()))?;

        Ok(releases
            .iter()
            .filter(|release| !matches!(release.lts, serde_json::Value::Bool(false)))
            .filter(|release| !release.lts.is_null())
            .filter_map(|release| major_version(&release.version))
            .collect())
    }
}
