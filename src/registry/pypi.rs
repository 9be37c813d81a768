use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::RegistryConfig;
use crate::models::RegistryRecord;

/// Build the JSON API URL for a package, optionally pinned to a version.
pub fn package_url(base_url: &str, package: &str, version: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match version {
        Some(version) => format!("{}/{}/{}/json", base, package, version),
        None => format!("{}/{}/json", base, package),
    }
}

/// Client for the PyPI JSON API.
pub struct PypiClient {
    client: Client,
    base_url: String,
}

impl PypiClient {
    /// Build a client from the registry section of the config.
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }
}

impl super::Registry for PypiClient {
    async fn fetch(&self, package: &str, version: Option<&str>) -> Result<RegistryRecord> {
        let url = package_url(&self.base_url, package, version);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("registry lookup for {} failed", package))?;

        let record = response
            .json::<RegistryRecord>()
            .await
            .with_context(|| format!("unexpected registry response for {}", package))?;

        Ok(record)
    }
}
