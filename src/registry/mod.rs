//! Package registry clients.
//!
//! A [`Registry`] returns the registry's JSON document for a package, pinned
//! to a version when one is given. Transport, HTTP status and decoding
//! failures are returned as errors and are not retried.

pub mod pypi;

use anyhow::Result;

use crate::models::RegistryRecord;

pub trait Registry {
    async fn fetch(&self, package: &str, version: Option<&str>) -> Result<RegistryRecord>;
}
