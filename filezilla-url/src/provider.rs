//! FileZilla URL provider.
//!
//! Resolves a product identifier to the version and download URL of the
//! newest build on its channel:
//!
//! 1. validate the product (no network access for unknown products)
//! 2. fetch the update manifest
//! 3. scan it for the channel's last record
//!
//! # Example
//!
//! ```ignore
//! use filezilla_url::{ReqwestClient, UrlProvider, DEFAULT_MANIFEST_URL};
//!
//! let client = ReqwestClient::new()?;
//! let provider = UrlProvider::new(client, DEFAULT_MANIFEST_URL);
//! let release = provider.resolve("filezilla_beta")?;
//! println!("{} {}", release.version, release.url);
//! ```

use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::ResolveResult;
use crate::http::{HttpClient, ReqwestClient};
use crate::manifest::{find_release, Release};
use crate::product::Product;

/// Resolves product versions from the FileZilla update manifest.
pub struct UrlProvider<C: HttpClient> {
    http_client: C,
    manifest_url: String,
}

impl<C: HttpClient> UrlProvider<C> {
    /// Creates a provider that reads the manifest at `manifest_url`.
    pub fn new(http_client: C, manifest_url: impl Into<String>) -> Self {
        Self {
            http_client,
            manifest_url: manifest_url.into(),
        }
    }

    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    /// Resolves `product_name` (case-insensitive) to its latest release.
    pub fn resolve(&self, product_name: &str) -> ResolveResult<Release> {
        let product: Product = product_name.parse()?;
        debug!(product = %product, channel = %product.channel(), "Resolving product");

        let body = self.fetch_manifest()?;
        let release = find_release(&body, product.channel())?;

        info!(product = %product, version = %release.version, "Found URL {}", release.url);
        Ok(release)
    }

    fn fetch_manifest(&self) -> ResolveResult<String> {
        debug!(url = %self.manifest_url, "Fetching update manifest");
        let bytes = self.http_client.get(&self.manifest_url)?;
        debug!(bytes = bytes.len(), "Fetched update manifest");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl UrlProvider<ReqwestClient> {
    /// Creates a provider backed by a real HTTP client built from `config`.
    pub fn from_config(config: &ProviderConfig) -> ResolveResult<Self> {
        let client = ReqwestClient::build(config.timeout, config.user_agent.as_deref())?;
        Ok(Self::new(client, config.manifest_url.clone()))
    }
}
