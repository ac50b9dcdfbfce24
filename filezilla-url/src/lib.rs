//! filezilla-url - FileZilla version and download URL lookup
//!
//! This library reads FileZilla's update manifest and reports the version and
//! download URL of the newest build on a release channel, for use by
//! packaging and deployment automation.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod manifest;
pub mod processor;
pub mod product;
pub mod provider;

pub use config::{config_file_path, ProviderConfig, DEFAULT_MANIFEST_URL};
pub use error::{ConfigError, ResolveError, ResolveResult};
pub use http::{HttpClient, ReqwestClient};
pub use manifest::{find_release, Release};
pub use processor::{Environment, FileZillaUrlProcessor, ProcessorInfo, VariableInfo};
pub use product::{Channel, Product, PRODUCTS};
pub use provider::UrlProvider;
