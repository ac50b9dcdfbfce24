//! Processor interface for packaging workflows.
//!
//! Workflow hosts drive processors through a shared string environment: the
//! processor reads its input variables from it and writes its outputs back.
//! [`FileZillaUrlProcessor`] reads `product_name` and writes `version` and
//! `url`.

use std::collections::BTreeMap;

use crate::error::{ResolveError, ResolveResult};
use crate::http::HttpClient;
use crate::product::product_names;
use crate::provider::UrlProvider;

/// Variables shared between a workflow host and its processors.
pub type Environment = BTreeMap<String, String>;

pub const PRODUCT_NAME: &str = "product_name";
pub const VERSION: &str = "version";
pub const URL: &str = "url";

/// Description of one input or output variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInfo {
    pub name: &'static str,
    pub required: bool,
    pub description: String,
}

/// Processor metadata exposed to the host.
#[derive(Debug, Clone)]
pub struct ProcessorInfo {
    pub description: &'static str,
    pub input_variables: Vec<VariableInfo>,
    pub output_variables: Vec<VariableInfo>,
}

/// Processor that resolves FileZilla download URLs.
pub struct FileZillaUrlProcessor<C: HttpClient> {
    provider: UrlProvider<C>,
}

impl<C: HttpClient> FileZillaUrlProcessor<C> {
    pub fn new(provider: UrlProvider<C>) -> Self {
        Self { provider }
    }

    /// Processor metadata.
    pub fn info() -> ProcessorInfo {
        ProcessorInfo {
            description:
                "Provides a version and compressed download for the FileZilla product given.",
            input_variables: vec![VariableInfo {
                name: PRODUCT_NAME,
                required: true,
                description: format!(
                    "Product to fetch URL for. One of: {}",
                    product_names()
                ),
            }],
            output_variables: vec![
                VariableInfo {
                    name: VERSION,
                    required: false,
                    description: "Version of the product.".to_string(),
                },
                VariableInfo {
                    name: URL,
                    required: false,
                    description: "Download URL.".to_string(),
                },
            ],
        }
    }

    /// Runs the processor against `env`.
    ///
    /// On success `version` and `url` are written to `env` and the
    /// confirmation message is returned. On failure `env` is left untouched.
    pub fn process(&self, env: &mut Environment) -> ResolveResult<String> {
        let product_name = env
            .get(PRODUCT_NAME)
            .ok_or_else(|| ResolveError::MissingInput {
                name: PRODUCT_NAME.to_string(),
            })?;

        let release = self.provider.resolve(product_name)?;
        let message = format!("Found URL {}", release.url);

        env.insert(VERSION.to_string(), release.version);
        env.insert(URL.to_string(), release.url);

        Ok(message)
    }
}
