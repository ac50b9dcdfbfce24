//! Product identifiers and release channels.
//!
//! FileZilla publishes three release tracks in its update manifest. Callers
//! name a product (`filezilla`, `filezilla_beta`, ...) and the product table
//! maps it to exactly one [`Channel`].

use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// A release track listed in the FileZilla update manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Release,
    Beta,
    Nightly,
}

impl Channel {
    /// Token that marks a manifest line as belonging to this channel.
    pub fn token(&self) -> &'static str {
        match self {
            Channel::Release => "release",
            Channel::Beta => "beta",
            Channel::Nightly => "nightly",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Product identifiers accepted by the provider, in display order.
pub const PRODUCTS: &[(&str, Channel)] = &[
    ("filezilla", Channel::Release),
    ("filezilla_release", Channel::Release),
    ("filezilla_beta", Channel::Beta),
    ("filezilla_nightly", Channel::Nightly),
];

/// Comma separated list of valid product identifiers.
pub fn product_names() -> String {
    PRODUCTS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A validated product identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: &'static str,
    channel: Channel,
}

impl Product {
    /// Canonical (lower-case) product identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl FromStr for Product {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        PRODUCTS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|&(name, channel)| Product { name, channel })
            .ok_or_else(|| ResolveError::InvalidProduct {
                name: lowered,
                valid: product_names(),
            })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
