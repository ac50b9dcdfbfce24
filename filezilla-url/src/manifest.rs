//! Update manifest scanning.
//!
//! The update check endpoint answers with plain text, one record per line:
//!
//! ```text
//! release 3.55.1 https://download.filezilla-project.org/.../FileZilla_3.55.1_macosx-x86.app.tar.bz2 ...
//! ```
//!
//! After leading/trailing whitespace is stripped and the line is split on
//! whitespace, field 1 is the version and field 2 the download URL. Some
//! mirrors prefix records with a `YYYY-MM-DD HH:MM:SS` timestamp instead of
//! a leading keyword; the date and time together count as field 0.
//!
//! A line belongs to a channel when the channel token occurs *anywhere* in
//! it as a plain substring. This is deliberately not a whole-word match: a
//! beta URL that happened to contain `release` would also count as a release
//! line. Existing manifests never do this, but callers should not rely on
//! stricter matching.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ResolveError, ResolveResult};
use crate::product::Channel;

/// Version and download URL resolved for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: String,
    pub url: String,
}

/// Scans `body` for the latest record of `channel`.
///
/// Every matching line overwrites the previous match, so the last relevant
/// line in document order wins. A matching line with fewer than three
/// fields aborts the scan with [`ResolveError::MalformedRecord`].
pub fn find_release(body: &str, channel: Channel) -> ResolveResult<Release> {
    let token = channel.token();
    let mut found: Option<Release> = None;

    for line in body.split('\n') {
        if !line.contains(token) {
            continue;
        }

        let fields = record_fields(line);
        let (version, url) = match fields.as_slice() {
            [_, version, url, ..] => (*version, *url),
            _ => {
                warn!(channel = %channel, line = line.trim(), "Manifest record has too few fields");
                return Err(ResolveError::MalformedRecord {
                    channel,
                    line: line.trim().to_string(),
                });
            }
        };

        debug!(channel = %channel, version, url, "Matched manifest record");
        found = Some(Release {
            version: version.to_string(),
            url: url.to_string(),
        });
    }

    match found {
        Some(release) if !release.version.is_empty() && !release.url.is_empty() => Ok(release),
        _ => Err(ResolveError::NotFound { channel }),
    }
}

/// Splits a record on whitespace, folding a leading date/time pair into one field.
fn record_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split_whitespace().collect();
    let timestamped = match fields.as_slice() {
        [date, time, ..] => {
            NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S")
                .is_ok()
        }
        _ => false,
    };
    if timestamped {
        fields.remove(1);
    }
    fields
}
