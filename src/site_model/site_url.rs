use std::fmt;

use crate::error::ConfigError;
use crate::error::Result;

/// Absolute site origin, used for canonical links.
///
/// Keeps the text exactly as configured alongside the parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    raw: String,
    url: url::Url,
}

impl SiteUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: String| ConfigError::InvalidSite {
            value: raw.to_owned(),
            reason,
        };

        let url = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_owned()));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_owned()));
        }

        Ok(Self {
            raw: raw.to_owned(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Resolve an absolute path against the site's origin.
    pub fn join(&self, path: &str) -> Option<url::Url> {
        self.url.join(path).ok()
    }
}

impl AsRef<str> for SiteUrl {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
