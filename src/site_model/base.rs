use std::fmt;

use crate::error::ConfigError;
use crate::error::Result;

/// Path prefix under which every page is served.
///
/// Always starts and ends with `/`; the root prefix is just `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    /// Add a missing leading or trailing slash, keeping the rest as written.
    ///
    /// `mc-blog` becomes `/mc-blog/`; blank input and bare slashes become `/`.
    pub fn normalize(raw: &str) -> Self {
        if raw.trim().is_empty() || raw.chars().all(|c| c == '/') {
            return Self::root();
        }
        let mut base = String::with_capacity(raw.len() + 2);
        if !raw.starts_with('/') {
            base.push('/');
        }
        base.push_str(raw);
        if !raw.ends_with('/') {
            base.push('/');
        }
        Self(base)
    }

    /// Accept `raw` only if it is already in canonical form.
    pub fn strict(raw: &str) -> Result<Self> {
        let base = Self::normalize(raw);
        if base.as_str() == raw {
            Ok(base)
        } else {
            Err(ConfigError::InvalidBase {
                value: raw.to_owned(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// The prefix without its trailing slash, empty for the root.
    pub(crate) fn trimmed(&self) -> &str {
        self.0.trim_end_matches('/')
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for BasePath {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
