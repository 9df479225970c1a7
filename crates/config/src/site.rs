use std::collections::BTreeMap;

use crate::Result;
use crate::Status;

/// Keys that were not recognized, kept verbatim.
pub type Extra = BTreeMap<String, serde_yaml::Value>;

/// Site options as written by the user.
///
/// Values are kept as raw strings; checking them is left to the resolver so
/// that bad values are reported against the field they came from.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(rename = "trailingSlash", alias = "trailing_slash")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<String>,
    #[serde(skip_serializing_if = "BuildOptions::is_empty")]
    pub build: BuildOptions,
    /// Named overlays, one per deployment target.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, SiteOptions>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl SiteOptions {
    /// Field-wise merge, `self` takes precedence.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            site,
            base,
            trailing_slash,
            build,
            profiles,
            extra,
        } = self;
        Self {
            site: site.or_else(|| other.site.clone()),
            base: base.or_else(|| other.base.clone()),
            trailing_slash: trailing_slash.or_else(|| other.trailing_slash.clone()),
            build: build.merge(&other.build),
            profiles: merge_maps(profiles, &other.profiles),
            extra: merge_maps(extra, &other.extra),
        }
    }

    /// Overlay the profile `name` onto the top-level options.
    ///
    /// The returned options no longer carry any profiles.
    pub fn with_profile(mut self, name: &str) -> Result<Self> {
        let profile = self.profiles.remove(name).ok_or_else(|| {
            let known = self
                .profiles
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            Status::new("Unknown profile")
                .context_with(|c| c.insert("Profile", name.to_owned()))
                .context_with(|c| c.insert("Available", known.clone()))
        })?;
        if !profile.profiles.is_empty() {
            return Err(Status::new("Profiles cannot declare profiles")
                .context_with(|c| c.insert("Profile", name.to_owned())));
        }
        log::debug!("Using profile `{name}`");

        self.profiles.clear();
        Ok(profile.merge(&self))
    }

    /// Dotted names of every key that was not recognized.
    pub fn unknown_fields(&self) -> Vec<String> {
        let top = self.extra.keys().cloned();
        let build = self.build.extra.keys().map(|k| format!("build.{k}"));
        top.chain(build).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct BuildOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl BuildOptions {
    pub fn is_empty(&self) -> bool {
        self.format.is_none() && self.extra.is_empty()
    }

    pub fn merge(self, other: &Self) -> Self {
        let Self { format, extra } = self;
        Self {
            format: format.or_else(|| other.format.clone()),
            extra: merge_maps(extra, &other.extra),
        }
    }
}

/// Shallow merge, entries already in `primary` win.
fn merge_maps<V: Clone>(
    mut primary: BTreeMap<String, V>,
    secondary: &BTreeMap<String, V>,
) -> BTreeMap<String, V> {
    for (key, value) in secondary {
        primary
            .entry(key.to_owned())
            .or_insert_with(|| value.clone());
    }
    primary
}
