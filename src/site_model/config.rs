use std::fmt;

use crate::error::ConfigError;
use crate::error::Result;

use super::BasePath;
use super::BuildFormat;
use super::SiteUrl;
use super::TrailingSlash;

/// How forgiving resolution is about sloppy input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Normalize `base` and warn about unknown fields.
    #[default]
    Lenient,
    /// Reject a non-canonical `base` and any unknown field.
    Strict,
}

/// Canonical site configuration, handed to the generator at build start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SiteConfig {
    pub site: Option<SiteUrl>,
    pub base: BasePath,
    pub trailing_slash: TrailingSlash,
    pub build_format: BuildFormat,
}

impl SiteConfig {
    pub fn from_options(
        options: siteconf_config::SiteOptions,
        strictness: Strictness,
    ) -> Result<Self> {
        let unknown = options.unknown_fields();
        match strictness {
            Strictness::Strict => {
                if let Some(field) = unknown.into_iter().next() {
                    return Err(ConfigError::UnknownField { field });
                }
            }
            Strictness::Lenient => {
                for field in unknown {
                    log::warn!("Ignoring unknown field `{field}`");
                }
            }
        }
        if !options.profiles.is_empty() {
            log::trace!(
                "No profile selected, ignoring {} profile(s)",
                options.profiles.len()
            );
        }

        let siteconf_config::SiteOptions {
            site,
            base,
            trailing_slash,
            build,
            ..
        } = options;

        let site = site.as_deref().map(SiteUrl::parse).transpose()?;

        let base = match base {
            None => BasePath::root(),
            Some(raw) => match strictness {
                Strictness::Strict => BasePath::strict(&raw)?,
                Strictness::Lenient => {
                    let base = BasePath::normalize(&raw);
                    if base.as_str() != raw {
                        log::debug!("Normalized base `{raw}` to `{base}`");
                    }
                    base
                }
            },
        };

        let trailing_slash = trailing_slash
            .as_deref()
            .map(str::parse::<TrailingSlash>)
            .transpose()?
            .unwrap_or_default();

        let build_format = build
            .format
            .as_deref()
            .map(str::parse::<BuildFormat>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            site,
            base,
            trailing_slash,
            build_format,
        })
    }

    /// Normalized options that resolve back to `self`.
    pub fn to_options(&self) -> siteconf_config::SiteOptions {
        let mut options = siteconf_config::SiteOptions::default();
        options.site = self.site.as_ref().map(|s| s.as_str().to_owned());
        options.base = Some(self.base.as_str().to_owned());
        options.trailing_slash = Some(self.trailing_slash.as_str().to_owned());
        options.build.format = Some(self.build_format.as_str().to_owned());
        options
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: None,
            base: BasePath::root(),
            trailing_slash: TrailingSlash::default(),
            build_format: BuildFormat::default(),
        }
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_options())
    }
}

/// Resolve `options` leniently.
pub fn resolve(options: siteconf_config::SiteOptions) -> Result<SiteConfig> {
    SiteConfig::from_options(options, Strictness::Lenient)
}

#[cfg(test)]
mod test {
    use siteconf_config::SiteOptions;

    use super::*;

    fn options(content: &str) -> SiteOptions {
        SiteOptions::parse(content, siteconf_config::FileFormat::Yaml).unwrap()
    }

    #[test]
    fn resolve_defaults() {
        let config = resolve(SiteOptions::default()).unwrap();
        assert_eq!(config.site, None);
        assert_eq!(config.base.as_str(), "/");
        assert_eq!(config.trailing_slash, TrailingSlash::Ignore);
        assert_eq!(config.build_format, BuildFormat::File);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn resolve_keeps_site() {
        for raw in [
            "https://mikolajcieszczyk.github.io",
            "https://mikolajcieszczyk.github.io/",
            "http://localhost:4321/preview",
        ] {
            let mut options = SiteOptions::default();
            options.site = Some(raw.to_owned());
            let config = resolve(options).unwrap();
            assert_eq!(config.site.unwrap().as_str(), raw);
        }
    }

    #[test]
    fn resolve_wraps_base_in_slashes() {
        for raw in ["mc-blog", "docs/v1", "a.b", "a//b", " blog", r"a\b", "v 1.0"] {
            let mut options = SiteOptions::default();
            options.base = Some(raw.to_owned());
            let config = resolve(options).unwrap();
            assert_eq!(config.base.as_str(), format!("/{raw}/"), "{raw:?}");
        }
    }

    #[test]
    fn resolve_empty_base_is_root() {
        let config = resolve(options("base: ''\n")).unwrap();
        assert_eq!(config.base.as_str(), "/");
    }

    #[test]
    fn resolve_full() {
        let config = resolve(options(
            "site: https://mikolajcieszczyk.github.io\n\
             base: /\n\
             trailingSlash: always\n\
             build:\n  format: directory\n",
        ))
        .unwrap();
        assert_eq!(
            config.site.as_ref().map(SiteUrl::as_str),
            Some("https://mikolajcieszczyk.github.io")
        );
        assert!(config.base.is_root());
        assert_eq!(config.trailing_slash, TrailingSlash::Always);
        assert_eq!(config.build_format, BuildFormat::Directory);
    }

    #[test]
    fn resolve_invalid_trailing_slash() {
        let err = resolve(options("trailingSlash: sometimes\n")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnum {
                field: "trailingSlash",
                ..
            }
        ));
    }

    #[test]
    fn resolve_invalid_build_format() {
        let err = resolve(options("build:\n  format: html\n")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnum {
                field: "build.format",
                ..
            }
        ));
    }

    #[test]
    fn resolve_invalid_site() {
        let err = resolve(options("site: not-a-url\n")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSite { .. }));
    }

    #[test]
    fn lenient_ignores_unknown_fields() {
        let config = resolve(options("title: Blog\nbuild:\n  minify: true\n")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn strict_rejects_unknown_fields() {
        let err = SiteConfig::from_options(
            options("build:\n  minify: true\n"),
            Strictness::Strict,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownField {
                field: "build.minify".to_owned()
            }
        );
    }

    #[test]
    fn strict_rejects_unnormalized_base() {
        let err =
            SiteConfig::from_options(options("base: mc-blog\n"), Strictness::Strict).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBase {
                value: "mc-blog".to_owned()
            }
        );
    }

    #[test]
    fn strict_accepts_canonical() {
        let config = SiteConfig::from_options(
            options("base: /mc-blog/\ntrailingSlash: never\n"),
            Strictness::Strict,
        )
        .unwrap();
        assert_eq!(config.base.as_str(), "/mc-blog/");
        assert_eq!(config.trailing_slash, TrailingSlash::Never);
    }

    #[test]
    fn profiles_are_not_unknown_fields() {
        let config = SiteConfig::from_options(
            options("base: /\nprofiles:\n  sub:\n    base: /mc-blog/\n"),
            Strictness::Strict,
        )
        .unwrap();
        assert!(config.base.is_root());
    }

    #[test]
    fn resolve_is_idempotent() {
        let inputs = [
            "",
            "base: mc-blog\n",
            "site: https://example.com\nbase: //a//b\ntrailingSlash: never\n",
            "site: http://localhost:4321\nbuild:\n  format: directory\ntitle: ignored\n",
        ];
        for input in inputs {
            let once = resolve(options(input)).unwrap();
            let twice = resolve(once.to_options()).unwrap();
            assert_eq!(once, twice, "{input:?}");

            let strict = SiteConfig::from_options(once.to_options(), Strictness::Strict).unwrap();
            assert_eq!(once, strict, "{input:?}");
        }
    }

    #[test]
    fn display_is_yaml() {
        let config = resolve(options(
            "site: https://mikolajcieszczyk.github.io\nbase: mc-blog\n",
        ))
        .unwrap();
        assert_eq!(
            config.to_string(),
            "site: https://mikolajcieszczyk.github.io\n\
             base: /mc-blog/\n\
             trailingSlash: ignore\n\
             build:\n  format: file\n"
        );
    }
}
