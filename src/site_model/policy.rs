use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Whether generated page URLs end with `/`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TrailingSlash {
    Always,
    Never,
    /// Keep whatever the route was written with.
    #[default]
    Ignore,
}

impl TrailingSlash {
    pub const FIELD: &'static str = "trailingSlash";
    pub const VARIANTS: &'static [&'static str] = &["always", "never", "ignore"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Ignore => "ignore",
        }
    }
}

impl FromStr for TrailingSlash {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "ignore" => Ok(Self::Ignore),
            _ => Err(ConfigError::InvalidEnum {
                field: Self::FIELD,
                value: value.to_owned(),
                expected: Self::VARIANTS,
            }),
        }
    }
}

impl fmt::Display for TrailingSlash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk layout of generated pages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BuildFormat {
    /// `name/index.html`
    Directory,
    /// `name.html`
    #[default]
    File,
}

impl BuildFormat {
    pub const FIELD: &'static str = "build.format";
    pub const VARIANTS: &'static [&'static str] = &["directory", "file"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
        }
    }
}

impl FromStr for BuildFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "directory" => Ok(Self::Directory),
            "file" => Ok(Self::File),
            _ => Err(ConfigError::InvalidEnum {
                field: Self::FIELD,
                value: value.to_owned(),
                expected: Self::VARIANTS,
            }),
        }
    }
}

impl fmt::Display for BuildFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trailing_slash_parse() {
        assert_eq!("always".parse::<TrailingSlash>(), Ok(TrailingSlash::Always));
        assert_eq!("never".parse::<TrailingSlash>(), Ok(TrailingSlash::Never));
        assert_eq!("ignore".parse::<TrailingSlash>(), Ok(TrailingSlash::Ignore));
    }

    #[test]
    fn trailing_slash_rejects_unknown() {
        let err = "sometimes".parse::<TrailingSlash>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnum {
                field: "trailingSlash",
                value: "sometimes".to_owned(),
                expected: TrailingSlash::VARIANTS,
            }
        );
    }

    #[test]
    fn trailing_slash_is_case_sensitive() {
        assert!("Always".parse::<TrailingSlash>().is_err());
    }

    #[test]
    fn build_format_parse() {
        assert_eq!("directory".parse::<BuildFormat>(), Ok(BuildFormat::Directory));
        assert_eq!("file".parse::<BuildFormat>(), Ok(BuildFormat::File));
        assert!(matches!(
            "html".parse::<BuildFormat>(),
            Err(ConfigError::InvalidEnum {
                field: "build.format",
                ..
            })
        ));
    }

    #[test]
    fn display_matches_parse() {
        for variant in TrailingSlash::VARIANTS {
            let parsed: TrailingSlash = variant.parse().unwrap();
            assert_eq!(parsed.to_string(), *variant);
        }
        for variant in BuildFormat::VARIANTS {
            let parsed: BuildFormat = variant.parse().unwrap();
            assert_eq!(parsed.to_string(), *variant);
        }
    }
}
