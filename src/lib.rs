//! Resolve the options of a static site into a canonical [`SiteConfig`].
//!
//! Options are read by [`siteconf_config`] and validated here:
//!
//! ```
//! let mut options = siteconf::SiteOptions::default();
//! options.base = Some("mc-blog".to_owned());
//! let config = siteconf::resolve(options).unwrap();
//! assert_eq!(config.base.as_str(), "/mc-blog/");
//! assert_eq!(config.page_url("about"), "/mc-blog/about");
//! ```

pub mod error;
pub mod site_model;

pub use crate::error::ConfigError;
pub use crate::site_model::BasePath;
pub use crate::site_model::BuildFormat;
pub use crate::site_model::SiteConfig;
pub use crate::site_model::SiteOptions;
pub use crate::site_model::SiteUrl;
pub use crate::site_model::Strictness;
pub use crate::site_model::TrailingSlash;
pub use crate::site_model::resolve;
