mod base;
mod config;
mod policy;
mod route;
mod site_url;

pub use siteconf_config::BuildOptions;
pub use siteconf_config::FileFormat;
pub use siteconf_config::SiteOptions;

pub use self::base::BasePath;
pub use self::config::SiteConfig;
pub use self::config::Strictness;
pub use self::config::resolve;
pub use self::policy::BuildFormat;
pub use self::policy::TrailingSlash;
pub use self::site_url::SiteUrl;
