use anyhow::Context as _;
use siteconf::SiteConfig;

use crate::args;
use crate::error::Result;

/// Print the resolved configuration
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ResolveArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl ResolveArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        anstream::print!("{config}");
        Ok(())
    }
}

/// Validate the configuration without printing it
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let options = self.config.read_options()?;
        let config = self.config.resolve(options.clone())?;

        if self.config.profile.is_none() {
            for name in options.profiles.keys() {
                let profile = options.clone().with_profile(name)?;
                let profile_config = SiteConfig::from_options(profile, self.config.strictness())
                    .with_context(|| anyhow::format_err!("Invalid profile `{name}`"))?;
                log::debug!(
                    "Profile `{name}` serves pages under `{}`",
                    profile_config.base
                );
            }
        }

        log::info!(
            "Pages are served under `{}` with trailing slash `{}`",
            config.base,
            config.trailing_slash
        );
        log::info!("Configuration is valid");
        Ok(())
    }
}
