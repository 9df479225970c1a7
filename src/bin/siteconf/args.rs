use std::env;
use std::io::Write as _;
use std::path;

use anyhow::Context as _;
use siteconf::SiteConfig;
use siteconf::SiteOptions;
use siteconf::Strictness;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _site.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,

    /// Deployment profile to overlay on the top-level options
    #[arg(short, long, value_name = "NAME")]
    pub(crate) profile: Option<String>,

    /// Reject unknown fields and a `base` that needs normalizing
    #[arg(long)]
    pub(crate) strict: bool,
}

impl ConfigArgs {
    /// Options as written in the config file, no profile applied.
    pub(crate) fn read_options(&self) -> Result<SiteOptions> {
        let options = if let Some(config_path) = self.config.as_deref() {
            log::debug!("Using config file `{}`", config_path.display());
            SiteOptions::from_file(config_path).with_context(|| {
                anyhow::format_err!("Error reading config file `{}`", config_path.display())
            })?
        } else {
            let cwd = env::current_dir().context("Failed to read the current directory")?;
            SiteOptions::from_cwd(cwd)?
        };
        Ok(options)
    }

    pub(crate) fn strictness(&self) -> Strictness {
        if self.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }

    /// Apply the selected profile, if any, and resolve.
    pub(crate) fn resolve(&self, options: SiteOptions) -> Result<SiteConfig> {
        let options = match self.profile.as_deref() {
            Some(profile) => options.with_profile(profile)?,
            None => options,
        };
        let config = SiteConfig::from_options(options, self.strictness())
            .with_context(|| anyhow::format_err!("Invalid site configuration"))?;
        Ok(config)
    }

    pub(crate) fn load_config(&self) -> Result<SiteConfig> {
        let options = self.read_options()?;
        self.resolve(options)
    }
}

pub(crate) fn get_logging(level: log::LevelFilter, colored: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, level);
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });

    if level == log::LevelFilter::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            let style = f.default_level_style(record.level());
            writeln!(
                f,
                "{style}[{}]{style:#} {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        });
    }

    builder
}
