use crate::args;
use crate::error::Result;

/// Show where routes are served and written
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct RouteArgs {
    /// Page routes, like `about` or `blog/post-1/`
    #[arg(required = true, value_name = "ROUTE")]
    pub(crate) routes: Vec<String>,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl RouteArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        for route in &self.routes {
            anstream::println!("route: {route}");
            anstream::println!("  url: {}", config.page_url(route));
            if let Some(canonical) = config.canonical_url(route) {
                anstream::println!("  canonical: {canonical}");
            }
            anstream::println!("  output: {}", config.output_path(route).display());
        }
        Ok(())
    }
}
