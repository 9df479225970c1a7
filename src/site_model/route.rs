use std::path;

use super::BuildFormat;
use super::SiteConfig;
use super::TrailingSlash;

impl SiteConfig {
    /// URL path under which `route` is served, `base` included.
    ///
    /// A route whose last segment contains a dot after its first character,
    /// like `rss.xml` or `v1.2`, is taken to name a file: it never gets a
    /// trailing slash and is written out under its own name.
    pub fn page_url(&self, route: &str) -> String {
        let route = Route::new(route);
        if route.is_root() {
            return if self.trailing_slash == TrailingSlash::Never && !self.base.is_root() {
                self.base.trimmed().to_owned()
            } else {
                self.base.as_str().to_owned()
            };
        }

        let mut url = format!("{}/{}", self.base.trimmed(), route.path);
        let slash = match self.trailing_slash {
            _ if route.is_endpoint() => false,
            TrailingSlash::Always => true,
            TrailingSlash::Never => false,
            TrailingSlash::Ignore => route.trailing_slash,
        };
        if slash {
            url.push('/');
        }
        url
    }

    /// Absolute URL of `route`, if the site origin is known.
    pub fn canonical_url(&self, route: &str) -> Option<url::Url> {
        let site = self.site.as_ref()?;
        site.join(&self.page_url(route))
    }

    /// Location of the generated file for `route`, relative to the output directory.
    pub fn output_path(&self, route: &str) -> path::PathBuf {
        let route = Route::new(route);
        let rel_path = if route.is_root() {
            "index.html".to_owned()
        } else if route.is_endpoint() {
            route.path
        } else {
            match self.build_format {
                BuildFormat::Directory => format!("{}/index.html", route.path),
                BuildFormat::File => format!("{}.html", route.path),
            }
        };
        rel_path.split('/').collect()
    }

    pub fn dest(&self, dest_root: &path::Path, route: &str) -> path::PathBuf {
        dest_root.join(self.output_path(route))
    }
}

/// A page identifier with empty and dot segments resolved.
///
/// `..` never climbs above the site root, so a route cannot leave the output
/// directory.
struct Route {
    path: String,
    trailing_slash: bool,
}

impl Route {
    fn new(route: &str) -> Self {
        // Handle the user doing windows-style
        let route = route.trim().replace('\\', "/");
        let trailing_slash = route.ends_with('/');
        let mut segments: Vec<&str> = Vec::new();
        for part in route.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                _ => segments.push(part),
            }
        }
        let path = itertools::join(segments, "/");
        Self {
            path,
            trailing_slash,
        }
    }

    fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Routes naming a file, like `rss.xml`, are never given a trailing slash.
    fn is_endpoint(&self) -> bool {
        let name = self.path.rsplit('/').next().unwrap_or_default();
        name.rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
    }
}
