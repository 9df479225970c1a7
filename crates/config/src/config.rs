use std::fmt;
use std::path;

use super::*;

/// File searched for when no config file is given explicitly.
pub const DEFAULT_CONFIG_NAME: &str = "_site.yml";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum FileFormat {
    Yaml,
    Toml,
    Json,
}

impl FileFormat {
    /// Anything that is not `.toml` or `.json` is read as YAML.
    pub fn from_path(path: &path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

impl SiteOptions {
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: Self = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e))?,
            FileFormat::Toml => toml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e))?,
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e))?,
        };
        Ok(options)
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        Self::parse(&content, FileFormat::from_path(&path))
            .map_err(|e| e.context_with(|c| c.insert("Path", path.display().to_string())))
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Self> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Self> {
        match find_project_file(cwd, DEFAULT_CONFIG_NAME) {
            Some(p) => {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(p)
            }
            None => {
                log::warn!(
                    "No {DEFAULT_CONFIG_NAME} file found in current directory, using default config."
                );
                Ok(Self::default())
            }
        }
    }
}

impl fmt::Display for SiteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Look for `name` in `dir` and then in each of its ancestors.
pub fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.is_file() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
