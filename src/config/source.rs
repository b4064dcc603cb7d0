use crate::config::Properties;
use crate::core::{LogError, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Logical name of the settings resource
pub const SETTINGS_RESOURCE: &str = "jdbcdslog.properties";

/// Where to look for the settings resource
///
/// Directories are searched in order and the first one holding
/// `jdbcdslog.properties` wins.
#[derive(Debug, Clone)]
pub struct SettingsSource {
    search_path: Vec<PathBuf>,
    resource: String,
}

impl Default for SettingsSource {
    fn default() -> Self {
        let search_path = std::env::current_dir().map(|dir| vec![dir]).unwrap_or_default();
        Self {
            search_path,
            resource: SETTINGS_RESOURCE.to_string(),
        }
    }
}

impl SettingsSource {
    /// Search only the given directories
    pub fn with_search_path<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_path: dirs.into_iter().map(Into::into).collect(),
            resource: SETTINGS_RESOURCE.to_string(),
        }
    }

    /// A source that never finds anything; only the fallback layer applies
    pub fn empty() -> Self {
        Self::with_search_path(Vec::<PathBuf>::new())
    }

    pub fn push_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_path.push(dir.into());
        self
    }

    /// Look for a differently named resource (mainly for tests)
    pub fn resource(mut self, name: impl Into<String>) -> Self {
        self.resource = name.into();
        self
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// First existing candidate on the search path
    pub fn locate(&self) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|dir| dir.join(&self.resource))
            .find(|candidate| candidate.is_file())
    }

    /// Open the resource if present
    pub fn open(&self) -> Result<Option<(PathBuf, BufReader<File>)>> {
        let Some(path) = self.locate() else {
            return Ok(None);
        };
        let file = File::open(&path).map_err(|e| LogError::io(&path, &e))?;
        Ok(Some((path, BufReader::new(file))))
    }

    /// Read the resource layered over `fallback`
    ///
    /// When the resource is absent the fallback is returned as is.
    pub fn read_properties(&self, fallback: Properties) -> Result<Properties> {
        let Some((path, reader)) = self.open()? else {
            return Ok(fallback);
        };

        let mut props = Properties::with_defaults(fallback);
        props.load(reader).map_err(|e| read_error(&path, &e))?;
        log::debug!(target: "jdbcdslog::config", "Loaded {} settings from {}", props.len(), path.display());
        Ok(props)
    }
}

fn read_error(path: &Path, err: &io::Error) -> LogError {
    match err.kind() {
        io::ErrorKind::InvalidData => {
            LogError::Parse(format!("{} is not valid UTF-8: {}", path.display(), err))
        }
        _ => LogError::io(path, err),
    }
}
