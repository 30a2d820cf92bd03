//! `modgen.toml` project defaults.

use std::{path::Path, str::FromStr};

use modgen_core::Overwrite;
use serde::Deserialize;

use crate::{Error, Result};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "modgen.toml";

/// Root of `modgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values used when the matching command-line flag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub stack: Option<String>,
    pub project: Option<String>,
    pub output: Option<String>,
    pub validators: Option<bool>,
    pub overwrite: Option<Overwrite>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Load the config file.
    ///
    /// An explicitly named file must exist. Without one, `modgen.toml` in the
    /// working directory is used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    tracing::debug!("no {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }
}
