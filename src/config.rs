//! Runtime settings read from the environment.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Environment variable selecting the default layout.
pub const LAYOUT_VAR: &str = "KEYMINT_LAYOUT";
/// Environment variable naming a directory to record cassettes into.
pub const RECORD_VAR: &str = "KEYMINT_RECORD";
/// Environment variable naming a cassette file to replay from.
pub const REPLAY_VAR: &str = "KEYMINT_REPLAY";

/// How identifier bits are sourced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// 122 bits from the entropy source.
    #[default]
    Random,
    /// 48 bits of Unix milliseconds followed by 74 random bits.
    Timestamped,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::Timestamped => "timestamped",
        })
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "timestamped" => Ok(Self::Timestamped),
            _ => Err(ConfigError::UnknownLayout(s.to_string())),
        }
    }
}

/// Settings resolved from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Layout used when the command line does not pick one.
    pub layout: Layout,
    /// Record port interactions under this directory.
    pub record_dir: Option<PathBuf>,
    /// Replay port interactions from this cassette file.
    pub replay_path: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, treating empty values as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let layout = get(LAYOUT_VAR).map(|v| v.parse::<Layout>()).transpose()?.unwrap_or_default();
        Ok(Self {
            layout,
            record_dir: get(RECORD_VAR).map(PathBuf::from),
            replay_path: get(REPLAY_VAR).map(PathBuf::from),
        })
    }
}
