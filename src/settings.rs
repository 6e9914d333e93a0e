// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

pub static DEFAULT_SETTINGS_RAW: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub matching: Matching,
    pub output: Output,
}

impl Settings {
    /// Loads embedded defaults and layers the given files on top of them, in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS_RAW, FileFormat::Toml));

        for source in sources {
            log::debug!("adding config source {:?} (required: {})", source.path, source.required);
            builder = builder.add_source(File::from(source.path).required(source.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }
}

// ---

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Matching {
    pub strategy: MatchStrategy,
    pub prefilter: bool,
}

impl Default for Matching {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            prefilter: true,
        }
    }
}

// ---

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    #[default]
    Table,
    Memo,
}

impl From<MatchStrategy> for starmatch::Strategy {
    fn from(strategy: MatchStrategy) -> Self {
        match strategy {
            MatchStrategy::Table => Self::Table,
            MatchStrategy::Memo => Self::Memo,
        }
    }
}

// ---

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    pub mode: OutputMode,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// `true` or `false` for every input.
    #[default]
    Verdict,
    /// Matching inputs only.
    Filter,
    /// Number of matching inputs.
    Count,
}
