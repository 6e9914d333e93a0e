// std imports
use std::ffi::OsString;
use std::path::{Path, PathBuf};

// local imports
use crate::{
    error::Result,
    settings::{Settings, SourceFile},
};

// ---

pub const APP_NAME: &str = "dotstar";
pub const ENV_CONFIG: &str = "DOTSTAR_CONFIG";

/// Loads settings from the default locations.
pub fn load() -> Result<Settings> {
    Loader::new(Vec::new()).load()
}

/// Returns a loader that layers the given files on top of the default locations.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().into()).collect())
}

/// Directory holding the user config file.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .and_then(dirs_sys::is_absolute_path)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));
    #[cfg(not(target_os = "macos"))]
    let base = dirs::config_dir();

    base.map(|dir| dir.join(APP_NAME))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user config file, keeping embedded defaults and explicit files only.
    pub fn no_default(self, val: bool) -> Self {
        Self {
            no_default: val,
            ..self
        }
    }

    pub fn load(self) -> Result<Settings> {
        let mut sources = Vec::new();

        if !self.no_default {
            if let Some(path) = Self::default_path() {
                sources.push(SourceFile::optional(path));
            }
        }
        sources.extend(self.paths.into_iter().map(SourceFile::required));

        Settings::load(sources)
    }

    fn default_path() -> Option<PathBuf> {
        default_path(std::env::var_os(ENV_CONFIG), config_dir)
    }
}

/// Resolves the user config file from the environment override or the config directory.
fn default_path(env: Option<OsString>, config_dir: impl FnOnce() -> Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env.filter(|path| !path.is_empty()) {
        return Some(path.into());
    }

    let path = config_dir().map(|dir| dir.join("config.toml"));
    if path.is_none() {
        log::warn!("no config directory available, skipping user config file");
    }
    path
}
