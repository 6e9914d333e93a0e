// std imports
use std::io::{self, IsTerminal, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern { pattern: String, source: starmatch::Error },
}

impl Error {
    /// Writes the error and a tip, if there is one, to stderr.
    pub fn log(&self) {
        let stderr = io::stderr();
        let use_colors = stderr.is_terminal();
        self.log_to(&mut stderr.lock(), use_colors).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W, use_colors: bool) -> io::Result<()> {
        if use_colors {
            writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        } else {
            writeln!(target, "error: {}", self)?;
        }

        if let Some(tip) = self.tip() {
            if use_colors {
                writeln!(target, "{} {}", "  tip:".green().bold(), tip)?;
            } else {
                writeln!(target, "  tip: {}", tip)?;
            }
        }

        Ok(())
    }

    fn tip(&self) -> Option<String> {
        match self {
            Self::Pattern { pattern, source } => Some(format!(
                "'*' must follow a literal character or '.'\n       {}\n       {}^",
                pattern,
                " ".repeat(caret_offset(pattern, source.position())),
            )),
            _ => None,
        }
    }
}

/// Display width of the first `position` characters of `text`.
fn caret_offset(text: &str, position: usize) -> usize {
    let end = text.char_indices().nth(position).map_or(text.len(), |(i, _)| i);
    text[..end].width()
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
