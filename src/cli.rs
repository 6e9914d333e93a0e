// third-party imports
use clap::{Parser, ValueEnum, value_parser};
use clap_complete::Shell;

// local imports
use crate::settings::{MatchStrategy, OutputMode};

// ---

/// Matches whole texts against a pattern where `.` matches any character and `*` repeats the preceding one.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opt {
    /// Pattern to match texts against; put `--` before it if it starts with `-`.
    #[arg(name = "PATTERN", required_unless_present = "shell_completions")]
    pub pattern: Option<String>,

    /// Texts to match, each one as a whole; lines of standard input are used if none are given. Texts after `--` are never taken as options.
    #[arg(name = "TEXT")]
    pub texts: Vec<String>,

    /// Match table evaluation strategy [default: from config file].
    #[arg(long, short = 's', env = "DOTSTAR_STRATEGY", overrides_with = "strategy")]
    #[arg(value_enum)]
    pub strategy: Option<StrategyOption>,

    /// Disable quick rejection of texts that cannot match.
    #[arg(long)]
    pub no_prefilter: bool,

    /// Output mode [default: from config file].
    #[arg(long, short = 'o', env = "DOTSTAR_OUTPUT", overrides_with = "output")]
    #[arg(value_enum)]
    pub output: Option<OutputOption>,

    /// Configuration file path, can be repeated; an empty value or '-' drops preceding ones and the default config file.
    #[arg(long, value_name = "FILE", num_args = 1)]
    pub config: Vec<String>,

    /// Print shell auto-completion script and exit.
    #[arg(long, value_parser = value_parser!(Shell), value_name = "SHELL")]
    pub shell_completions: Option<Shell>,
}

impl Opt {
    /// Splits `--config` values into explicit files and a flag telling whether the default config file is skipped.
    pub fn config_files(&self) -> (&[String], bool) {
        match self.config.iter().rposition(|x| x.is_empty() || x == "-") {
            Some(reset) => (&self.config[reset + 1..], true),
            None => (&self.config, false),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyOption {
    Table,
    Memo,
}

impl From<StrategyOption> for MatchStrategy {
    fn from(option: StrategyOption) -> Self {
        match option {
            StrategyOption::Table => Self::Table,
            StrategyOption::Memo => Self::Memo,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputOption {
    Verdict,
    Filter,
    Count,
}

impl From<OutputOption> for OutputMode {
    fn from(option: OutputOption) -> Self {
        match option {
            OutputOption::Verdict => Self::Verdict,
            OutputOption::Filter => Self::Filter,
            OutputOption::Count => Self::Count,
        }
    }
}

#[cfg(test)]
mod tests;
