// std imports
use std::{
    io::{BufWriter, Write, stdin, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};
use starmatch::{MatchOptions, Pattern};

// local imports
use dotstar::{App, Options, cli, config, error::*};

const DOTSTAR_DEBUG_LOG: &str = "DOTSTAR_DEBUG_LOG";
const DOTSTAR_DEBUG_LOG_STYLE: &str = "DOTSTAR_DEBUG_LOG_STYLE";

const EXIT_USAGE: i32 = 2;

// ---

fn bootstrap() {
    if std::env::var(DOTSTAR_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(DOTSTAR_DEBUG_LOG).write_style(DOTSTAR_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<i32> {
    bootstrap();

    let opt = cli::Opt::parse_from(wild::args());

    if let Some(shell) = opt.shell_completions {
        let mut cmd = cli::Opt::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut stdout());
        return Ok(0);
    }

    let (configs, no_default_configs) = opt.config_files();
    let settings = config::at(configs).no_default(no_default_configs).load()?;
    log::debug!("settings: {:?}", settings);

    // PATTERN is required unless --shell-completions is given.
    let raw = opt.pattern.as_deref().unwrap_or_default();
    let pattern = Pattern::new(raw).map_err(|source| Error::Pattern {
        pattern: raw.to_owned(),
        source,
    })?;

    let strategy = opt.strategy.map(Into::into).unwrap_or(settings.matching.strategy);
    let options = Options {
        matching: MatchOptions {
            strategy: strategy.into(),
            prefilter: settings.matching.prefilter && !opt.no_prefilter,
        },
        mode: opt.output.map(Into::into).unwrap_or(settings.output.mode),
    };

    let app = App::new(pattern, options);
    let mut output = BufWriter::new(stdout().lock());
    let summary = if opt.texts.is_empty() {
        app.run_lines(stdin().lock(), &mut output)?
    } else {
        app.run(opt.texts.iter().map(Ok), &mut output)?
    };
    output.flush()?;

    Ok(summary.exit_code())
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            err.log();
            EXIT_USAGE
        }
    };
    process::exit(code);
}
