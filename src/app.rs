// std imports
use std::io::{self, BufRead, Write};

// third-party imports
use starmatch::{MatchOptions, Pattern};

// local imports
use crate::{error::*, settings::OutputMode};

// ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub matching: MatchOptions,
    pub mode: OutputMode,
}

/// Counters collected while matching a sequence of inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub inputs: usize,
    pub matched: usize,
}

impl Summary {
    /// Process exit code: `0` if anything matched, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.matched != 0 { 0 } else { 1 }
    }
}

// ---

pub struct App {
    pattern: Pattern,
    options: Options,
}

impl App {
    pub fn new(pattern: Pattern, options: Options) -> Self {
        log::debug!("pattern {:?} compiled to {} atom(s)", pattern.to_string(), pattern.atoms().len());
        log::debug!("options: {:?}", options);
        Self { pattern, options }
    }

    /// Matches each line of `input`, with line terminators stripped.
    pub fn run_lines<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<Summary> {
        self.run(input.lines(), output)
    }

    /// Matches each of `inputs` and writes results to `output` according to the output mode.
    pub fn run<I, S, W>(&self, inputs: I, output: &mut W) -> Result<Summary>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
        W: Write,
    {
        let mut summary = Summary::default();

        for input in inputs {
            let input = input?;
            let input = input.as_ref();
            let matched = self.pattern.matches_with(input, &self.options.matching);

            summary.inputs += 1;
            if matched {
                summary.matched += 1;
            }

            match self.options.mode {
                OutputMode::Verdict => writeln!(output, "{}", matched)?,
                OutputMode::Filter if matched => writeln!(output, "{}", input)?,
                OutputMode::Filter | OutputMode::Count => {}
            }
        }

        if self.options.mode == OutputMode::Count {
            writeln!(output, "{}", summary.matched)?;
        }

        log::debug!("matched {} of {} input(s)", summary.matched, summary.inputs);

        Ok(summary)
    }
}

#[cfg(test)]
mod tests;
