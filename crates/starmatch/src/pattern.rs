use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{memo, prefilter, table};

/// A compiled pattern for matching whole text strings.
///
/// Patterns are created from strings containing these characters:
/// - `.` matches exactly one character
/// - `*` repeats the preceding atom zero or more times
/// - any other character matches itself
///
/// # Examples
///
/// ```
/// use starmatch::Pattern;
///
/// let pattern = Pattern::new("a.c*").unwrap();
/// assert!(pattern.matches("ab"));
/// assert!(pattern.matches("abccc"));
/// assert!(!pattern.matches("abd"));
/// ```
///
/// - Patterns can be displayed back to the strings they were compiled from via the `Display` trait
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    atoms: Vec<Atom>,
}

impl Pattern {
    /// Compiles a pattern from a string.
    ///
    /// Fails with [`Error::MalformedPattern`] if a `*` is the first character of the pattern
    /// or directly follows another `*`, since there is no atom for it to repeat.
    ///
    /// # Examples
    ///
    /// ```
    /// use starmatch::{Error, Pattern};
    ///
    /// assert!(Pattern::new("a*b*c*").is_ok());
    /// assert_eq!(Pattern::new("*a"), Err(Error::MalformedPattern { position: 0 }));
    /// assert_eq!(Pattern::new("a**"), Err(Error::MalformedPattern { position: 2 }));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        Compiler::new().compile(raw.as_ref())
    }

    #[inline]
    /// Tests whether the pattern matches the whole of the given text using default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use starmatch::Pattern;
    ///
    /// let pattern = Pattern::new("a*").unwrap();
    /// assert!(pattern.matches(""));
    /// assert!(pattern.matches("aa"));
    /// assert!(!pattern.matches("ab"));
    ///
    /// // `.` matches one character, not one byte
    /// let pattern = Pattern::new("..").unwrap();
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("🦀"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        self.matches_with(text, &MatchOptions::default())
    }

    /// Tests whether the pattern matches the whole of the given text using the given options.
    pub fn matches_with(&self, text: &str, options: &MatchOptions) -> bool {
        if options.prefilter && !prefilter::admits(&self.atoms, text) {
            return false;
        }

        let text: Vec<char> = text.chars().collect();
        match options.strategy {
            Strategy::Table => table::solve(&self.atoms, &text),
            Strategy::Memo => memo::solve(&self.atoms, &text),
        }
    }

    /// Returns the compiled atoms in pattern order.
    pub fn atoms(&self) -> impl ExactSizeIterator<Item = Atom> + '_ {
        self.atoms.iter().copied()
    }

    /// Returns `true` if the pattern has no atoms and so matches only the empty text.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns `true` if the pattern consists of literal characters only.
    pub fn is_literal(&self) -> bool {
        self.atoms
            .iter()
            .all(|atom| !atom.repeat && matches!(atom.token, Token::Literal(_)))
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

// ---

/// A single unit of a compiled pattern, optionally repeated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Atom {
    pub token: Token,
    pub repeat: bool,
}

impl Atom {
    /// Tests whether one occurrence of the atom accepts the given character.
    #[inline]
    pub fn accepts(&self, ch: char) -> bool {
        match self.token {
            Token::Any => true,
            Token::Literal(expected) => expected == ch,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token {
            Token::Any => f.write_str(".")?,
            Token::Literal(ch) => write!(f, "{}", ch)?,
        }
        if self.repeat {
            f.write_str("*")?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Any single character.
    Any,
    /// Exactly the given character.
    Literal(char),
}

// ---

/// Controls how a pattern is evaluated against a text.
///
/// Options never change the result of a match, only the amount of work done to get it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MatchOptions {
    pub strategy: Strategy,
    pub prefilter: bool,
}

impl MatchOptions {
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn with_prefilter(self, prefilter: bool) -> Self {
        Self { prefilter, ..self }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            prefilter: true,
        }
    }
}

/// Order in which the match table is filled.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Strategy {
    /// Every cell, row by row, starting from the empty prefixes.
    #[default]
    Table,
    /// Only the cells the final answer depends on, starting from the full prefixes.
    Memo,
}

// ---

#[derive(Default)]
struct Compiler {
    atoms: Vec<Atom>,
}

impl Compiler {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, token: Token) {
        self.atoms.push(Atom { token, repeat: false });
    }

    fn compile(mut self, raw: &str) -> Result<Pattern> {
        for (position, ch) in raw.chars().enumerate() {
            match ch {
                '*' => match self.atoms.last_mut() {
                    Some(atom) if !atom.repeat => atom.repeat = true,
                    _ => return Err(Error::MalformedPattern { position }),
                },
                '.' => self.push(Token::Any),
                _ => self.push(Token::Literal(ch)),
            }
        }

        Ok(Pattern { atoms: self.atoms })
    }
}
