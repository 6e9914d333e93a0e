//! Anchored pattern matching with `.` and `*` operators.
//!
//! A pattern is a sequence of atoms. Each atom is either a literal character or `.`, which
//! matches exactly one character of any kind. An atom followed by `*` matches zero or more
//! occurrences of itself. A match always covers the whole input text.
//!
//! # Pattern Syntax
//!
//! - `.` - Matches exactly one character
//! - `x*` - Matches zero or more occurrences of the atom `x` (a literal or `.`)
//! - Any other character matches itself
//! - A `*` with no preceding atom (leading `*` or `**`) is rejected as malformed
//!
//! # Examples
//!
//! ```
//! use starmatch::Pattern;
//!
//! let pattern = Pattern::new("c*a*b").unwrap();
//! assert!(pattern.matches("aab"));
//! assert!(pattern.matches("b"));
//! assert!(!pattern.matches("abc"));
//!
//! let pattern = Pattern::new(".*").unwrap();
//! assert!(pattern.matches(""));
//! assert!(pattern.matches("anything at all"));
//! ```
//!
//! One-shot matching without keeping the compiled pattern:
//!
//! ```
//! assert_eq!(starmatch::matches("aa", "a*"), Ok(true));
//! assert_eq!(starmatch::matches("mississippi", "mis*is*p*."), Ok(false));
//! assert!(starmatch::matches("a", "*a").is_err());
//! ```
//!
//! # Evaluation Strategies
//!
//! Matching fills a table of prefix pairs, so it runs in `O(m·n)` time for a text of `m`
//! characters and a pattern of `n` atoms and never backtracks exponentially. The table can be
//! filled bottom-up ([`Strategy::Table`], the default) or on demand from the final cell
//! ([`Strategy::Memo`]); both produce the same answers.
//!
//! ```
//! use starmatch::{MatchOptions, Pattern, Strategy};
//!
//! let pattern = Pattern::new("a*a*a*b").unwrap();
//! let options = MatchOptions::default().with_strategy(Strategy::Memo);
//! assert!(!pattern.matches_with("aaaaaaaaaaaaaaaaaaaa", &options));
//! ```

mod error;
mod memo;
mod pattern;
mod prefilter;
mod table;

pub use error::*;
pub use pattern::*;

/// Compiles `pattern` and tests whether it matches the whole of `text`.
///
/// Returns [`Error::MalformedPattern`] if the pattern contains a `*` without a preceding atom.
pub fn matches(text: &str, pattern: &str) -> Result<bool> {
    Ok(Pattern::new(pattern)?.matches(text))
}
