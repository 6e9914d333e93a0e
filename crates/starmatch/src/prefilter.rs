use memchr::memmem;

use crate::pattern::{Atom, Token};

/// Cheap necessary condition for a match.
///
/// Every atom that is not repeated consumes exactly one character, so the text must be at
/// least that long and must contain the literal ones as a subsequence, in pattern order.
/// Returns `false` only if the pattern cannot match the text.
pub(crate) fn admits(atoms: &[Atom], text: &str) -> bool {
    let mut required = 0;
    let mut rest = text.as_bytes();
    let mut buf = [0; 4];

    for atom in atoms.iter().filter(|atom| !atom.repeat) {
        required += 1;
        if let Token::Literal(ch) = atom.token {
            let needle = ch.encode_utf8(&mut buf).as_bytes();
            match memmem::find(rest, needle) {
                Some(i) => rest = &rest[i + needle.len()..],
                None => return false,
            }
        }
    }

    // Byte length bounds character count from above.
    text.len() >= required && text.chars().count() >= required
}
