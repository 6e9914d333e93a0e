use crate::pattern::Atom;

/// Fills the whole match table bottom-up and returns the cell for the full text and pattern.
pub(crate) fn solve(atoms: &[Atom], text: &[char]) -> bool {
    fill(atoms, text).get(text.len(), atoms.len())
}

/// Cell `(i, j)` tells whether the first `i` characters of the text are matched by the first
/// `j` atoms of the pattern.
pub(crate) fn fill(atoms: &[Atom], text: &[char]) -> Table {
    let mut table = Table::new(text.len(), atoms.len());
    table.set(0, 0, true);

    // Only chains of repeated atoms match the empty text.
    for (j, atom) in atoms.iter().enumerate().map(|(j, atom)| (j + 1, atom)) {
        if atom.repeat {
            table.set(0, j, table.get(0, j - 1));
        }
    }

    for (i, &ch) in text.iter().enumerate().map(|(i, ch)| (i + 1, ch)) {
        for (j, atom) in atoms.iter().enumerate().map(|(j, atom)| (j + 1, atom)) {
            let value = if atom.repeat {
                table.get(i, j - 1) || (atom.accepts(ch) && table.get(i - 1, j))
            } else {
                atom.accepts(ch) && table.get(i - 1, j - 1)
            };
            table.set(i, j, value);
        }
    }

    table
}

// ---

pub(crate) struct Table {
    cells: Vec<bool>,
    width: usize,
}

impl Table {
    fn new(rows: usize, columns: usize) -> Self {
        let width = columns + 1;
        Self {
            cells: vec![false; (rows + 1) * width],
            width,
        }
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.width + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: bool) {
        self.cells[i * self.width + j] = value;
    }

    #[cfg(test)]
    fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    #[cfg(test)]
    fn columns(&self) -> usize {
        self.width
    }
}
