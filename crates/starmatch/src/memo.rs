use crate::pattern::Atom;

/// Evaluates the match table top-down, computing only the cells the final answer depends on.
///
/// Cells are keyed by prefix pairs `(i, j)` like in the bottom-up table. Pending cells are kept
/// on an explicit stack instead of the call stack, so long texts cannot exhaust it.
pub(crate) fn solve(atoms: &[Atom], text: &[char]) -> bool {
    let mut memo = Memo::new(atoms, text);
    memo.resolve(text.len(), atoms.len())
}

// ---

struct Memo<'a> {
    atoms: &'a [Atom],
    text: &'a [char],
    cells: Vec<Option<bool>>,
    width: usize,
}

enum Step {
    Done(bool),
    Need(usize, usize),
}

impl<'a> Memo<'a> {
    fn new(atoms: &'a [Atom], text: &'a [char]) -> Self {
        let width = atoms.len() + 1;
        Self {
            atoms,
            text,
            cells: vec![None; (text.len() + 1) * width],
            width,
        }
    }

    fn resolve(&mut self, i: usize, j: usize) -> bool {
        let mut pending = vec![(i, j)];

        while let Some(&(i, j)) = pending.last() {
            if self.get(i, j).is_some() {
                pending.pop();
                continue;
            }
            match self.step(i, j) {
                Step::Done(value) => {
                    self.cells[i * self.width + j] = Some(value);
                    pending.pop();
                }
                Step::Need(i, j) => pending.push((i, j)),
            }
        }

        self.get(i, j).unwrap_or_default()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> Option<bool> {
        self.cells[i * self.width + j]
    }

    /// Computes cell `(i, j)` if every cell it depends on is known,
    /// otherwise names the first unknown one.
    fn step(&self, i: usize, j: usize) -> Step {
        if j == 0 {
            return Step::Done(i == 0);
        }

        let atom = self.atoms[j - 1];
        let accepts = i != 0 && atom.accepts(self.text[i - 1]);

        if !atom.repeat {
            if !accepts {
                return Step::Done(false);
            }
            return match self.get(i - 1, j - 1) {
                Some(value) => Step::Done(value),
                None => Step::Need(i - 1, j - 1),
            };
        }

        // zero occurrences
        match self.get(i, j - 1) {
            Some(true) => return Step::Done(true),
            Some(false) => {}
            None => return Step::Need(i, j - 1),
        }

        // one more occurrence
        if !accepts {
            return Step::Done(false);
        }
        match self.get(i - 1, j) {
            Some(value) => Step::Done(value),
            None => Step::Need(i - 1, j),
        }
    }
}
