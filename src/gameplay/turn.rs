/// What the table is waiting on, projected from game state each round.
/// Pending means the pile top carries an unapplied effect for the indexed
/// seat; Choice means that seat may act; Over is terminal.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Pending(usize),
    Choice(usize),
    Over(usize),
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending(i) => write!(f, "P{}!", i),
            Self::Choice(i) => write!(f, "P{}", i),
            Self::Over(i) => write!(f, "P{} wins", i),
        }
    }
}
