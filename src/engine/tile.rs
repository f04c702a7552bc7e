/// Number of pips on each half of a tile ranges over `0..=MAX_PIP`.
pub(crate) const MAX_PIP: Pip = 6;

/// Number of tiles in a double-six set.
pub(crate) const SET_SIZE: usize = 28;

pub(crate) type Pip = u8;

/// A domino. The field order is its current orientation: once a tile sits in the snake `left`
/// faces the head of the chain and `right` faces the tail.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Tile {
    left: Pip,
    right: Pip,
}

impl Tile {
    pub(crate) fn new(left: Pip, right: Pip) -> Self {
        debug_assert!(left <= MAX_PIP && right <= MAX_PIP);
        Self { left, right }
    }

    pub(crate) fn left(&self) -> Pip {
        self.left
    }

    pub(crate) fn right(&self) -> Pip {
        self.right
    }

    pub(crate) fn pips(&self) -> [Pip; 2] {
        [self.left, self.right]
    }

    pub(crate) fn is_double(&self) -> bool {
        self.left == self.right
    }

    pub(crate) fn has(&self, pip: Pip) -> bool {
        self.left == pip || self.right == pip
    }

    /// The same piece facing the other way.
    pub(crate) fn reversed(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Orientation-independent identity of the piece, lowest pip first.
    #[cfg(test)]
    pub(crate) fn key(&self) -> (Pip, Pip) {
        (self.left.min(self.right), self.left.max(self.right))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{0}, {1}]", self.left, self.right)
    }
}

/// Every (a, b) with a <= b, in ascending order.
pub(crate) fn full_set() -> Vec<Tile> {
    let mut set = Vec::with_capacity(SET_SIZE);
    for a in 0..=MAX_PIP {
        for b in a..=MAX_PIP {
            set.push(Tile::new(a, b));
        }
    }
    set
}

/// Flattens tiles into the pip values they show, two per tile.
pub(crate) fn pips<'a, I>(tiles: I) -> impl Iterator<Item = Pip> + 'a
where
    I: IntoIterator<Item = &'a Tile>,
    I::IntoIter: 'a,
{
    tiles.into_iter().flat_map(|t| t.pips())
}
