use std::collections::VecDeque;

use super::tile::{self, Pip, Tile};

/// Which extremity of the snake a tile is played against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum End {
    Left,
    Right,
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::Left => write!(f, "left"),
            End::Right => write!(f, "right"),
        }
    }
}

/// How many times a single pip value occurs across the whole set. Seeing it that often on the
/// board means no tile carrying it is left anywhere else.
const PIP_OCCURRENCES: usize = 8;

/// Snake is the chain of placed tiles. Neighbouring tiles always share a pip value: the right
/// side of each tile equals the left side of the one after it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snake {
    tiles: VecDeque<Tile>,
}

impl Snake {
    /// Start a chain from a single tile, normally the starting double.
    pub(crate) fn new(first: Tile) -> Self {
        let mut tiles = VecDeque::with_capacity(tile::SET_SIZE);
        tiles.push_back(first);
        Self { tiles }
    }

    pub(crate) fn len(&self) -> usize {
        self.tiles.len()
    }

    pub(crate) fn tiles(&self) -> impl DoubleEndedIterator<Item = &Tile> + ExactSizeIterator {
        self.tiles.iter()
    }

    /// The exposed values at the head and at the tail.
    pub(crate) fn open_ends(&self) -> (Pip, Pip) {
        let head = self
            .tiles
            .front()
            .expect("a snake always holds at least one tile");
        let tail = self
            .tiles
            .back()
            .expect("a snake always holds at least one tile");
        (head.left(), tail.right())
    }

    pub(crate) fn open_end(&self, end: End) -> Pip {
        let (left, right) = self.open_ends();
        match end {
            End::Left => left,
            End::Right => right,
        }
    }

    pub(crate) fn is_legal(&self, tile: &Tile, end: End) -> bool {
        tile.has(self.open_end(end))
    }

    /// Returns the tile turned so that it joins the chain at `end`, or `None` if it cannot be
    /// played there at all.
    pub(crate) fn orient(&self, tile: &Tile, end: End) -> Option<Tile> {
        let open = self.open_end(end);
        match end {
            End::Left if tile.right() == open => Some(*tile),
            End::Left if tile.left() == open => Some(tile.reversed()),
            End::Right if tile.left() == open => Some(*tile),
            End::Right if tile.right() == open => Some(tile.reversed()),
            _ => None,
        }
    }

    /// Attach a tile at the given end, returning it as it now lies in the chain.
    pub(crate) fn place(&mut self, tile: &Tile, end: End) -> Option<Tile> {
        let oriented = self.orient(tile, end)?;
        match end {
            End::Left => self.tiles.push_front(oriented),
            End::Right => self.tiles.push_back(oriented),
        }
        Some(oriented)
    }

    pub(crate) fn pips(&self) -> impl Iterator<Item = Pip> + '_ {
        tile::pips(&self.tiles)
    }

    pub(crate) fn count(&self, pip: Pip) -> usize {
        self.pips().filter(|p| *p == pip).count()
    }

    /// True when both ends show the same value and every tile carrying that value is already in
    /// the chain, so nothing can ever be attached again.
    pub(crate) fn is_blocked(&self) -> bool {
        let (left, right) = self.open_ends();
        left == right && self.count(left) == PIP_OCCURRENCES
    }

    #[cfg(test)]
    pub(crate) fn from_tiles(tiles: &[Tile]) -> Self {
        assert!(!tiles.is_empty());
        Self {
            tiles: tiles.iter().copied().collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_chained(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a.right() == b.left())
    }
}
