use rand::Rng;

use super::game::Side;
use super::tile::{self, Tile};

/// Tiles dealt to each side at the start of a game.
pub(crate) const HAND_SIZE: usize = 7;

/// Deal is a freshly shuffled set split into the two hands and the stock.
#[derive(Clone, Debug)]
pub(crate) struct Deal {
    pub(crate) stock: Vec<Tile>,
    pub(crate) computer: Vec<Tile>,
    pub(crate) player: Vec<Tile>,
}

impl Deal {
    /// Build a full set and hand out tiles one at a time, computer first.
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut stock = tile::full_set();
        let computer = (0..HAND_SIZE)
            .filter_map(|_| draw(&mut stock, rng))
            .collect();
        let player = (0..HAND_SIZE)
            .filter_map(|_| draw(&mut stock, rng))
            .collect();
        Self {
            stock,
            computer,
            player,
        }
    }

    /// A game can only begin if somebody holds a double.
    pub(crate) fn has_double(&self) -> bool {
        self.computer
            .iter()
            .chain(self.player.iter())
            .any(Tile::is_double)
    }

    /// Finds the highest double in either hand, returning its holder and position.
    pub(crate) fn starter(&self) -> Option<(Side, usize)> {
        if !self.has_double() {
            return None;
        }
        let hands = [(Side::Computer, &self.computer), (Side::Player, &self.player)];
        hands
            .into_iter()
            .flat_map(|(side, hand)| {
                hand.iter()
                    .enumerate()
                    .filter(|(_, t)| t.is_double())
                    .map(move |(index, t)| (t.left(), side, index))
            })
            .max_by_key(|(pip, _, _)| *pip)
            .map(|(_, side, index)| (side, index))
    }
}

/// Remove a uniformly chosen tile from the stock.
pub(crate) fn draw<R: Rng + ?Sized>(stock: &mut Vec<Tile>, rng: &mut R) -> Option<Tile> {
    if stock.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..stock.len());
    Some(stock.remove(idx))
}
