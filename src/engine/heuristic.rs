//! The computer's move choice.
//!
//! Every tile in hand is scored by how often its two pip values show up on the board and in the
//! hand itself. Tiles are then tried from the best score down against the right end only; the
//! first one that fits is played and the rest are discarded. Nothing is cached between turns.

use super::selector::Selector;
use super::snake::{End, Snake};
use super::tile::{self, Pip, Tile};

/// Desirability of each tile in a hand, as (index, score) pairs in hand order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Scores(Vec<(usize, usize)>);

impl Scores {
    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> Option<usize> {
        self.0.iter().find(|(i, _)| *i == index).map(|(_, s)| *s)
    }

    /// Indices ordered by descending score. Ties keep hand order.
    fn ranked(&self) -> Vec<usize> {
        let mut ranked = self.0.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().map(|(i, _)| i).collect()
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (n, (index, score)) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{0}:{1}", index + 1, score)?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct PipCounts([usize; tile::MAX_PIP as usize + 1]);

impl PipCounts {
    fn new(pips: impl Iterator<Item = Pip>) -> Self {
        let mut counts = Self::default();
        for pip in pips {
            counts.0[pip as usize] += 1;
        }
        counts
    }

    fn get(&self, pip: Pip) -> usize {
        self.0[pip as usize]
    }
}

pub(crate) fn score(snake: &Snake, hand: &[Tile]) -> Scores {
    let board = PipCounts::new(snake.pips());
    let held = PipCounts::new(tile::pips(hand));
    Scores(
        hand.iter()
            .enumerate()
            .map(|(index, t)| {
                let s = t
                    .pips()
                    .iter()
                    .map(|p| board.get(*p) + held.get(*p))
                    .sum::<usize>();
                (index, s)
            })
            .collect(),
    )
}

/// The only end the computer ever tries.
const COMPUTER_END: End = End::Right;

/// Pick the best scoring tile that fits the right end. A tile that only fits the left end is
/// discarded like any other misfit, so the computer skips when nothing fits on the right.
pub(crate) fn choose(snake: &Snake, hand: &[Tile], scores: &Scores) -> Selector {
    for index in scores.ranked() {
        let Some(t) = hand.get(index) else {
            continue;
        };
        if snake.is_legal(t, COMPUTER_END) {
            return Selector::place(index, COMPUTER_END);
        }
        log::trace!("discarding {} (does not fit the {} end)", t, COMPUTER_END);
    }
    Selector::skip()
}
