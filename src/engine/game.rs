use rand::RngCore;

use super::dealer::{self, Deal};
use super::heuristic::{self, Scores};
use super::selector::{Move, Selector};
use super::snake::{End, Snake};
use super::tile::Tile;
use crate::error::MoveError;

/// The two participants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Side {
    Player,
    Computer,
}

impl Side {
    pub(crate) fn other(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    PlayerEmptiedHand,
    ComputerEmptiedHand,
    Blocked,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Turn(Side),
    GameOver(Outcome),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::GameOver(Outcome::PlayerEmptiedHand) => {
                write!(f, "The game is over. You won!")
            }
            Status::GameOver(Outcome::ComputerEmptiedHand) => {
                write!(f, "The game is over. The computer won!")
            }
            Status::GameOver(Outcome::Blocked) => write!(f, "The game is over. It's a draw!"),
            Status::Turn(Side::Player) => {
                write!(f, "It's your turn to make a move. Enter your command.")
            }
            Status::Turn(Side::Computer) => write!(
                f,
                "Computer is about to make a move. Press Enter to continue..."
            ),
        }
    }
}

/// What a completed turn did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Play {
    Placed { side: Side, tile: Tile, end: End },
    Drew { side: Side, tile: Tile },
    Passed { side: Side },
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placed { side, tile, end } => {
                write!(f, "{0} placed {1} at the {2} end", side, tile, end)
            }
            Self::Drew { side, tile } => write!(f, "{0} drew {1} from the stock", side, tile),
            Self::Passed { side } => write!(f, "{0} passed with an empty stock", side),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Hands {
    player: Vec<Tile>,
    computer: Vec<Tile>,
}

impl Hands {
    fn get(&self, side: Side) -> &Vec<Tile> {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut Vec<Tile> {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }
}

/// Game owns every tile for the length of one session: the stock, both hands and the snake.
pub(crate) struct Game {
    rng: Box<dyn RngCore>,
    stock: Vec<Tile>,
    hands: Hands,
    snake: Snake,
    turn: Side,
    redeals: usize,
}

impl Game {
    /// Deal a new game, dealing again until somebody holds a double. The highest double opens the
    /// snake and its holder's opponent moves first.
    pub(crate) fn new(mut rng: impl RngCore + 'static) -> Self {
        let mut redeals = 0;
        let (deal, (holder, index)) = loop {
            let deal = Deal::random(&mut rng);
            if let Some(starter) = deal.starter() {
                break (deal, starter);
            }
            redeals += 1;
            log::debug!("no double was dealt, dealing again ({} so far)", redeals);
        };

        let Deal {
            stock,
            computer,
            player,
        } = deal;
        let mut hands = Hands { player, computer };
        let starter = hands.get_mut(holder).remove(index);
        let turn = holder.other();
        log::info!("{} opens with {}, {} moves first", holder, starter, turn);

        Self {
            rng: Box::new(rng),
            stock,
            hands,
            snake: Snake::new(starter),
            turn,
            redeals,
        }
    }

    /// Terminal checks in priority order, then whose turn it is.
    pub(crate) fn status(&self) -> Status {
        if self.hands.player.is_empty() {
            return Status::GameOver(Outcome::PlayerEmptiedHand);
        }
        if self.hands.computer.is_empty() {
            return Status::GameOver(Outcome::ComputerEmptiedHand);
        }
        if self.snake.is_blocked() {
            return Status::GameOver(Outcome::Blocked);
        }
        Status::Turn(self.turn)
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn hand(&self, side: Side) -> &[Tile] {
        self.hands.get(side)
    }

    pub(crate) fn stock_size(&self) -> usize {
        self.stock.len()
    }

    pub(crate) fn redeals(&self) -> usize {
        self.redeals
    }

    /// Fresh scores for the computer's hand against the current board.
    pub(crate) fn computer_scores(&self) -> Scores {
        heuristic::score(&self.snake, &self.hands.computer)
    }

    /// The computer's pick for this turn.
    pub(crate) fn computer_selector(&self) -> Selector {
        let scores = self.computer_scores();
        heuristic::choose(&self.snake, &self.hands.computer, &scores)
    }

    /// Check a selector against the hand of whoever is to move.
    pub(crate) fn validate(&self, selector: Selector) -> Result<Move, MoveError> {
        let side = match self.status() {
            Status::Turn(side) => side,
            Status::GameOver(_) => return Err(MoveError::GameOver),
        };
        let hand = self.hands.get(side);
        let m = selector.resolve(hand.len())?;
        if let Move::Place { index, end } = m {
            let tile = hand[index];
            if !self.snake.is_legal(&tile, end) {
                return Err(MoveError::Illegal { tile, end });
            }
        }
        Ok(m)
    }

    /// Carry out one turn for the side to move and hand the turn over. Skipping draws a random
    /// tile from the stock when there is one.
    pub(crate) fn play(&mut self, selector: Selector) -> Result<Play, MoveError> {
        let m = self.validate(selector)?;
        let side = self.turn;
        let play = match m {
            Move::Skip => match dealer::draw(&mut self.stock, &mut *self.rng) {
                Some(tile) => {
                    self.hands.get_mut(side).push(tile);
                    Play::Drew { side, tile }
                }
                None => Play::Passed { side },
            },
            Move::Place { index, end } => {
                let tile = self.hands.get(side)[index];
                let placed = self
                    .snake
                    .place(&tile, end)
                    .ok_or(MoveError::Illegal { tile, end })?;
                self.hands.get_mut(side).remove(index);
                Play::Placed {
                    side,
                    tile: placed,
                    end,
                }
            }
        };
        log::info!("{}", play);
        self.turn = side.other();
        Ok(play)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        rng: impl RngCore + 'static,
        stock: Vec<Tile>,
        player: Vec<Tile>,
        computer: Vec<Tile>,
        snake: Snake,
        turn: Side,
    ) -> Self {
        Self {
            rng: Box::new(rng),
            stock,
            hands: Hands { player, computer },
            snake,
            turn,
            redeals: 0,
        }
    }
}
