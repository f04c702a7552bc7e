use crate::engine::game::{Game, Side, Status};
use crate::engine::snake::Snake;
use crate::engine::tile::Tile;

/// Longest snake shown in full; anything longer keeps only `SNAKE_EDGE` tiles at each end.
const SNAKE_SHOWN: usize = 6;
const SNAKE_EDGE: usize = 3;

/// The visible part of the snake.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SnakeView {
    Whole(Vec<Tile>),
    Elided { head: Vec<Tile>, tail: Vec<Tile> },
}

impl SnakeView {
    fn new(snake: &Snake) -> Self {
        if snake.len() <= SNAKE_SHOWN {
            return SnakeView::Whole(snake.tiles().copied().collect());
        }
        let head = snake.tiles().take(SNAKE_EDGE).copied().collect();
        let tail = snake.tiles().skip(snake.len() - SNAKE_EDGE).copied().collect();
        SnakeView::Elided { head, tail }
    }
}

impl std::fmt::Display for SnakeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeView::Whole(tiles) => {
                for t in tiles {
                    write!(f, "{}", t)?;
                }
            }
            SnakeView::Elided { head, tail } => {
                for t in head {
                    write!(f, "{}", t)?;
                }
                write!(f, "...")?;
                for t in tail {
                    write!(f, "{}", t)?;
                }
            }
        }
        Ok(())
    }
}

/// Table is everything a renderer may show at the start of a turn. The computer's tiles are
/// reduced to a count.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Table {
    pub(crate) stock_size: usize,
    pub(crate) computer_pieces: usize,
    pub(crate) snake: SnakeView,
    pub(crate) hand: Vec<Tile>,
    pub(crate) status: Status,
}

impl Table {
    pub(crate) fn new(game: &Game) -> Self {
        Self {
            stock_size: game.stock_size(),
            computer_pieces: game.hand(Side::Computer).len(),
            snake: SnakeView::new(game.snake()),
            hand: game.hand(Side::Player).to_vec(),
            status: game.status(),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b)
    }

    fn chain(len: usize) -> Vec<Tile> {
        // 0-1, 1-2, ... wraps around the pip values
        (0..len)
            .map(|i| t((i % 7) as u8, ((i + 1) % 7) as u8))
            .collect()
    }

    #[test]
    fn short_snake_shown_whole() {
        let tiles = chain(6);
        let view = SnakeView::new(&Snake::from_tiles(&tiles));
        assert_eq!(view, SnakeView::Whole(tiles));
    }

    #[test]
    fn long_snake_elided() {
        let tiles = chain(7);
        let view = SnakeView::new(&Snake::from_tiles(&tiles));
        assert_eq!(
            view,
            SnakeView::Elided {
                head: tiles[..3].to_vec(),
                tail: tiles[4..].to_vec(),
            }
        );
        assert_eq!(
            format!("{}", view),
            "[0, 1][1, 2][2, 3]...[4, 5][5, 6][6, 0]"
        );
    }

    #[test]
    fn table_hides_computer_tiles() {
        let game = Game::from_parts(
            SmallRng::seed_from_u64(42),
            vec![t(0, 0), t(1, 1)],
            vec![t(2, 5), t(4, 6)],
            vec![t(0, 1), t(0, 2), t(0, 3)],
            Snake::new(t(3, 3)),
            Side::Player,
        );
        let table = Table::new(&game);
        assert_eq!(table.stock_size, 2);
        assert_eq!(table.computer_pieces, 3);
        assert_eq!(table.hand, vec![t(2, 5), t(4, 6)]);
        assert_eq!(table.snake, SnakeView::Whole(vec![t(3, 3)]));
        assert_eq!(table.status, Status::Turn(Side::Player));
    }
}
