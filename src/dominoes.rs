use crate::engine::game::{Game, Outcome, Side, Status};
use crate::engine::selector::Selector;
use crate::error::Result;
use crate::tui::events::{Event, EventSource};
use crate::tui::renderer::Renderer;
use crate::tui::table::Table;

const INVALID_INPUT: &str = "Invalid input. Please try again.";
const ILLEGAL_MOVE: &str = "Illegal move. Please try again.";

/// Dominoes drives one game: it shows the table, collects a move from whichever side is up and
/// applies it until the game ends or input runs out.
pub(crate) struct Dominoes<R: Renderer, E: EventSource> {
    game: Game,
    renderer: R,
    event_source: E,
}

impl<R: Renderer, E: EventSource> Dominoes<R, E> {
    pub(crate) fn new(game: Game, renderer: R, event_source: E) -> Self {
        Self {
            game,
            renderer,
            event_source,
        }
    }

    /// Play until the game is over. Returns `None` if input ended before that.
    pub(crate) fn run(mut self) -> Result<Option<Outcome>> {
        loop {
            log::trace!("computer scores: {}", self.game.computer_scores());
            let table = Table::new(&self.game);
            log::debug!("snake: {}", table.snake);
            self.renderer.render(&table)?;

            let side = match table.status {
                Status::GameOver(outcome) => {
                    log::info!("game over: {:?}", outcome);
                    return Ok(Some(outcome));
                }
                Status::Turn(side) => side,
            };
            let selector = match side {
                Side::Player => self.player_selector()?,
                Side::Computer => self.computer_selector()?,
            };
            let Some(selector) = selector else {
                log::info!("input closed during the {}'s turn", side);
                return Ok(None);
            };
            self.game.play(selector)?;
        }
    }
}

impl<R: Renderer, E: EventSource> Dominoes<R, E> {
    /// Ask until the player enters a selector that is well formed and legal.
    fn player_selector(&mut self) -> Result<Option<Selector>> {
        loop {
            let line = match self.event_source.next_event()? {
                Event::Line(line) => line,
                Event::Quit => return Ok(None),
            };
            let checked = line
                .parse::<Selector>()
                .and_then(|s| self.game.validate(s).map(|_| s));
            match checked {
                Ok(s) => return Ok(Some(s)),
                Err(e) => {
                    log::debug!("rejected {:?}: {}", line, e);
                    let message = if e.is_malformed() {
                        INVALID_INPUT
                    } else {
                        ILLEGAL_MOVE
                    };
                    self.renderer.notice(message)?;
                }
            }
        }
    }

    /// Wait for the player to acknowledge, then let the heuristic pick.
    fn computer_selector(&mut self) -> Result<Option<Selector>> {
        match self.event_source.next_event()? {
            Event::Line(_) => Ok(Some(self.game.computer_selector())),
            Event::Quit => Ok(None),
        }
    }
}
