use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};

mod dominoes;
mod engine;
mod error;
mod tui;

use dominoes::Dominoes;
use engine::game::Game;
use tui::crossterm::Crossterm;
use tui::events::LineEvents;

/// Play double-six dominoes against the computer.
///
/// On your turn enter the number of a piece to play it on the right end of the snake, the same
/// number with a minus sign to play it on the left end, or 0 to draw from the stock.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the shuffle for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives the log.
    #[arg(long, default_value = "./dominoes.log")]
    log_file: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(cli.verbose.log_level_filter())
        .chain(
            fern::log_file(&cli.log_file)
                .with_context(|| format!("opening log file {}", cli.log_file.display()))?,
        )
        .apply()?;

    let rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => {
            log::info!("seeding the shuffle with {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(thread_rng()),
    };
    let game = Game::new(rng);
    log::debug!("deal accepted after {} redeals", game.redeals());

    let renderer = Crossterm::new(stdout().lock());
    let event_source = LineEvents::new(stdin().lock());
    match Dominoes::new(game, renderer, event_source).run()? {
        Some(outcome) => log::info!("finished: {:?}", outcome),
        None => log::info!("left before the game was over"),
    }

    Ok(())
}
