use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Square};
use tracing::{info, instrument};

/// Lists the legal moves in a position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// Only list moves of the piece on this square.
    #[clap(short, long)]
    square: Option<Square>,

    /// The position in FEN notation.
    #[clap(default_value_t)]
    pos: Board,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let moves: Vec<_> = self
            .pos
            .moves()
            .into_iter()
            .filter(|m| self.square.map_or(true, |sq| m.whence() == sq))
            .collect();

        info!(count = moves.len(), check = self.pos.in_check(self.pos.turn()));

        for m in moves {
            println!("{m}");
        }

        Ok(())
    }
}
