use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Board;
use tracing::{info, instrument};

/// Validates and normalizes a position in FEN notation.
///
/// Just the piece placement is also accepted, the remaining fields take defaults.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Fen {
    /// Also draw the board.
    #[clap(short, long)]
    board: bool,

    /// The position in FEN notation.
    pos: Board,
}

impl Fen {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        info!(repetition_key = %self.pos.repetition_key());

        if self.board {
            println!("{}", self.pos.placement);
        }

        println!("{}", self.pos);
        Ok(())
    }
}
