use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Board;
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the leaf nodes of the legal move tree.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// Also count the nodes under each legal move.
    #[clap(short, long)]
    divide: bool,

    /// How many plies deep to search.
    depth: u8,

    /// The position in FEN notation.
    #[clap(default_value_t)]
    pos: Board,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let timer = Instant::now();

        if self.divide && self.depth > 0 {
            for m in self.pos.moves() {
                let mut next = self.pos;
                next.make(m)?;
                println!("{m}: {}", next.perft(self.depth - 1));
            }
        }

        let nodes = self.pos.perft(self.depth);
        info!(depth = self.depth, nodes, time = ?timer.elapsed());
        println!("{nodes}");

        Ok(())
    }
}
