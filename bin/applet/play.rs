use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Move};
use lib::game::{Game, MoveOptions, Played, Rules};
use std::io::{stdin, stdout};
use tracing::{instrument, warn};

/// Plays a game reading moves in coordinate notation from the standard input.
///
/// Besides moves such as `e2e4` or `e7e8q`, the commands `board`, `fen`,
/// `restart` and `quit` are understood.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The draw rules in RON notation.
    #[clap(short, long, default_value_t)]
    rules: Rules,

    /// Carry out moves without checking them against the rules of chess.
    #[clap(short, long)]
    unchecked: bool,

    /// The starting position in FEN notation, or just its piece placement.
    #[clap(default_value_t)]
    pos: Board,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::from_board(self.pos, self.rules);
        let mut io = Io::new(stdout().lock(), stdin().lock());

        io.send(game.position().placement)?;
        for e in game.start() {
            io.send(e)?;
        }

        io.flush()?;

        while let Some(line) = io.recv()? {
            match line.as_str() {
                "" => continue,
                "quit" => break,
                "fen" => io.send(game.fen())?,
                "board" => io.send(game.position().placement)?,
                "restart" => {
                    for e in game.restart() {
                        io.send(e)?;
                    }
                }

                cmd => match cmd.parse::<Move>() {
                    Err(e) => warn!("ignored `{}`, {}", cmd, e),
                    Ok(m) => {
                        let options = MoveOptions {
                            validate: !self.unchecked,
                            promotion: m.promotion(),
                        };

                        match game.play(m.whence(), m.whither(), options) {
                            Err(e) => warn!("{}", e),
                            Ok(played @ Played::PromotionRequired(_)) => {
                                for e in played.events() {
                                    io.send(e)?;
                                }
                            }

                            Ok(played) => {
                                io.send(game.position().placement)?;
                                for e in played.events() {
                                    io.send(e)?;
                                }
                            }
                        }
                    }
                },
            }

            io.flush()?;
        }

        Ok(())
    }
}
