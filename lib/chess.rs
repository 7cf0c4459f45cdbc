mod board;
mod castles;
mod color;
mod fen;
mod file;
mod legal;
mod make;
mod movegen;
mod r#move;
mod outcome;
mod perft;
mod perspective;
mod piece;
mod placement;
mod position;
mod rank;
mod role;
mod square;

pub use board::*;
pub use castles::*;
pub use color::*;
pub use fen::*;
pub use file::*;
pub use legal::*;
pub use make::*;
pub use movegen::*;
pub use outcome::*;
pub use perspective::*;
pub use piece::*;
pub use placement::*;
pub use position::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use square::*;
