/// Chess domain types.
pub mod chess;
/// Game sessions and their lifecycle.
pub mod game;
/// Assorted utilities.
pub mod util;
