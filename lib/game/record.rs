use crate::chess::{Move, Piece, Role, Square};
use std::fmt::{self, Write};

/// A move that was committed to a [`Game`][`crate::game::Game`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MoveRecord {
    /// The piece that moved, as it stood before moving.
    pub piece: Piece,
    pub whence: Square,
    pub whither: Square,
    /// The piece that was captured, if any.
    pub captured: Option<Piece>,
    /// The rook's source and destination squares, if castling.
    pub castling: Option<(Square, Square)>,
    /// The role a pawn was promoted to, if any.
    pub promotion: Option<Role>,
    /// Whether the move gave check.
    pub check: bool,
    /// Whether the move delivered checkmate.
    pub checkmate: bool,
    /// The FEN of the position before the move.
    pub before: String,
    /// The FEN of the position after the move.
    pub after: String,
    /// The fullmove number at the time the move was made.
    pub fullmoves: u32,
}

impl MoveRecord {
    /// This record in [pure coordinate notation][`Move`].
    pub fn r#move(&self) -> Move {
        Move(self.whence, self.whither, self.promotion)
    }

    /// Whether a piece was captured.
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether the captured pawn stood beside the destination rather than on it.
    pub fn is_en_passant(&self) -> bool {
        self.captured.map_or(false, |p| p.square != self.whither)
    }

    /// Whether the move was castling.
    pub fn is_castling(&self) -> bool {
        self.castling.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. ", self.fullmoves)?;
        fmt::Display::fmt(&self.r#move(), f)?;

        if self.checkmate {
            f.write_char('#')?;
        } else if self.check {
            f.write_char('+')?;
        }

        Ok(())
    }
}
