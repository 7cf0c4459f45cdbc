use crate::chess::{Color, Role, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Write};

/// A chess [piece][`Role`] of a certain [`Color`] standing on a [`Square`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub square: Square,
    /// Whether this piece has moved since it was placed on the board.
    pub moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    #[inline(always)]
    pub fn new(color: Color, role: Role, square: Square) -> Self {
        Piece {
            color,
            role,
            square,
            moved: false,
        }
    }

    /// Parses the FEN letter of a piece, uppercase for white and lowercase for black.
    pub fn from_fen(c: char, square: Square) -> Result<Self, ParsePieceError> {
        let role = Role::from_letter(c).ok_or(ParsePieceError(c))?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Piece::new(color, role, square))
    }

    /// The FEN letter of this piece, uppercase for white and lowercase for black.
    pub fn fen(&self) -> char {
        match self.color {
            Color::White => self.role.letter().to_ascii_uppercase(),
            Color::Black => self.role.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.fen())
    }
}

/// The reason why parsing a [`Piece`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "`{_0}` is not a piece, expected one of `PNBRQKpnbrqk`")]
pub struct ParsePieceError(#[error(not(source))] pub char);
