use crate::chess::{Color, File, Piece, Rank, Role, Square};
use crate::util::Integer;
use std::fmt;
use std::ops::{Index, IndexMut};

/// The piece placement on the board.
///
/// This type does not validate whether the placement it holds is valid
/// according to any set of chess rules.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    squares: [[Option<Piece>; 8]; 8],
}

impl Placement {
    /// An iterator over all pieces on the board, from the top left corner.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    /// The [`Square`]s occupied by pieces of a [`Role`] and [`Color`].
    pub fn locate(&self, role: Role, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |p| p.role == role && p.color == color)
            .map(|p| p.square)
    }

    /// The [`Square`] occupied by the king of a [`Color`], if any.
    pub fn king(&self, color: Color) -> Option<Square> {
        self.locate(Role::King, color).next()
    }

    /// Places a piece on its square, returning whatever stood there.
    pub fn put(&mut self, p: Piece) -> Option<Piece> {
        self[p.square].replace(p)
    }

    /// Lifts the piece off a square, if any.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self[sq].take()
    }

    /// Moves the piece on `whence` to `whither`, returning whatever stood there.
    ///
    /// The moved piece is flagged as moved.
    pub fn relocate(&mut self, whence: Square, whither: Square) -> Option<Piece> {
        match self.take(whence) {
            None => None,
            Some(mut p) => {
                p.square = whither;
                p.moved = true;
                self.put(p)
            }
        }
    }
}

impl Index<Square> for Placement {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row()][sq.col()]
    }
}

impl IndexMut<Square> for Placement {
    #[inline(always)]
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.squares[sq.row()][sq.col()]
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;

        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        for rank in Rank::iter().rev() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    Some(p) => write!(f, " {} |", p)?,
                    None => write!(f, "   |",)?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        Ok(())
    }
}
