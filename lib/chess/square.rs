use crate::chess::{File, ParseFileError, ParseRankError, Perspective, Rank};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A square on the chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// The reason why a pair of board coordinates does not name a [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "coordinates `({row}, {col})` are out of the board bounds")]
pub struct InvalidSquare {
    pub row: i32,
    pub col: i32,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        <Self as Integer>::new(f.get() | r.get() << 3)
    }

    /// Constructs [`Square`] from a pair of board coordinates.
    ///
    /// Row `0` is the eighth rank and column `0` is the a-file,
    /// i.e. coordinates grow from the top left corner as seen by white.
    pub fn at(row: i32, col: i32) -> Result<Self, InvalidSquare> {
        match (File::from_col(col), Rank::from_row(row)) {
            (Some(f), Some(r)) => Ok(Square::new(f, r)),
            _ => Err(InvalidSquare { row, col }),
        }
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::new(self.get() & 0b111)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() >> 3)
    }

    /// This square's row, counting from the eighth rank.
    #[inline(always)]
    pub fn row(&self) -> usize {
        self.rank().row()
    }

    /// This square's column, counting from the a-file.
    #[inline(always)]
    pub fn col(&self) -> usize {
        self.file().col()
    }

    /// The square a number of files and ranks away, if still on the board.
    #[inline(always)]
    pub fn shift(&self, df: i8, dr: i8) -> Option<Self> {
        let f = File::try_new(self.file().get() + df)?;
        let r = Rank::try_new(self.rank().get() + dr)?;
        Some(Square::new(f, r))
    }
}

unsafe impl Integer for Square {
    type Repr = i8;
    const MIN: Self::Repr = Square::A1 as _;
    const MAX: Self::Repr = Square::H8 as _;
}

impl Perspective for Square {
    /// Flips this square's [`Rank`].
    #[inline(always)]
    fn flip(&self) -> Self {
        <Self as Integer>::new(self.get() ^ Square::A8.get())
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = InvalidSquare;

    #[inline(always)]
    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Square::at(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
