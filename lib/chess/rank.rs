use crate::chess::Perspective;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    /// The board row of this rank, counting down from the eighth rank.
    #[inline(always)]
    pub fn row(&self) -> usize {
        (Rank::MAX - self.get()) as usize
    }

    /// The rank at a board row, if any.
    #[inline(always)]
    pub fn from_row(row: i32) -> Option<Self> {
        let r = (Rank::MAX as i32).checked_sub(row)?;
        i8::try_from(r).ok().and_then(Rank::try_new)
    }
}

unsafe impl Integer for Rank {
    type Repr = i8;
    const MIN: Self::Repr = Rank::First as _;
    const MAX: Self::Repr = Rank::Eighth as _;
}

impl Perspective for Rank {
    /// This rank as seen by the opponent.
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::new(Self::MAX - self.get())
    }
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse rank, expected a single digit between `1` and `8`")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ '1'..='8'), None) => Ok(Rank::new((c as u8 - b'1') as i8)),
            _ => Err(ParseRankError),
        }
    }
}
