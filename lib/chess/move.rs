use crate::chess::{ParseRoleError, ParseSquareError, Role, Square};
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Move(pub Square, pub Square, pub Option<Role>);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Role`] a pawn is promoted to, if any.
    #[inline(always)]
    pub fn promotion(&self) -> Option<Role> {
        self.2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.whence(), f)?;
        fmt::Display::fmt(&self.whither(), f)?;

        if let Some(r) = self.promotion() {
            fmt::Display::fmt(&r, f)?;
        }

        Ok(())
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse move")]
    InvalidPromotion(ParseRoleError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        let j = s.char_indices().nth(4).map_or_else(|| s.len(), |(i, _)| i);

        let promotion = match &s[j..] {
            "" => None,
            r => Some(r.parse()?),
        };

        Ok(Move(s[..i].parse()?, s[i..j].parse()?, promotion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn move_serializes_to_pure_coordinate_notation(a: Square, b: Square) {
        assert_eq!(Move(a, b, None).to_string(), format!("{a}{b}"));
        assert_eq!(Move(a, b, Some(Role::Knight)).to_string(), format!("{a}{b}n"));
    }

    #[test]
    fn parsing_move_with_promotion_succeeds() {
        assert_eq!(
            "e7e8q".parse(),
            Ok(Move(Square::E7, Square::E8, Some(Role::Queen)))
        );
    }

    #[test]
    fn parsing_move_fails_for_invalid_coordinates() {
        assert!("e9e4".parse::<Move>().is_err());
        assert!("e2".parse::<Move>().is_err());
        assert!("e2e4x".parse::<Move>().is_err());
    }
}
