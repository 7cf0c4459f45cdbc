use crate::chess::{Color, Perspective, Square};
use bitflags::bitflags;
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

bitflags! {
    /// The castling rights in a chess [`Board`][`crate::chess::Board`].
    #[derive(Default)]
    pub struct Castles: u8 {
        const WHITE_SHORT = 0b0001;
        const WHITE_LONG = 0b0010;
        const BLACK_SHORT = 0b0100;
        const BLACK_LONG = 0b1000;
    }
}

impl Castles {
    /// The kingside castling right of a side.
    #[inline(always)]
    pub fn short(side: Color) -> Self {
        match side {
            Color::White => Castles::WHITE_SHORT,
            Color::Black => Castles::BLACK_SHORT,
        }
    }

    /// The queenside castling right of a side.
    #[inline(always)]
    pub fn long(side: Color) -> Self {
        match side {
            Color::White => Castles::WHITE_LONG,
            Color::Black => Castles::BLACK_LONG,
        }
    }

    /// Both castling rights of a side.
    #[inline(always)]
    pub fn of(side: Color) -> Self {
        Castles::short(side) | Castles::long(side)
    }

    /// Whether the given side has kingside castling rights.
    #[inline(always)]
    pub fn has_short(&self, side: Color) -> bool {
        self.contains(Castles::short(side))
    }

    /// Whether the given side has queenside castling rights.
    #[inline(always)]
    pub fn has_long(&self, side: Color) -> bool {
        self.contains(Castles::long(side))
    }

    /// The castling rights lost when a piece moves from or onto a [`Square`].
    ///
    /// Only the home squares of kings and rooks revoke anything.
    pub fn revoked_by(sq: Square) -> Self {
        use Square::*;
        match sq {
            E1 => Castles::of(Color::White),
            H1 => Castles::WHITE_SHORT,
            A1 => Castles::WHITE_LONG,
            E8 => Castles::of(Color::Black),
            H8 => Castles::BLACK_SHORT,
            A8 => Castles::BLACK_LONG,
            _ => Castles::empty(),
        }
    }

    /// The home square of the rook that castles with this right.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not exactly one castling right.
    pub fn rook(&self) -> Square {
        match *self {
            Castles::WHITE_SHORT => Square::H1,
            Castles::WHITE_LONG => Square::A1,
            Castles::BLACK_SHORT => Square::H1.flip(),
            Castles::BLACK_LONG => Square::A1.flip(),
            _ => panic!("expected a single castling right, got `{self}`"),
        }
    }
}

impl fmt::Display for Castles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (right, c) in [
            (Castles::WHITE_SHORT, "K"),
            (Castles::WHITE_LONG, "Q"),
            (Castles::BLACK_SHORT, "k"),
            (Castles::BLACK_LONG, "q"),
        ] {
            if self.contains(right) {
                f.write_str(c)?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Castles`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse castling rights")]
pub struct ParseCastlesError;

impl FromStr for Castles {
    type Err = ParseCastlesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut castles = Castles::empty();

        for c in s.chars() {
            let right = match c {
                'K' => Castles::WHITE_SHORT,
                'Q' => Castles::WHITE_LONG,
                'k' => Castles::BLACK_SHORT,
                'q' => Castles::BLACK_LONG,
                _ => return Err(ParseCastlesError),
            };

            if castles.contains(right) {
                return Err(ParseCastlesError);
            }

            castles |= right;
        }

        Ok(castles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_strategy::proptest;

    #[proptest]
    fn short_and_long_rights_are_disjoint(c: Color) {
        assert_eq!(Castles::short(c) & Castles::long(c), Castles::empty());
        assert_eq!(Castles::of(c) & Castles::of(!c), Castles::empty());
    }

    #[proptest]
    fn moving_the_king_revokes_both_rights(c: Color) {
        assert_eq!(Castles::revoked_by(Square::E1.perspective(c)), Castles::of(c));
    }

    #[proptest]
    fn moving_a_rook_revokes_its_right(c: Color) {
        assert_eq!(Castles::revoked_by(Castles::short(c).rook()), Castles::short(c));
        assert_eq!(Castles::revoked_by(Castles::long(c).rook()), Castles::long(c));
    }

    #[test]
    fn castles_are_printed_in_fen_order() {
        assert_eq!(Castles::all().to_string(), "KQkq");
        assert_eq!((Castles::WHITE_LONG | Castles::BLACK_SHORT).to_string(), "Qk");
        assert_eq!(Castles::empty().to_string(), "");
    }

    #[proptest]
    fn parsing_printed_castles_is_an_identity(
        #[strategy(any::<u8>().prop_map(Castles::from_bits_truncate))] cr: Castles,
    ) {
        assert_eq!(cr.to_string().parse(), Ok(cr));
    }

    #[proptest]
    fn parsing_castles_fails_if_right_is_duplicated(
        #[filter(!#s.is_empty())]
        #[strategy("(KK)?(kk)?(QQ)?(qq)?")]
        s: String,
    ) {
        assert_eq!(Castles::from_str(&s), Err(ParseCastlesError));
    }

    #[proptest]
    fn parsing_castles_fails_for_unknown_letters(#[filter(!"KQkq".contains(#c))] c: char) {
        assert_eq!(c.to_string().parse::<Castles>(), Err(ParseCastlesError));
    }
}
