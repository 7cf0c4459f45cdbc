use crate::chess::{Castles, Color, File, Perspective, Piece, Placement, Rank, Role, Square};
use crate::util::Integer;
use derive_more::DebugCustom;
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::ops::{Index, Range};

/// A snapshot of the chess board.
///
/// This type does not validate whether the state it holds is reachable
/// according to the rules of chess, that is the job of
/// [`Position`][`crate::chess::Position`].
#[derive(DebugCustom, Copy, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board({})", self)]
pub struct Board {
    pub placement: Placement,
    pub turn: Color,
    pub castles: Castles,
    pub en_passant: Option<Square>,
    pub halfmoves: u32,
    pub fullmoves: u32,
}

impl Default for Board {
    fn default() -> Self {
        use Role::*;

        let mut placement = Placement::default();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (file, role) in File::iter().zip(back) {
            for side in [Color::White, Color::Black] {
                let first = Rank::First.perspective(side);
                let second = Rank::Second.perspective(side);
                placement.put(Piece::new(side, role, Square::new(file, first)));
                placement.put(Piece::new(side, Pawn, Square::new(file, second)));
            }
        }

        Board {
            placement,
            turn: Color::White,
            castles: Castles::all(),
            en_passant: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }
}

impl Board {
    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn pieces(&self, side: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.placement.iter().filter(move |p| p.color == side)
    }

    /// The [`Square`]s occupied by pieces of a [`Role`] and [`Color`].
    pub fn locate(&self, role: Role, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.placement.locate(role, color)
    }

    /// The [`Square`] occupied by the king of a [`Color`], if any.
    #[inline(always)]
    pub fn king(&self, side: Color) -> Option<Square> {
        self.placement.king(side)
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.placement[sq]
    }
}

impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..128, any::<Selector>()).prop_map(|(moves, selector)| {
            let mut board = Board::default();

            for _ in 0..moves {
                match selector.try_select(board.moves()) {
                    None => break,
                    Some(m) => {
                        if board.make(m).is_err() {
                            break;
                        }
                    }
                }
            }

            board
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn default_board_is_the_starting_position() {
        let b = Board::default();
        assert_eq!(b.turn(), Color::White);
        assert_eq!(b.castles, Castles::all());
        assert_eq!(b.en_passant, None);
        assert_eq!((b.halfmoves, b.fullmoves), (0, 1));
        assert_eq!(b.placement.iter().count(), 32);
        assert_eq!(b[Square::E1].map(|p| p.role), Some(Role::King));
        assert_eq!(b[Square::D8].map(|p| p.role), Some(Role::Queen));
        assert_eq!(b[Square::D8].map(|p| p.color), Some(Color::Black));
    }

    #[test]
    fn pieces_of_the_starting_position_have_not_moved() {
        assert!(Board::default().placement.iter().all(|p| !p.moved));
    }

    #[proptest]
    fn pieces_returns_pieces_of_a_color(b: Board, c: Color) {
        assert!(b.pieces(c).all(|p| p.color == c));
    }

    #[proptest]
    fn locate_returns_squares_occupied_by_pieces_of_a_kind(b: Board, r: Role, c: Color) {
        for sq in b.locate(r, c) {
            assert_eq!(b[sq].map(|p| (p.role, p.color)), Some((r, c)));
        }
    }

    #[proptest]
    fn both_kings_are_always_on_the_board(b: Board) {
        assert!(b.king(Color::White).is_some());
        assert!(b.king(Color::Black).is_some());
    }

    #[proptest]
    fn pieces_know_the_square_they_stand_on(b: Board) {
        for p in b.placement.iter() {
            assert_eq!(b[p.square], Some(*p));
        }
    }
}
