use crate::chess::{Board, Castles, Color, Perspective, Piece, Rank, Role, Square};
use arrayvec::ArrayVec;

/// The [`Square`]s a piece may move to.
pub type Destinations = ArrayVec<Square, 28>;

const KNIGHT: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const ADJACENT: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl Board {
    /// The squares reachable in a single step along each direction.
    fn leap(&self, p: &Piece, deltas: &[(i8, i8)], moves: &mut Destinations) {
        for &(df, dr) in deltas {
            if let Some(sq) = p.square.shift(df, dr) {
                if self[sq].map_or(true, |q| q.color != p.color) {
                    moves.push(sq);
                }
            }
        }
    }

    /// The squares reachable along each direction up to the first obstacle.
    ///
    /// The obstacle itself is included if it belongs to the opponent.
    fn slide(&self, p: &Piece, deltas: &[(i8, i8)], moves: &mut Destinations) {
        for &(df, dr) in deltas {
            let mut next = p.square.shift(df, dr);
            while let Some(sq) = next {
                match self[sq] {
                    None => moves.push(sq),
                    Some(q) => {
                        if q.color != p.color {
                            moves.push(sq);
                        }

                        break;
                    }
                }

                next = sq.shift(df, dr);
            }
        }
    }

    /// The diagonal squares a pawn threatens, whether or not anything stands on them.
    fn pawn_attacks(&self, p: &Piece, moves: &mut Destinations) {
        let dr = Rank::Second.perspective(p.color) - Rank::First.perspective(p.color);
        for df in [-1, 1] {
            if let Some(sq) = p.square.shift(df, dr) {
                moves.push(sq);
            }
        }
    }

    fn pawn_moves(&self, p: &Piece, moves: &mut Destinations) {
        let dr = Rank::Second.perspective(p.color) - Rank::First.perspective(p.color);

        if let Some(one) = p.square.shift(0, dr).filter(|&sq| self[sq].is_none()) {
            moves.push(one);

            if p.square.rank() == Rank::Second.perspective(p.color) {
                if let Some(two) = one.shift(0, dr).filter(|&sq| self[sq].is_none()) {
                    moves.push(two);
                }
            }
        }

        let mut threats = Destinations::new();
        self.pawn_attacks(p, &mut threats);
        for sq in threats {
            match self[sq] {
                Some(q) if q.color != p.color => moves.push(sq),
                None if self.is_en_passant_target(sq, p.color) => moves.push(sq),
                _ => {}
            }
        }
    }

    /// Whether a pawn of `side` may capture en passant onto `sq`.
    fn is_en_passant_target(&self, sq: Square, side: Color) -> bool {
        if self.en_passant != Some(sq) || sq.rank() != Rank::Sixth.perspective(side) {
            return false;
        }

        let behind = Square::new(sq.file(), Rank::Fifth.perspective(side));
        self[behind].map(|q| (q.color, q.role)) == Some((!side, Role::Pawn))
    }

    fn castling_moves(&self, king: &Piece, moves: &mut Destinations) {
        let side = king.color;
        if king.square != Square::E1.perspective(side) || self.castles.is_empty() {
            return;
        }

        for right in [Castles::short(side), Castles::long(side)] {
            if !self.castles.contains(right) {
                continue;
            }

            let rook = right.rook();
            if self[rook].map(|q| (q.color, q.role)) != Some((side, Role::Rook)) {
                continue;
            }

            let step = (rook.file() - king.square.file()).signum();
            let mut between = king.square.shift(step, 0);
            let mut clear = true;
            while let Some(sq) = between.filter(|&sq| sq != rook) {
                clear &= self[sq].is_none();
                between = sq.shift(step, 0);
            }

            if !clear {
                continue;
            }

            let path = [Some(king.square), king.square.shift(step, 0), king.square.shift(2 * step, 0)];
            if let [Some(whence), Some(transit), Some(whither)] = path {
                if ![whence, transit, whither]
                    .into_iter()
                    .any(|sq| self.is_attacked(sq, !side))
                {
                    moves.push(whither);
                }
            }
        }
    }

    /// The squares a piece other than a pawn reaches by geometry alone.
    fn reach(&self, p: &Piece, moves: &mut Destinations) {
        let deltas: &[(i8, i8)] = match p.role {
            Role::Pawn => return,
            Role::Knight => &KNIGHT,
            Role::Bishop => &DIAGONAL,
            Role::Rook => &ORTHOGONAL,
            Role::Queen | Role::King => &ADJACENT,
        };

        if p.role.is_slider() {
            self.slide(p, deltas, moves);
        } else {
            self.leap(p, deltas, moves);
        }
    }

    /// The squares the piece on `sq` could move to, ignoring whether its own king
    /// would be left in check.
    ///
    /// Returns nothing if `sq` is empty.
    pub fn pseudo_moves(&self, sq: Square) -> Destinations {
        let mut moves = Destinations::new();

        if let Some(p) = &self[sq] {
            match p.role {
                Role::Pawn => self.pawn_moves(p, &mut moves),
                Role::King => {
                    self.reach(p, &mut moves);
                    self.castling_moves(p, &mut moves);
                }
                _ => self.reach(p, &mut moves),
            }
        }

        moves
    }

    /// The squares the piece on `sq` threatens.
    ///
    /// Unlike [`Board::pseudo_moves`], pawns threaten both forward diagonals
    /// regardless of occupancy and never threaten the squares they push to,
    /// while kings never threaten their castling destinations.
    pub fn attacks(&self, sq: Square) -> Destinations {
        let mut moves = Destinations::new();

        if let Some(p) = &self[sq] {
            match p.role {
                Role::Pawn => self.pawn_attacks(p, &mut moves),
                _ => self.reach(p, &mut moves),
            }
        }

        moves
    }

    /// Whether any piece of color `by` threatens `sq`.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces(by).any(|p| self.attacks(p.square).contains(&sq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    fn sorted(mut moves: Destinations) -> Vec<Square> {
        moves.sort();
        moves.to_vec()
    }

    #[proptest]
    fn empty_squares_have_no_moves(b: Board, #[filter(#b[#sq].is_none())] sq: Square) {
        assert!(b.pseudo_moves(sq).is_empty());
        assert!(b.attacks(sq).is_empty());
    }

    #[proptest]
    fn pieces_never_move_onto_their_own_side(b: Board, sq: Square) {
        let color = b[sq].map(|p| p.color);
        for m in b.pseudo_moves(sq) {
            assert_ne!(b[m].map(|p| p.color), color);
        }
    }

    #[proptest]
    fn destinations_are_unique(b: Board, sq: Square) {
        let moves = sorted(b.pseudo_moves(sq));
        let mut unique = moves.clone();
        unique.dedup();
        assert_eq!(moves, unique);
    }

    #[test]
    fn pawns_may_push_twice_from_their_starting_rank() {
        let b = Board::default();
        assert_eq!(sorted(b.pseudo_moves(Square::E2)), [Square::E3, Square::E4]);
        assert_eq!(sorted(b.pseudo_moves(Square::D7)), [Square::D5, Square::D6]);
    }

    #[test]
    fn pawns_cannot_push_through_pieces() {
        let b = board("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(b.pseudo_moves(Square::E2).is_empty());
    }

    #[test]
    fn pawns_capture_diagonally() {
        let b = board("4k3/8/8/3p1p2/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(
            sorted(b.pseudo_moves(Square::E4)),
            [Square::D5, Square::E5, Square::F5]
        );
    }

    #[test]
    fn pawns_capture_en_passant() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        assert_eq!(sorted(b.pseudo_moves(Square::E5)), [Square::D6, Square::E6]);
    }

    #[test]
    fn pawns_threaten_both_diagonals_regardless_of_occupancy() {
        let b = board("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(sorted(b.attacks(Square::E2)), [Square::D3, Square::F3]);
        assert!(b.is_attacked(Square::F3, Color::White));
        assert!(!b.is_attacked(Square::E3, Color::White));
    }

    #[test]
    fn knights_jump_over_pieces() {
        let b = Board::default();
        assert_eq!(sorted(b.pseudo_moves(Square::G1)), [Square::F3, Square::H3]);
    }

    #[test]
    fn sliders_stop_at_the_first_obstacle() {
        let b = board("4k3/8/8/8/1p1R2P1/8/8/4K3 w - - 0 1");
        assert_eq!(
            sorted(b.pseudo_moves(Square::D4)),
            [
                Square::D1,
                Square::D2,
                Square::D3,
                Square::B4,
                Square::C4,
                Square::E4,
                Square::F4,
                Square::D5,
                Square::D6,
                Square::D7,
                Square::D8,
            ]
        );
    }

    #[test]
    fn kings_may_castle_through_empty_unattacked_squares() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let moves = b.pseudo_moves(Square::E1);
        assert!(moves.contains(&Square::G1));
        assert!(moves.contains(&Square::C1));

        let moves = b.pseudo_moves(Square::E8);
        assert!(moves.contains(&Square::G8));
        assert!(moves.contains(&Square::C8));
    }

    #[test]
    fn kings_cannot_castle_without_the_right() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w Qk - 0 1");
        assert!(!b.pseudo_moves(Square::E1).contains(&Square::G1));
        assert!(b.pseudo_moves(Square::E1).contains(&Square::C1));
        assert!(b.pseudo_moves(Square::E8).contains(&Square::G8));
        assert!(!b.pseudo_moves(Square::E8).contains(&Square::C8));
    }

    #[test]
    fn kings_cannot_castle_through_pieces() {
        let b = board("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
        assert!(!b.pseudo_moves(Square::E1).contains(&Square::G1));
        assert!(!b.pseudo_moves(Square::E1).contains(&Square::C1));
    }

    #[test]
    fn kings_cannot_castle_out_of_through_or_into_check() {
        let b = board("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(b.pseudo_moves(Square::E1).contains(&Square::G1));

        let b = board("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
        assert!(!b.pseudo_moves(Square::E1).contains(&Square::G1));
        assert!(!b.pseudo_moves(Square::E1).contains(&Square::C1));

        let b = board("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
        assert!(!b.pseudo_moves(Square::E1).contains(&Square::G1));
        assert!(b.pseudo_moves(Square::E1).contains(&Square::C1));

        let b = board("4k3/8/8/8/8/8/2r5/R3K2R w KQ - 0 1");
        assert!(b.pseudo_moves(Square::E1).contains(&Square::G1));
        assert!(!b.pseudo_moves(Square::E1).contains(&Square::C1));
    }

    #[test]
    fn long_castling_is_allowed_when_only_the_rook_path_is_attacked() {
        let b = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(b.pseudo_moves(Square::E1).contains(&Square::C1));
    }
}
