use crate::chess::{Board, Color, Destinations, Move, Perspective, Rank, Role, Square};

/// The roles a pawn may be promoted to.
pub const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

impl Board {
    /// Whether the king of `side` is attacked.
    ///
    /// A side without a king is never in check.
    pub fn in_check(&self, side: Color) -> bool {
        match self.king(side) {
            None => false,
            Some(sq) => self.is_attacked(sq, !side),
        }
    }

    /// The squares the piece on `sq` may legally move to.
    ///
    /// A destination is legal if, after the move is fully carried out,
    /// the mover's own king is not attacked.
    pub fn legal_moves(&self, sq: Square) -> Destinations {
        let mut moves = self.pseudo_moves(sq);

        if let Some(p) = self[sq] {
            moves.retain(|whither| {
                let mut next = *self;
                next.make(Move(sq, *whither, None)).is_ok() && !next.in_check(p.color)
            });
        }

        moves
    }

    /// Whether `side` has at least one legal move.
    pub fn has_moves(&self, side: Color) -> bool {
        self.pieces(side)
            .any(|p| !self.legal_moves(p.square).is_empty())
    }

    /// Every legal [`Move`] of the side to move.
    ///
    /// Pawn moves onto the last rank are expanded into one move per promotion.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for p in self.pieces(self.turn) {
            let last = Rank::Eighth.perspective(p.color);
            for whither in self.legal_moves(p.square) {
                if p.role == Role::Pawn && whither.rank() == last {
                    moves.extend(PROMOTIONS.map(|r| Move(p.square, whither, Some(r))));
                } else {
                    moves.push(Move(p.square, whither, None));
                }
            }
        }

        moves
    }
}
