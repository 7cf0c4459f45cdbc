use crate::chess::{Board, Castles, Color, File, Move, Perspective, Piece, Rank, Role, Square};
use crate::util::Integer;
use derive_more::{Display, Error};

/// Represents an attempt to move from an empty [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "there is no piece on square `{_0}`")]
pub struct EmptySquare(#[error(not(source))] pub Square);

/// What happened on the board as a consequence of a [`Move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveContext {
    /// The piece that moved, as it stands after the move.
    pub piece: Piece,
    /// The piece that was captured, if any.
    pub captured: Option<Piece>,
    /// The rook's source and destination squares, if castling.
    pub castling: Option<(Square, Square)>,
    /// The role a pawn was promoted to, if any.
    pub promotion: Option<Role>,
}

impl MoveContext {
    /// Whether a piece was captured.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether the move was castling.
    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        self.castling.is_some()
    }

    /// Whether a pawn was promoted.
    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl Board {
    /// Executes a [`Move`] without checking whether it is legal.
    ///
    /// The side to move afterwards is the opponent of the piece that moved,
    /// even if that piece moved out of turn.
    ///
    /// Besides relocating the piece, this performs en passant captures,
    /// moves the rook when the king castles, promotes pawns reaching the last
    /// rank to the requested role (a queen if none) and keeps the castling
    /// rights, en passant square, clocks and side to move up to date.
    pub fn make(&mut self, m: Move) -> Result<MoveContext, EmptySquare> {
        let (whence, whither) = (m.whence(), m.whither());
        let mut piece = self[whence].ok_or(EmptySquare(whence))?;

        let mut captured = None;
        let mut castling = None;
        let mut promotion = None;

        let mover = piece.color;
        let is_diagonal = whence.file() != whither.file();
        if piece.role == Role::Pawn
            && is_diagonal
            && self.en_passant == Some(whither)
            && self[whither].is_none()
        {
            let behind = Square::new(whither.file(), whence.rank());
            if self[behind].map(|q| (q.color, q.role)) == Some((!mover, Role::Pawn)) {
                captured = self.placement.take(behind);
            }
        }

        if piece.role == Role::King && (whither.file() - whence.file()).abs() == 2 {
            let corner = if whither.file() > whence.file() { File::H } else { File::A };
            let rook = Square::new(corner, whence.rank());
            let file = File::new((whence.file().get() + whither.file().get()) / 2);
            let target = Square::new(file, whence.rank());
            if self[rook].is_some() {
                self.placement.relocate(rook, target);
                castling = Some((rook, target));
            }
        }

        if let Some(p) = self.placement.relocate(whence, whither) {
            captured = Some(p);
        }

        piece.square = whither;
        piece.moved = true;

        if piece.role == Role::Pawn && whither.rank() == Rank::Eighth.perspective(piece.color) {
            piece.role = m.promotion().filter(Role::is_promotion).unwrap_or(Role::Queen);
            promotion = Some(piece.role);
            self.placement.put(piece);
        }

        let passed = Square::new(whence.file(), Rank::Third.perspective(mover));
        let is_double_push = piece.role == Role::Pawn
            && whence.file() == whither.file()
            && whence.rank() == Rank::Second.perspective(mover)
            && whither.rank() == Rank::Fourth.perspective(mover);

        self.en_passant = if is_double_push && self[passed].is_none() {
            Some(passed)
        } else {
            None
        };

        if piece.role == Role::Pawn || promotion.is_some() || captured.is_some() {
            self.halfmoves = 0;
        } else {
            self.halfmoves = self.halfmoves.saturating_add(1);
        }

        if mover == Color::Black {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }

        self.castles
            .remove(Castles::revoked_by(whence) | Castles::revoked_by(whither));
        self.turn = !mover;

        Ok(MoveContext {
            piece,
            captured,
            castling,
            promotion,
        })
    }
}
