use crate::chess::{Board, EmptySquare, Move, MoveContext, Outcome, Role};
use derive_more::{DebugCustom, Deref, Display};
use proptest::{prelude::*, strategy::Map};
use std::collections::HashMap;

/// The current position on the chess board, together with the positions
/// that led to it.
#[derive(DebugCustom, Display, Clone, Eq, PartialEq, Deref)]
#[debug(fmt = "Position({})", self)]
#[display(fmt = "{board}")]
pub struct Position {
    #[deref]
    board: Board,
    repetitions: HashMap<String, usize>,
}

impl Position {
    /// Starts tracking a game from a [`Board`].
    ///
    /// The initial board counts once towards repetitions.
    pub fn new(board: Board) -> Self {
        let mut repetitions = HashMap::new();
        repetitions.insert(board.repetition_key(), 1);
        Position { board, repetitions }
    }

    /// The current [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How many times the current position has occurred.
    pub fn repetitions(&self) -> usize {
        let key = self.repetition_key();
        self.repetitions.get(&key).copied().unwrap_or_default()
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.in_check(self.turn)
    }

    /// Whether the side to move is in check and has no legal moves.
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_moves(self.turn)
    }

    /// Whether the side to move is not in check but has no legal moves.
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_moves(self.turn)
    }

    /// Whether the current position occurred at least `threshold` times.
    pub fn is_draw_by_repetition(&self, threshold: usize) -> bool {
        self.repetitions() >= threshold
    }

    /// Whether the halfmove clock reached `threshold`.
    pub fn is_fifty_move_claimable(&self, threshold: u32) -> bool {
        self.halfmoves >= threshold
    }

    /// Whether neither side has enough material left to deliver checkmate.
    ///
    /// Only bare kings, a single minor piece, two knights, or a bishop
    /// against a knight count as insufficient.
    pub fn is_material_insufficient(&self) -> bool {
        // Bishops and knights of each side.
        let mut minors = [(0, 0); 2];

        for p in self.placement.iter() {
            match p.role {
                Role::King => {}
                Role::Bishop => minors[p.color as usize].0 += 1,
                Role::Knight => minors[p.color as usize].1 += 1,
                _ => return false,
            }
        }

        minors.sort();
        matches!(
            minors,
            [(0, 0), (0, 0) | (0, 1) | (0, 2) | (1, 0)] | [(0, 1), (1, 0)]
        )
    }

    /// The [`Outcome`] of the game if the current position ends it.
    pub fn outcome(&self, repetitions: usize) -> Option<Outcome> {
        let side = self.turn;

        if !self.has_moves(side) {
            if self.is_check() {
                Some(Outcome::Checkmate(side))
            } else {
                Some(Outcome::Stalemate(side))
            }
        } else if self.is_material_insufficient() {
            Some(Outcome::DrawByInsufficientMaterial)
        } else if self.is_draw_by_repetition(repetitions) {
            Some(Outcome::DrawByRepetition)
        } else {
            None
        }
    }

    /// Executes a [`Move`] without checking whether it is legal,
    /// and records the resulting position.
    pub fn make(&mut self, m: Move) -> Result<MoveContext, EmptySquare> {
        let mc = self.board.make(m)?;
        *self.repetitions.entry(self.board.repetition_key()).or_default() += 1;
        Ok(mc)
    }

    /// Plays a legal [`Move`] of the side to move.
    ///
    /// Returns `None` and leaves the position untouched if the move is not legal.
    pub fn play(&mut self, m: Move) -> Option<MoveContext> {
        if !self.moves().contains(&m) {
            return None;
        }

        self.make(m).ok()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(Board::default())
    }
}

impl From<Board> for Position {
    #[inline(always)]
    fn from(board: Board) -> Self {
        Position::new(board)
    }
}

impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = Map<<Board as Arbitrary>::Strategy, fn(Board) -> Position>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<Board>().prop_map(Position::new)
    }
}
