use crate::chess::{Board, Color, Destinations, EmptySquare, InvalidSquare, Move, Outcome};
use crate::chess::{ParseFenError, Perspective, Piece, Position, Rank, Role, Square};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

mod event;
mod options;
mod record;
mod rules;
mod status;

pub use event::*;
pub use options::*;
pub use record::*;
pub use rules::*;
pub use status::*;

/// The reason why a move was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[error(ignore)]
pub enum IllegalMove {
    #[display(fmt = "the game is over by {_0}")]
    GameOver(Outcome),

    #[display(fmt = "there is no piece on square `{_0}`")]
    EmptySquare(Square),

    #[display(fmt = "the piece on square `{square}` is {color}, but it is {turn}'s turn")]
    OutOfTurn {
        square: Square,
        color: Color,
        turn: Color,
    },

    #[display(fmt = "move `{_0}` is illegal in this position")]
    Unreachable(Move),

    #[display(fmt = "the king on square `{_0}` cannot be captured")]
    KingCapture(Square),

    #[display(fmt = "pawns cannot be promoted to `{_0}`")]
    InvalidPromotion(Role),
}

/// The reason why a move given by board coordinates was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum PlayError {
    #[display(fmt = "{_0}")]
    InvalidSquare(InvalidSquare),
    #[display(fmt = "{_0}")]
    IllegalMove(IllegalMove),
}

/// What became of a move submitted to a [`Game`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Played {
    /// The move was committed, producing these events.
    Moved(Vec<Event>),

    /// The move is on hold until it is resubmitted with a promotion.
    ///
    /// Nothing about the game changed.
    PromotionRequired(Event),
}

impl Played {
    /// The events produced by the move.
    pub fn events(&self) -> &[Event] {
        match self {
            Played::Moved(events) => events,
            Played::PromotionRequired(e) => std::slice::from_ref(e),
        }
    }

    /// The record of the committed move, if any.
    pub fn record(&self) -> Option<&MoveRecord> {
        self.events().iter().find_map(|e| match e {
            Event::Moved(r) => Some(r),
            _ => None,
        })
    }
}

/// A chess game session.
///
/// Tracks the position, the move history and the lifecycle of a single game,
/// validating moves and reporting what each of them caused.
#[derive(Debug, Clone)]
pub struct Game {
    initial: Board,
    position: Position,
    history: Vec<MoveRecord>,
    status: Status,
    rules: Rules,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Rules::default())
    }
}

impl Game {
    /// A game from the standard starting position.
    pub fn new(rules: Rules) -> Self {
        Game::from_board(Board::default(), rules)
    }

    /// A game from an arbitrary [`Board`].
    pub fn from_board(board: Board, rules: Rules) -> Self {
        Game {
            initial: board,
            position: Position::new(board),
            history: Vec::new(),
            status: Status::NotStarted,
            rules,
        }
    }

    /// Replaces the game with one starting from a FEN string.
    ///
    /// Either a complete FEN string or just its piece placement field is accepted.
    /// The game is left untouched if parsing fails.
    #[instrument(level = "debug", skip(self), err)]
    pub fn load(&mut self, fen: &str) -> Result<(), ParseFenError> {
        *self = Game::from_board(fen.parse()?, self.rules);
        Ok(())
    }

    /// Starts the game.
    ///
    /// If the starting position already ends the game, the game ends right away.
    /// A halfmove clock already at the fifty-move threshold is reported.
    /// Does nothing unless the game has not started yet.
    #[instrument(level = "debug", skip(self), fields(pos = %self.position))]
    pub fn start(&mut self) -> Vec<Event> {
        let mut events = Vec::new();

        if self.status == Status::NotStarted {
            self.status = Status::InProgress;
            events.push(Event::Start);

            if let Some(o) = self.position.outcome(self.rules.repetition_threshold) {
                events.push(self.conclude(o));
            } else if self.is_fifty_move_claimable() {
                events.push(Event::FiftyMoveReached);
            }
        }

        events
    }

    /// Resets to the last loaded position and starts over.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) -> Vec<Event> {
        *self = Game::from_board(self.initial, self.rules);
        self.start()
    }

    fn conclude(&mut self, o: Outcome) -> Event {
        info!(outcome = %o, "game over");
        self.status = Status::Ended(o);

        match o {
            Outcome::Checkmate(c) => Event::Checkmate(c),
            Outcome::Stalemate(c) => Event::Stalemate(c),
            Outcome::DrawByRepetition => Event::Repetition,
            Outcome::DrawByInsufficientMaterial => Event::InsufficientMaterial,
        }
    }

    /// Plays the piece on `whence` to `whither`.
    ///
    /// A game that has not started yet is started by its first move.
    /// Pawn moves onto the last rank without a chosen promotion are put on hold,
    /// see [`Played::PromotionRequired`].
    #[instrument(level = "debug", skip(self), err, fields(pos = %self.position))]
    pub fn play(
        &mut self,
        whence: Square,
        whither: Square,
        options: MoveOptions,
    ) -> Result<Played, IllegalMove> {
        let outcome = match self.status {
            Status::Ended(o) => Some(o),
            Status::NotStarted => self.position.outcome(self.rules.repetition_threshold),
            Status::InProgress => None,
        };

        if let Some(o) = outcome {
            return Err(IllegalMove::GameOver(o));
        }

        let piece = self[whence].ok_or(IllegalMove::EmptySquare(whence))?;

        if self[whither].map(|p| p.role) == Some(Role::King) {
            return Err(IllegalMove::KingCapture(whither));
        }

        if let Some(role) = options.promotion.filter(|r| !r.is_promotion()) {
            return Err(IllegalMove::InvalidPromotion(role));
        }

        if options.validate {
            if piece.color != self.turn() {
                return Err(IllegalMove::OutOfTurn {
                    square: whence,
                    color: piece.color,
                    turn: self.turn(),
                });
            }

            if !self.position.legal_moves(whence).contains(&whither) {
                let m = Move(whence, whither, options.promotion);
                return Err(IllegalMove::Unreachable(m));
            }
        }

        let last = Rank::Eighth.perspective(piece.color);
        if piece.role == Role::Pawn && whither.rank() == last && options.promotion.is_none() {
            debug!(%whence, %whither, "promotion required");
            return Ok(Played::PromotionRequired(Event::RequestPromotion {
                color: piece.color,
                whence,
                whither,
            }));
        }

        let events = self.start();
        let m = Move(whence, whither, options.promotion);
        Ok(Played::Moved(self.commit(piece, m, events)?))
    }

    fn commit(
        &mut self,
        piece: Piece,
        m: Move,
        mut events: Vec<Event>,
    ) -> Result<Vec<Event>, IllegalMove> {
        let before = self.position.to_string();
        let fullmoves = self.position.fullmoves;

        let mc = self
            .position
            .make(m)
            .map_err(|EmptySquare(sq)| IllegalMove::EmptySquare(sq))?;

        let opponent = !piece.color;
        let check = self.position.in_check(opponent);
        let stuck = !self.position.has_moves(opponent);

        let record = MoveRecord {
            piece,
            whence: m.whence(),
            whither: m.whither(),
            captured: mc.captured,
            castling: mc.castling,
            promotion: mc.promotion,
            check,
            checkmate: check && stuck,
            before,
            after: self.position.to_string(),
            fullmoves,
        };

        info!(%record, fen = %record.after);
        self.history.push(record.clone());
        events.push(Event::Moved(record));

        if stuck {
            let o = if check {
                Outcome::Checkmate(opponent)
            } else {
                Outcome::Stalemate(opponent)
            };

            events.push(self.conclude(o));
            return Ok(events);
        }

        if check {
            events.push(Event::Check(opponent));
        }

        if self.position.is_material_insufficient() {
            events.push(self.conclude(Outcome::DrawByInsufficientMaterial));
        } else if self.position.is_draw_by_repetition(self.rules.repetition_threshold) {
            events.push(self.conclude(Outcome::DrawByRepetition));
        } else if self.position.halfmoves == self.rules.fifty_move_threshold {
            events.push(Event::FiftyMoveReached);
        }

        Ok(events)
    }

    /// Plays a move given by board coordinates, see [`Square::at`].
    pub fn play_at(
        &mut self,
        whence: (i32, i32),
        whither: (i32, i32),
        options: MoveOptions,
    ) -> Result<Played, PlayError> {
        let whence = Square::try_from(whence)?;
        let whither = Square::try_from(whither)?;
        Ok(self.play(whence, whither, options)?)
    }

    /// The current [`Position`].
    #[inline(always)]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The [`Rules`] this game is played by.
    #[inline(always)]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The current [`Status`].
    #[inline(always)]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The moves committed since the game was loaded.
    #[inline(always)]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The piece on `sq`, if any.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.position[sq]
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.position.turn
    }

    /// The current position in FEN.
    pub fn fen(&self) -> String {
        self.position.to_string()
    }

    /// The squares the piece on `sq` may legally move to.
    pub fn legal_moves(&self, sq: Square) -> Destinations {
        self.position.legal_moves(sq)
    }

    /// Whether the king of `side` is attacked.
    pub fn in_check(&self, side: Color) -> bool {
        self.position.in_check(side)
    }

    /// The squares occupied by pieces of a [`Role`] and [`Color`].
    pub fn locate(&self, role: Role, color: Color) -> Vec<Square> {
        self.position.locate(role, color).collect()
    }

    /// Whether a draw may be claimed under the fifty-move rule.
    pub fn is_fifty_move_claimable(&self) -> bool {
        self.position
            .is_fifty_move_claimable(self.rules.fifty_move_threshold)
    }
}

impl std::ops::Index<Square> for Game {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.position[sq]
    }
}
