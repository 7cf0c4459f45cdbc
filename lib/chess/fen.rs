use crate::chess::{Board, Castles, Color, File, Perspective, Piece, Placement, Rank, Role, Square};
use crate::util::Integer;
use arrayvec::ArrayString;
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;

/// The specific reason why a FEN string is invalid.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error(ignore)]
pub enum InvalidFen {
    #[display(fmt = "expected 8 ranks in the piece placement")]
    WrongNumberOfRanks,
    #[display(fmt = "rank {_0} does not describe exactly 8 squares")]
    WrongNumberOfSquares(Rank),
    #[display(fmt = "`{_0}` is not a piece, expected one of `PNBRQKpnbrqk`")]
    InvalidPiece(char),
    #[display(fmt = "expected exactly one {_0} king")]
    WrongNumberOfKings(Color),
    #[display(fmt = "failed to parse side to move")]
    InvalidSideToMove,
    #[display(fmt = "failed to parse castling rights")]
    InvalidCastlingRights,
    #[display(fmt = "failed to parse en passant square")]
    InvalidEnPassantSquare,
    #[display(fmt = "failed to parse halfmove clock")]
    InvalidHalfmoveClock,
    #[display(fmt = "failed to parse fullmove number")]
    InvalidFullmoveNumber,
    #[display(fmt = "expected either 1 or 6 space separated fields")]
    InvalidSyntax,
}

/// The reason why parsing a FEN string failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "invalid FEN `{fen}`: {reason}")]
pub struct ParseFenError {
    pub fen: String,
    #[error(source)]
    pub reason: InvalidFen,
}

impl ParseFenError {
    fn new(fen: &str, reason: InvalidFen) -> Self {
        ParseFenError {
            fen: fen.into(),
            reason,
        }
    }
}

fn parse_placement(s: &str) -> Result<Placement, InvalidFen> {
    let ranks: Vec<_> = s.split('/').collect();
    if ranks.len() != 8 {
        return Err(InvalidFen::WrongNumberOfRanks);
    }

    let mut placement = Placement::default();
    for (segment, rank) in ranks.into_iter().zip(Rank::iter().rev()) {
        let mut file = 0;
        for c in segment.chars() {
            if let Some(skip @ 1..=8) = c.to_digit(10) {
                file += skip as i8;
            } else {
                let sq = File::try_new(file)
                    .map(|f| Square::new(f, rank))
                    .ok_or(InvalidFen::WrongNumberOfSquares(rank))?;

                let p = Piece::from_fen(c, sq).map_err(|e| InvalidFen::InvalidPiece(e.0))?;
                placement.put(p);
                file += 1;
            }

            if file > 8 {
                return Err(InvalidFen::WrongNumberOfSquares(rank));
            }
        }

        if file != 8 {
            return Err(InvalidFen::WrongNumberOfSquares(rank));
        }
    }

    for side in [Color::White, Color::Black] {
        if placement.locate(Role::King, side).count() != 1 {
            return Err(InvalidFen::WrongNumberOfKings(side));
        }
    }

    Ok(placement)
}

/// Derives whether each piece has moved from what the FEN fields imply.
///
/// Kings and rooks are unmoved only while they keep a castling right,
/// pawns only while they stand on their starting rank.
fn infer_moved(placement: &mut Placement, castles: Castles) {
    for sq in Square::iter() {
        if let Some(p) = &mut placement[sq] {
            let side = p.color;
            let home = |s: Square| s.perspective(side);
            p.moved = match p.role {
                Role::Pawn => sq.rank() != Rank::Second.perspective(side),
                Role::King => sq != home(Square::E1) || !castles.intersects(Castles::of(side)),
                Role::Rook if sq == home(Square::H1) => !castles.has_short(side),
                Role::Rook if sq == home(Square::A1) => !castles.has_long(side),
                Role::Rook => true,
                _ => false,
            };
        }
    }
}

/// The castling rights implied by kings and rooks standing on their home squares.
fn infer_castles(placement: &Placement) -> Castles {
    let mut castles = Castles::empty();

    for side in [Color::White, Color::Black] {
        let is = |sq: Square, role| {
            placement[sq.perspective(side)].map(|p| (p.color, p.role)) == Some((side, role))
        };

        if is(Square::E1, Role::King) {
            if is(Square::H1, Role::Rook) {
                castles |= Castles::short(side);
            }

            if is(Square::A1, Role::Rook) {
                castles |= Castles::long(side);
            }
        }
    }

    castles
}

impl Board {
    /// Parses the piece placement field of a FEN string on its own.
    ///
    /// White moves first, castling rights are implied by kings and rooks that
    /// stand on their home squares, there is no en passant square and the
    /// clocks are reset.
    pub fn from_placement(s: &str) -> Result<Self, ParseFenError> {
        let mut placement = parse_placement(s).map_err(|e| ParseFenError::new(s, e))?;
        let castles = infer_castles(&placement);
        infer_moved(&mut placement, castles);

        Ok(Board {
            placement,
            turn: Color::White,
            castles,
            en_passant: None,
            halfmoves: 0,
            fullmoves: 1,
        })
    }

    /// The first four fields of this board's FEN representation.
    ///
    /// Two boards with the same key are the same position for the purpose of
    /// detecting repetitions.
    pub fn repetition_key(&self) -> String {
        let fen = self.to_string();
        match fen.rsplitn(3, ' ').nth(2) {
            Some(key) => key.into(),
            None => fen,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut skip = 0;
        for sq in Square::iter().map(|sq| sq.flip()) {
            let mut buffer = ArrayString::<2>::new();

            match self[sq] {
                None => skip += 1,
                Some(p) => buffer.push(p.fen()),
            }

            if sq.file() == File::H {
                buffer.push(if sq.rank() == Rank::First { ' ' } else { '/' });
            }

            if !buffer.is_empty() && skip > 0 {
                write!(f, "{}", skip)?;
                skip = 0;
            }

            f.write_str(&buffer)?;
        }

        match self.turn {
            Color::White => f.write_str("w ")?,
            Color::Black => f.write_str("b ")?,
        }

        if self.castles.is_empty() {
            f.write_str("- ")?;
        } else {
            write!(f, "{} ", self.castles)?;
        }

        match self.en_passant {
            Some(ep) => write!(f, "{} ", ep)?,
            None => f.write_str("- ")?,
        }

        write!(f, "{} {}", self.halfmoves, self.fullmoves)
    }
}

impl FromStr for Board {
    type Err = ParseFenError;

    /// Parses a complete FEN string, or just its piece placement field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.split_whitespace().collect();
        let [placement, turn, castles, en_passant, halfmoves, fullmoves] = &fields[..] else {
            return match &fields[..] {
                [placement] => Board::from_placement(placement),
                _ => Err(ParseFenError::new(s, InvalidFen::InvalidSyntax)),
            };
        };

        let error = |reason| ParseFenError::new(s, reason);
        let mut placement = parse_placement(placement).map_err(error)?;

        let turn = match *turn {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(error(InvalidFen::InvalidSideToMove)),
        };

        let castles = match *castles {
            "-" => Castles::empty(),
            c => c
                .parse()
                .map_err(|_| error(InvalidFen::InvalidCastlingRights))?,
        };

        let en_passant = match *en_passant {
            "-" => None,
            ep => match ep.parse::<Square>() {
                Ok(sq) if sq.rank() == Rank::Sixth.perspective(turn) && placement[sq].is_none() => {
                    Some(sq)
                }
                _ => return Err(error(InvalidFen::InvalidEnPassantSquare)),
            },
        };

        let Ok(halfmoves) = halfmoves.parse() else {
            return Err(error(InvalidFen::InvalidHalfmoveClock));
        };

        let Ok(fullmoves) = fullmoves.parse() else {
            return Err(error(InvalidFen::InvalidFullmoveNumber));
        };

        infer_moved(&mut placement, castles);

        Ok(Board {
            placement,
            turn,
            castles,
            en_passant,
            halfmoves,
            fullmoves,
        })
    }
}
