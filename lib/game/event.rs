use crate::chess::{Color, Square};
use crate::game::MoveRecord;
use derive_more::Display;

/// Something that happened during a [`Game`][`crate::game::Game`].
///
/// Events produced by a single action are reported in the order they happened.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
pub enum Event {
    /// The game left the not-started state.
    #[display(fmt = "game started")]
    Start,

    /// A move was committed.
    #[display(fmt = "{_0}")]
    Moved(MoveRecord),

    /// The side of the given color is in check.
    #[display(fmt = "the {_0} king is in check")]
    Check(Color),

    /// The side of the given color is checkmated.
    #[display(fmt = "the {_0} king is checkmated")]
    Checkmate(Color),

    /// The side of the given color is stalemated.
    #[display(fmt = "the {_0} player is stalemated")]
    Stalemate(Color),

    #[display(fmt = "draw by insufficient material")]
    InsufficientMaterial,

    #[display(fmt = "draw by repetition")]
    Repetition,

    /// A draw may now be claimed under the fifty-move rule.
    #[display(fmt = "a draw may be claimed under the fifty-move rule")]
    FiftyMoveReached,

    /// A pawn move is on hold until a promotion is chosen.
    #[display(fmt = "the {color} pawn moving from `{whence}` to `{whither}` must be promoted")]
    RequestPromotion {
        color: Color,
        whence: Square,
        whither: Square,
    },
}
