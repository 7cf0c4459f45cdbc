use crate::chess::{Color, Outcome};
use derive_more::Display;

/// The lifecycle state of a [`Game`][`crate::game::Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[display(fmt = "not started")]
    NotStarted,
    #[display(fmt = "in progress")]
    InProgress,
    #[display(fmt = "{_0}")]
    Ended(Outcome),
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

impl Status {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Status::Ended(_))
    }

    /// The [`Outcome`], if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            Status::Ended(o) => Some(o),
            _ => None,
        }
    }

    /// The winning side, if the game ended decisively.
    pub fn winner(&self) -> Option<Color> {
        self.outcome()?.winner()
    }
}
