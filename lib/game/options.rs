use crate::chess::Role;

/// How a [`Game`][`crate::game::Game`] should treat a single move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct MoveOptions {
    /// Whether to check the move against the rules of chess.
    ///
    /// When disabled, the move is carried out as long as there is a piece to move.
    pub validate: bool,

    /// The role a pawn reaching the last rank is promoted to.
    pub promotion: Option<Role>,
}

impl Default for MoveOptions {
    fn default() -> Self {
        MoveOptions {
            validate: true,
            promotion: None,
        }
    }
}

impl MoveOptions {
    /// Validated move promoting to `role`.
    pub fn promote(role: Role) -> Self {
        MoveOptions {
            promotion: Some(role),
            ..MoveOptions::default()
        }
    }

    /// Move carried out without validation.
    pub fn unchecked() -> Self {
        MoveOptions {
            validate: false,
            ..MoveOptions::default()
        }
    }
}
