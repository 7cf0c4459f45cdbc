use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Configuration for the draw rules of a [`Game`][`crate::game::Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// The halfmove clock value at which a draw may be claimed.
    ///
    /// Reaching it is reported, but never ends the game on its own.
    #[cfg_attr(test, strategy(1..=200u32))]
    pub fifty_move_threshold: u32,

    /// How many times a position must occur for the game to be drawn.
    #[cfg_attr(test, strategy(2..=5usize))]
    pub repetition_threshold: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            fifty_move_threshold: 50,
            repetition_threshold: 3,
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Rules`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game rules")]
pub struct ParseRulesError(ron::de::SpannedError);

impl FromStr for Rules {
    type Err = ParseRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_rules_is_an_identity(r: Rules) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[test]
    fn missing_fields_take_default_values() {
        assert_eq!("()".parse(), Ok(Rules::default()));

        assert_eq!(
            "(repetition_threshold: 5)".parse(),
            Ok(Rules {
                repetition_threshold: 5,
                ..Rules::default()
            })
        );
    }

    #[test]
    fn parsing_rules_fails_for_unknown_fields() {
        assert!("(threefold: 3)".parse::<Rules>().is_err());
    }
}
