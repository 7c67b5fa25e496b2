//! Errors returned by game operations.
//!
//! Every error leaves the game untouched: operations validate fully before
//! mutating anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// Errors from constructing or driving a game.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// The game could not be set up with the given players or config.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong.
        reason: String,
    },

    /// The card is not in the row being claimed or restocked from.
    #[error("{0} is not in the row")]
    CardNotInRow(CardId),

    /// The player does not hold the cubes the card demands.
    #[error("{player} cannot afford {card}")]
    IneligibleClaim {
        /// Claiming player.
        player: PlayerId,
        /// Card being claimed.
        card: CardId,
    },

    /// The game is over; no further moves are accepted.
    #[error("game has already ended")]
    GameAlreadyEnded,

    /// No player with this id is seated.
    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    /// No card with this id is in the catalog.
    #[error("{0} is not in the catalog")]
    UnknownCard(CardId),

    /// A card with this id is already in the catalog.
    #[error("{0} is already in the catalog")]
    DuplicateCard(CardId),

    /// A restored game state breaks the rules of the state machine.
    #[error("invalid game state: {reason}")]
    InvalidState {
        /// What was wrong.
        reason: String,
    },
}

impl GameError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        GameError::InvalidState {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::invalid_config("6 players exceeds maximum of 5").to_string(),
            "invalid configuration: 6 players exceeds maximum of 5"
        );
        assert_eq!(
            GameError::CardNotInRow(CardId::new(3)).to_string(),
            "Card(3) is not in the row"
        );
        assert_eq!(
            GameError::IneligibleClaim {
                player: PlayerId::new(1),
                card: CardId::new(9),
            }
            .to_string(),
            "Seat 2 cannot afford Card(9)"
        );
        assert_eq!(GameError::GameAlreadyEnded.to_string(), "game has already ended");
    }
}
