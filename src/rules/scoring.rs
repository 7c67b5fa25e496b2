//! End-game scoring.
//!
//! A player's score is the sum of:
//! - points on every claimed point card
//! - `gold_value` per gold coin and `silver_value` per silver coin
//! - `cube_value` per held cube that is not turmeric
//!
//! The highest score wins. Ties go to the player seated later.

use serde::{Deserialize, Serialize};

use crate::core::config::ScoringConfig;
use crate::core::inventory::Spice;
use crate::core::player::{Player, PlayerId, PlayerMap};

/// Final result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScores {
    /// Score per player.
    pub scores: PlayerMap<i64>,

    /// Winning player.
    pub winner: PlayerId,
}

impl FinalScores {
    /// Score for a player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<i64> {
        self.scores.get(player).copied()
    }

    /// The winner's score.
    #[must_use]
    pub fn winning_score(&self) -> i64 {
        self.scores[self.winner]
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Score a single player.
///
/// Saturates at the `i64` bounds for extreme weights.
#[must_use]
pub fn score_player(player: &Player, scoring: &ScoringConfig) -> i64 {
    let card_points = player
        .point_cards_claimed()
        .iter()
        .fold(0i64, |total, card| total.saturating_add(i64::from(card.points)));

    let scoring_cubes: i64 = player
        .inventory()
        .iter()
        .filter(|&(spice, _)| spice != Spice::Turmeric)
        .map(|(_, count)| i64::from(count))
        .sum();

    [
        (scoring.gold_value, i64::from(player.gold_coins())),
        (scoring.silver_value, i64::from(player.silver_coins())),
        (scoring.cube_value, scoring_cubes),
    ]
    .into_iter()
    .fold(card_points, |total, (weight, count)| {
        total.saturating_add(weight.saturating_mul(count))
    })
}

/// Score every player and pick the winner.
///
/// Players are scored in turn order. Returns `None` only for an empty
/// player list.
#[must_use]
pub fn final_scores(players: &[Player], scoring: &ScoringConfig) -> Option<FinalScores> {
    if players.is_empty() {
        return None;
    }

    let mut scores = PlayerMap::with_value(players.len(), 0);
    let mut winner: Option<(PlayerId, u8, i64)> = None;

    for player in players {
        let score = score_player(player, scoring);
        scores[player.id()] = score;

        let takes_lead = match winner {
            None => true,
            Some((_, best_seat, best)) => {
                score > best || (score == best && player.turn_order() > best_seat)
            }
        };
        if takes_lead {
            winner = Some((player.id(), player.turn_order(), score));
        }
    }

    winner.map(|(winner, _, _)| FinalScores { scores, winner })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, PointCard};
    use crate::core::inventory::Inventory;
    use crate::core::player::PlayerKind;

    fn player(index: u8, inventory: Inventory) -> Player {
        Player::new(PlayerId::new(index), PlayerKind::Human, inventory)
    }

    #[test]
    fn test_score_components() {
        let mut p = player(0, Inventory::new(5, 1, 2, 1));
        p.push_claimed(PointCard::new(CardId::new(1), Inventory::empty(), 12));
        p.push_claimed(PointCard::new(CardId::new(2), Inventory::empty(), 8));
        p.add_gold_coin();
        p.add_silver_coin();
        p.add_silver_coin();

        // 20 card points + 3 gold + 2 silver + 4 non-turmeric cubes
        assert_eq!(score_player(&p, &ScoringConfig::default()), 29);
    }

    #[test]
    fn test_turmeric_does_not_score() {
        let p = player(0, Inventory::new(10, 0, 0, 0));
        assert_eq!(score_player(&p, &ScoringConfig::default()), 0);
    }

    #[test]
    fn test_custom_weights() {
        let mut p = player(0, Inventory::new(0, 1, 0, 0));
        p.add_gold_coin();

        let scoring = ScoringConfig {
            gold_value: 5,
            silver_value: 2,
            cube_value: 0,
        };
        assert_eq!(score_player(&p, &scoring), 5);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let mut p = player(0, Inventory::new(0, 2, 0, 0));
        p.add_gold_coin();
        p.add_gold_coin();

        let huge = ScoringConfig {
            gold_value: i64::MAX,
            silver_value: 0,
            cube_value: 1,
        };
        assert_eq!(score_player(&p, &huge), i64::MAX);

        let negative = ScoringConfig {
            gold_value: i64::MIN,
            silver_value: 0,
            cube_value: -1,
        };
        assert_eq!(score_player(&p, &negative), i64::MIN);
    }

    #[test]
    fn test_highest_score_wins() {
        let players = vec![
            player(0, Inventory::new(0, 3, 0, 0)),
            player(1, Inventory::new(0, 5, 0, 0)),
            player(2, Inventory::new(0, 1, 0, 0)),
        ];

        let result = final_scores(&players, &ScoringConfig::default()).unwrap();
        assert_eq!(result.winner, PlayerId::new(1));
        assert_eq!(result.winning_score(), 5);
        assert_eq!(result.score(PlayerId::new(0)), Some(3));
        assert_eq!(result.score(PlayerId::new(2)), Some(1));
    }

    #[test]
    fn test_tie_goes_to_later_seat() {
        let players = vec![
            player(0, Inventory::new(0, 4, 0, 0)),
            player(1, Inventory::new(0, 4, 0, 0)),
            player(2, Inventory::new(0, 2, 0, 0)),
        ];

        let result = final_scores(&players, &ScoringConfig::default()).unwrap();
        assert_eq!(result.winner, PlayerId::new(1));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!result.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_repeated_ties_end_with_last_tied_seat() {
        let players = vec![
            player(0, Inventory::new(0, 6, 0, 0)),
            player(1, Inventory::new(0, 6, 0, 0)),
            player(2, Inventory::new(0, 1, 0, 0)),
            player(3, Inventory::new(0, 6, 0, 0)),
        ];

        let result = final_scores(&players, &ScoringConfig::default()).unwrap();
        assert_eq!(result.winner, PlayerId::new(3));
    }

    #[test]
    fn test_single_player_wins_alone() {
        let players = vec![player(0, Inventory::empty())];
        let result = final_scores(&players, &ScoringConfig::default()).unwrap();
        assert_eq!(result.winner, PlayerId::new(0));
        assert_eq!(result.winning_score(), 0);
    }

    #[test]
    fn test_no_players_no_result() {
        assert_eq!(final_scores(&[], &ScoringConfig::default()), None);
    }
}
