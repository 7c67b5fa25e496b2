//! Game state: the single mutator of a match.
//!
//! ## Phases
//!
//! - `InProgress`: normal play
//! - `FinalRound`: someone reached the claim threshold; the current round
//!   is the last one
//! - `Ended`: the final round finished and scores are fixed
//!
//! Phases only move forward.
//!
//! ## Moves
//!
//! Every operation validates fully before touching anything, so a rejected
//! move leaves the state exactly as it was. Hosts running many matches need
//! one lock (or actor) per `GameState` and nothing finer.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::action::{ClaimRecord, CoinReward};
use super::config::GameConfig;
use super::error::GameError;
use super::inventory::InventoryChange;
use super::player::{Player, PlayerId, PlayerKind};
use crate::cards::{CardId, MerchantCard, PointCard};
use crate::rows::CardRow;
use crate::rules::scoring::{final_scores, FinalScores};

/// Where the match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play.
    InProgress,
    /// The end-game latch is set; this round is the last.
    FinalRound,
    /// Scores are final.
    Ended,
}

/// Complete state of one match.
///
/// Cloning is cheap enough for AI lookahead: claimed cards and the claim
/// history are persistent `im` vectors.
///
/// Deserialization checks the restored state for consistency and fails with
/// `GameError::InvalidState` instead of admitting a broken game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredGameState")]
pub struct GameState {
    config: GameConfig,

    human_count: usize,
    ai_count: usize,

    gold_coins_left: u32,
    silver_coins_left: u32,

    /// Index into `players`. Equals `players.len()` once ended.
    current_turn: usize,

    /// Round number (starts at 1).
    round: u32,

    phase: GamePhase,

    point_row: CardRow<PointCard>,
    merchant_row: CardRow<MerchantCard>,

    players: Vec<Player>,

    final_scores: Option<FinalScores>,

    history: Vector<ClaimRecord>,
}

/// Serialized form of `GameState`, checked before it becomes one.
#[derive(Deserialize)]
struct StoredGameState {
    config: GameConfig,
    human_count: usize,
    ai_count: usize,
    gold_coins_left: u32,
    silver_coins_left: u32,
    current_turn: usize,
    round: u32,
    phase: GamePhase,
    point_row: CardRow<PointCard>,
    merchant_row: CardRow<MerchantCard>,
    players: Vec<Player>,
    final_scores: Option<FinalScores>,
    history: Vector<ClaimRecord>,
}

impl TryFrom<StoredGameState> for GameState {
    type Error = GameError;

    fn try_from(stored: StoredGameState) -> Result<Self, GameError> {
        stored.config.validate()?;

        let total = stored.players.len();
        if stored.human_count.checked_add(stored.ai_count) != Some(total) {
            return Err(GameError::invalid_state(format!(
                "{} human and {} AI players but {} seated",
                stored.human_count, stored.ai_count, total
            )));
        }
        stored.config.validate_player_count(total)?;

        if let Some((index, _)) = stored
            .players
            .iter()
            .enumerate()
            .find(|(index, player)| player.id().index() != *index)
        {
            return Err(GameError::invalid_state(format!(
                "player at index {index} is out of seat order"
            )));
        }

        let turn_in_range = match stored.phase {
            GamePhase::Ended => stored.current_turn == total,
            GamePhase::InProgress | GamePhase::FinalRound => stored.current_turn < total,
        };
        if !turn_in_range {
            return Err(GameError::invalid_state(format!(
                "turn {} out of range for {} players in phase {:?}",
                stored.current_turn, total, stored.phase
            )));
        }
        if stored.round == 0 {
            return Err(GameError::invalid_state("round numbers start at 1"));
        }

        match (&stored.final_scores, stored.phase) {
            (Some(scores), GamePhase::Ended)
                if scores.scores.player_count() == total
                    && scores.score(scores.winner).is_some() => {}
            (None, GamePhase::InProgress | GamePhase::FinalRound) => {}
            _ => {
                return Err(GameError::invalid_state(
                    "final scores must be present exactly when the game has ended",
                ))
            }
        }

        Ok(Self {
            config: stored.config,
            human_count: stored.human_count,
            ai_count: stored.ai_count,
            gold_coins_left: stored.gold_coins_left,
            silver_coins_left: stored.silver_coins_left,
            current_turn: stored.current_turn,
            round: stored.round,
            phase: stored.phase,
            point_row: stored.point_row,
            merchant_row: stored.merchant_row,
            players: stored.players,
            final_scores: stored.final_scores,
            history: stored.history,
        })
    }
}

impl GameState {
    /// Create a game under the standard rules.
    ///
    /// Seats `1..=human_count` are human, the rest AI.
    ///
    /// ```
    /// use century_core::core::GameState;
    ///
    /// let state = GameState::new(Vec::new(), Vec::new(), 1, 2).unwrap();
    /// assert_eq!(state.total_count(), 3);
    /// assert_eq!(state.gold_coins_left(), 6);
    ///
    /// assert!(GameState::new(Vec::new(), Vec::new(), 3, 3).is_err());
    /// ```
    pub fn new(
        point_row: impl IntoIterator<Item = PointCard>,
        merchant_row: impl IntoIterator<Item = MerchantCard>,
        human_count: usize,
        ai_count: usize,
    ) -> Result<Self, GameError> {
        Self::with_config(GameConfig::default(), point_row, merchant_row, human_count, ai_count)
    }

    /// Create a game with an explicit configuration.
    pub fn with_config(
        config: GameConfig,
        point_row: impl IntoIterator<Item = PointCard>,
        merchant_row: impl IntoIterator<Item = MerchantCard>,
        human_count: usize,
        ai_count: usize,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let total = human_count
            .checked_add(ai_count)
            .ok_or_else(|| GameError::invalid_config("player count overflow"))?;
        config.validate_player_count(total)?;

        let players = (0..total)
            .map(|index| {
                let kind = if index < human_count {
                    PlayerKind::Human
                } else {
                    PlayerKind::Ai
                };
                let inventory = config.starting_inventory(index).ok_or_else(|| {
                    GameError::invalid_config(format!(
                        "no starting inventory for seat {}",
                        index + 1
                    ))
                })?;
                Ok(Player::new(PlayerId::new(index as u8), kind, inventory))
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        let coins = u32::try_from(total)
            .ok()
            .and_then(|total| config.coins_per_player.checked_mul(total))
            .ok_or_else(|| GameError::invalid_config("coin supply overflow"))?;

        info!(human_count, ai_count, coins, "game created");

        Ok(Self {
            config,
            human_count,
            ai_count,
            gold_coins_left: coins,
            silver_coins_left: coins,
            current_turn: 0,
            round: 1,
            phase: GamePhase::InProgress,
            point_row: point_row.into_iter().collect(),
            merchant_row: merchant_row.into_iter().collect(),
            players,
            final_scores: None,
            history: Vector::new(),
        })
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.phase == GamePhase::Ended {
            warn!("move rejected: game has already ended");
            return Err(GameError::GameAlreadyEnded);
        }
        Ok(())
    }

    // === Moves ===

    /// Give a point card to a player.
    ///
    /// Appends the card to the player's claims, pays the coin for the slot
    /// the card sits in, and spends the card's goal from the player's cubes.
    /// Claiming the threshold card sets the end-game latch.
    ///
    /// The card stays in the point row; call `restock_point_row` afterwards.
    pub fn claim_point_card(
        &mut self,
        player: PlayerId,
        card: CardId,
    ) -> Result<CoinReward, GameError> {
        self.ensure_running()?;

        let claimant = self.players.get(player.index()).ok_or_else(|| {
            warn!(%player, %card, "claim rejected: unknown player");
            GameError::UnknownPlayer(player)
        })?;

        let (slot, point_card) = self
            .point_row
            .position(card)
            .and_then(|slot| self.point_row.get(slot).map(|c| (slot, *c)))
            .ok_or_else(|| {
                warn!(%player, %card, "claim rejected: card not in row");
                GameError::CardNotInRow(card)
            })?;

        let remaining = claimant
            .inventory()
            .after(&InventoryChange::spend(&point_card.goal))
            .ok_or_else(|| {
                warn!(%player, %card, goal = %point_card.goal, "claim rejected: cannot afford");
                GameError::IneligibleClaim { player, card }
            })?;

        // Validated: commit.
        let reward = CoinReward::for_slot(slot, self.gold_coins_left, self.silver_coins_left);
        let threshold = self.config.thresholds.for_players(self.players.len());
        let claimant = &mut self.players[player.index()];

        claimant.push_claimed(point_card);
        match reward {
            CoinReward::Gold => {
                claimant.add_gold_coin();
                self.gold_coins_left -= 1;
            }
            CoinReward::Silver => {
                claimant.add_silver_coin();
                self.silver_coins_left -= 1;
            }
            CoinReward::Nothing => {}
        }
        claimant.set_inventory(remaining);

        let claimed_count = claimant.point_cards_claimed().len();
        self.history
            .push_back(ClaimRecord::new(player, card, slot, reward, self.round));

        debug!(%player, %card, slot, ?reward, claimed_count, "point card claimed");

        if claimed_count == threshold && self.phase == GamePhase::InProgress {
            self.phase = GamePhase::FinalRound;
            info!(%player, claimed_count, round = self.round, "final round triggered");
        }

        Ok(reward)
    }

    /// Take a claimed card out of the point row and put a replacement at
    /// the back.
    ///
    /// Cards behind the removed one slide toward the front, so the coin
    /// slots keep paying on whichever cards reach them.
    pub fn restock_point_row(
        &mut self,
        claimed: CardId,
        replacement: Option<PointCard>,
    ) -> Result<(), GameError> {
        self.ensure_running()?;

        let (slot, _) = self.point_row.remove(claimed).ok_or_else(|| {
            warn!(card = %claimed, "restock rejected: card not in row");
            GameError::CardNotInRow(claimed)
        })?;
        if let Some(card) = replacement {
            self.point_row.push(card);
        }

        debug!(
            card = %claimed,
            slot,
            replacement = ?replacement.map(|c| c.id),
            "point row restocked"
        );
        Ok(())
    }

    /// Pass the turn to the next player.
    ///
    /// When the round completes with the end-game latch set, the game ends
    /// and the final scores are returned.
    pub fn advance_turn(&mut self) -> Result<Option<&FinalScores>, GameError> {
        self.ensure_running()?;

        let next = self.current_turn + 1;
        if next < self.players.len() {
            self.current_turn = next;
            debug!(turn = next, round = self.round, "turn advanced");
            return Ok(None);
        }

        if self.phase == GamePhase::InProgress {
            self.current_turn = 0;
            self.round += 1;
            debug!(round = self.round, "new round");
            return Ok(None);
        }

        let scores = final_scores(&self.players, &self.config.scoring);
        self.current_turn = next;
        self.phase = GamePhase::Ended;
        self.final_scores = scores;
        if let Some(result) = &self.final_scores {
            info!(
                winner = %result.winner,
                score = result.winning_score(),
                rounds = self.round,
                "game ended"
            );
        }
        Ok(self.final_scores.as_ref())
    }

    // === Queries ===

    /// Configuration in force.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Gold coins still in the bank.
    #[must_use]
    pub fn gold_coins_left(&self) -> u32 {
        self.gold_coins_left
    }

    /// Silver coins still in the bank.
    #[must_use]
    pub fn silver_coins_left(&self) -> u32 {
        self.silver_coins_left
    }

    /// Human players.
    #[must_use]
    pub fn human_count(&self) -> usize {
        self.human_count
    }

    /// AI players.
    #[must_use]
    pub fn ai_count(&self) -> usize {
        self.ai_count
    }

    /// All players.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.players.len()
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Round number (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player whose turn it is, or `None` once the game has ended.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn)
    }

    /// Point cards face up, front slot first.
    #[must_use]
    pub fn point_row(&self) -> &CardRow<PointCard> {
        &self.point_row
    }

    /// Merchant cards face up, front slot first.
    #[must_use]
    pub fn merchant_row(&self) -> &CardRow<MerchantCard> {
        &self.merchant_row
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Is the current round the last?
    #[must_use]
    pub fn game_will_end_this_round(&self) -> bool {
        self.phase != GamePhase::InProgress
    }

    /// Has the final round finished?
    #[must_use]
    pub fn has_game_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Final scores and winner, once the game has ended.
    #[must_use]
    pub fn final_scores(&self) -> Option<&FinalScores> {
        self.final_scores.as_ref()
    }

    /// Score of a player, once the game has ended.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<i64> {
        self.final_scores.as_ref()?.score(player)
    }

    /// Winning player, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let winner = self.final_scores.as_ref()?.winner;
        self.player(winner)
    }

    /// Every settled claim, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ClaimRecord> {
        &self.history
    }
}
