//! Player identification, per-player storage, and the seated player.
//!
//! ## PlayerId
//!
//! Index into the turn order. 0-based internally; the seat number shown to
//! people (and used for tie-breaks) is `index + 1`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! A seated participant: cubes, claimed point cards, coins.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::inventory::Inventory;
use crate::cards::PointCard;

/// Player identifier: position in the turn order.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`, seat 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Create a player ID from a 1-based seat number.
    ///
    /// Returns `None` for seat 0.
    #[must_use]
    pub const fn from_seat(seat: u8) -> Option<Self> {
        match seat.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the 1-based seat number (turn-order identifier).
    #[must_use]
    pub const fn seat(self) -> u8 {
        self.0 + 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use century_core::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3].seat(), 4);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.seat())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use century_core::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i64> = PlayerMap::with_value(3, 0);
/// scores[PlayerId::new(1)] = 12;
///
/// assert_eq!(scores[PlayerId::new(1)], 12);
/// assert_eq!(scores.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the player exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the player exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Who is making decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from a person.
    Human,
    /// Moves come from an AI driver.
    Ai,
}

/// A seated player.
///
/// Fields are read-only outside the crate; `GameState` is the only mutator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    kind: PlayerKind,
    inventory: Inventory,
    claimed: Vector<PointCard>,
    gold_coins: u32,
    silver_coins: u32,
}

impl Player {
    pub(crate) fn new(id: PlayerId, kind: PlayerKind, inventory: Inventory) -> Self {
        Self {
            id,
            kind,
            inventory,
            claimed: Vector::new(),
            gold_coins: 0,
            silver_coins: 0,
        }
    }

    /// Position in the turn order.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// 1-based seat number (turn-order identifier).
    #[must_use]
    pub fn turn_order(&self) -> u8 {
        self.id.seat()
    }

    /// Human or AI.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Cubes currently held.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Point cards claimed so far, in claim order.
    #[must_use]
    pub fn point_cards_claimed(&self) -> &Vector<PointCard> {
        &self.claimed
    }

    /// Gold coins held.
    #[must_use]
    pub fn gold_coins(&self) -> u32 {
        self.gold_coins
    }

    /// Silver coins held.
    #[must_use]
    pub fn silver_coins(&self) -> u32 {
        self.silver_coins
    }

    pub(crate) fn add_gold_coin(&mut self) {
        self.gold_coins += 1;
    }

    pub(crate) fn add_silver_coin(&mut self) {
        self.silver_coins += 1;
    }

    pub(crate) fn push_claimed(&mut self, card: PointCard) {
        self.claimed.push_back(card);
    }

    pub(crate) fn set_inventory(&mut self, inventory: Inventory) {
        self.inventory = inventory;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.seat(), 2);
        assert_eq!(format!("{}", p0), "Seat 1");
    }

    #[test]
    fn test_player_id_from_seat() {
        assert_eq!(PlayerId::from_seat(1), Some(PlayerId::new(0)));
        assert_eq!(PlayerId::from_seat(5), Some(PlayerId::new(4)));
        assert_eq!(PlayerId::from_seat(0), None);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i64> = PlayerMap::new(4, |p| i64::from(p.seat()) * 10);

        assert_eq!(map[PlayerId::new(0)], 10);
        assert_eq!(map[PlayerId::new(3)], 40);
        assert_eq!(map.get(PlayerId::new(4)), None);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i64> = PlayerMap::new(3, |p| p.index() as i64);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
        assert_eq!(map.values().sum::<i64>(), 3);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i64> = PlayerMap::new(2, |p| p.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i64> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_new_player_is_empty_handed() {
        let player = Player::new(PlayerId::new(2), PlayerKind::Ai, Inventory::new(4, 0, 0, 0));

        assert_eq!(player.turn_order(), 3);
        assert_eq!(player.kind(), PlayerKind::Ai);
        assert_eq!(player.gold_coins(), 0);
        assert_eq!(player.silver_coins(), 0);
        assert!(player.point_cards_claimed().is_empty());
    }

    #[test]
    fn test_player_mutators() {
        let mut player =
            Player::new(PlayerId::new(0), PlayerKind::Human, Inventory::new(3, 0, 0, 0));
        let card = PointCard::new(CardId::new(1), Inventory::new(2, 0, 0, 0), 5);

        player.push_claimed(card);
        player.add_gold_coin();
        player.add_silver_coin();
        player.add_silver_coin();
        player.set_inventory(Inventory::new(1, 0, 0, 0));

        assert_eq!(player.point_cards_claimed().len(), 1);
        assert_eq!(player.gold_coins(), 1);
        assert_eq!(player.silver_coins(), 2);
        assert_eq!(player.inventory().total(), 1);
    }
}
