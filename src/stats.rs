//! Player records and the persistent top-10 leaderboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::KvStore;

/// The board never holds more than this many records.
pub const MAX_ENTRIES: usize = 10;

const STORE_KEY: &str = "leaderboard";

/// Lifetime stats for one player, keyed by exact username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub username: String,
    pub total_score: u32,
    pub games_played: u32,
    pub best_accuracy: f64,
    pub joined_at: DateTime<Utc>,
}

/// Top-10 leaderboard, kept sorted descending by total score.
///
/// Ties order by earliest `joined_at`, then by username, so the board has a
/// deterministic total order.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<PlayerRecord>,
}

impl Leaderboard {
    /// Load from the store; malformed or missing data becomes an empty
    /// board.
    pub fn load<S: KvStore>(store: &S) -> Self {
        let Some(raw) = store.read(STORE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<PlayerRecord>>(&raw) {
            Ok(entries) => {
                let mut board = Self { entries };
                board.sort_and_cap();
                board
            }
            Err(e) => {
                log::warn!("discarding malformed leaderboard record: {e}");
                Self::default()
            }
        }
    }

    /// Persist, best-effort: a failed write is logged and the session keeps
    /// its in-memory state.
    pub fn save<S: KvStore>(&self, store: &S) {
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = store.write(STORE_KEY, &json) {
                    log::warn!("leaderboard not saved: {e}");
                }
            }
            Err(e) => log::warn!("leaderboard not serialized: {e}"),
        }
    }

    /// Fold one finished round into a player's record.
    ///
    /// Creates the record on first sight of the username; otherwise adds the
    /// points, bumps the games counter, and keeps the best accuracy. The
    /// board is re-sorted and capped at [`MAX_ENTRIES`] afterwards.
    pub fn record_round(&mut self, username: &str, points: u32, accuracy: f64) {
        match self.entries.iter_mut().find(|p| p.username == username) {
            Some(player) => {
                player.total_score += points;
                player.games_played += 1;
                player.best_accuracy = player.best_accuracy.max(accuracy);
            }
            None => self.entries.push(PlayerRecord {
                username: username.to_string(),
                total_score: points,
                games_played: 1,
                best_accuracy: accuracy,
                joined_at: Utc::now(),
            }),
        }
        self.sort_and_cap();
    }

    /// Exact-match lookup.
    pub fn player(&self, username: &str) -> Option<&PlayerRecord> {
        self.entries.iter().find(|p| p.username == username)
    }

    pub fn entries(&self) -> &[PlayerRecord] {
        &self.entries
    }

    /// Drop every record, in memory and from the store.
    pub fn clear<S: KvStore>(&mut self, store: &S) {
        self.entries.clear();
        if let Err(e) = store.remove(STORE_KEY) {
            log::warn!("leaderboard not cleared from store: {e}");
        }
    }

    fn sort_and_cap(&mut self) {
        self.entries.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.joined_at.cmp(&b.joined_at))
                .then_with(|| a.username.cmp(&b.username))
        });
        self.entries.truncate(MAX_ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::MemStore;

    #[test]
    fn first_round_creates_the_record() {
        let mut board = Leaderboard::default();
        board.record_round("alice", 50, 80.0);

        let alice = board.player("alice").unwrap();
        assert_eq!(alice.total_score, 50);
        assert_eq!(alice.games_played, 1);
        assert_eq!(alice.best_accuracy, 80.0);
    }

    #[test]
    fn later_rounds_accumulate_in_place() {
        let mut board = Leaderboard::default();
        board.record_round("alice", 50, 80.0);
        board.record_round("alice", 30, 90.0);

        assert_eq!(board.entries().len(), 1);
        let alice = board.player("alice").unwrap();
        assert_eq!(alice.total_score, 80);
        assert_eq!(alice.games_played, 2);
        assert_eq!(alice.best_accuracy, 90.0);
    }

    #[test]
    fn best_accuracy_never_regresses() {
        let mut board = Leaderboard::default();
        board.record_round("alice", 10, 95.0);
        board.record_round("alice", 10, 40.0);
        assert_eq!(board.player("alice").unwrap().best_accuracy, 95.0);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut board = Leaderboard::default();
        board.record_round("Alice", 10, 50.0);
        assert!(board.player("alice").is_none());
    }

    #[test]
    fn board_is_sorted_descending_and_capped() {
        let mut board = Leaderboard::default();
        for i in 0..15u32 {
            board.record_round(&format!("player{i}"), i * 10, 50.0);
        }

        assert_eq!(board.entries().len(), MAX_ENTRIES);
        let scores: Vec<u32> = board.entries().iter().map(|p| p.total_score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
        // The five lowest scorers fell off.
        assert_eq!(scores[MAX_ENTRIES - 1], 50);
    }

    #[test]
    fn ties_order_by_earliest_join() {
        let mut board = Leaderboard::default();
        board.record_round("first", 100, 50.0);
        board.record_round("second", 100, 50.0);

        let names: Vec<&str> = board
            .entries()
            .iter()
            .map(|p| p.username.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = MemStore::new();
        let mut board = Leaderboard::default();
        board.record_round("alice", 80, 91.5);
        board.record_round("bob", 40, 60.0);
        board.save(&store);

        let restored = Leaderboard::load(&store);
        assert_eq!(restored.entries().len(), 2);
        assert_eq!(restored.player("alice").unwrap().total_score, 80);
        assert_eq!(restored.player("bob").unwrap().best_accuracy, 60.0);
    }

    #[test]
    fn malformed_record_loads_as_empty() {
        let store = MemStore::with_record("leaderboard", "{not json");
        assert!(Leaderboard::load(&store).entries().is_empty());

        let store = MemStore::with_record("leaderboard", r#"{"username": "not-an-array"}"#);
        assert!(Leaderboard::load(&store).entries().is_empty());
    }

    #[test]
    fn clear_wipes_memory_and_store() {
        let store = MemStore::new();
        let mut board = Leaderboard::default();
        board.record_round("alice", 10, 50.0);
        board.save(&store);

        board.clear(&store);
        assert!(board.entries().is_empty());
        assert!(Leaderboard::load(&store).entries().is_empty());
    }
}
