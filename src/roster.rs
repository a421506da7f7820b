//! The turn roster: an ordered, deduplicated list of usernames plus the
//! index of whoever is up. Insertion order is turn order.

use crate::store::KvStore;

/// Usernames are trimmed and capped at this many characters on entry.
pub const MAX_NAME_LEN: usize = 20;

const STORE_KEY: &str = "players";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    players: Vec<String>,
    turn: usize,
}

impl Roster {
    /// Load from the store, starting the turn at the first player.
    ///
    /// Entries that are not strings, are blank, or repeat an earlier name
    /// are dropped individually rather than failing the whole record.
    pub fn load<S: KvStore>(store: &S) -> Self {
        let Some(raw) = store.read(STORE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(items)) => {
                let mut roster = Self::default();
                for item in items {
                    match item {
                        serde_json::Value::String(name) => {
                            roster.add(&name);
                        }
                        other => log::warn!("ignoring non-string roster entry: {other}"),
                    }
                }
                roster
            }
            Ok(other) => {
                log::warn!("discarding malformed roster record: expected an array, got {other}");
                Self::default()
            }
            Err(e) => {
                log::warn!("discarding malformed roster record: {e}");
                Self::default()
            }
        }
    }

    /// Persist, best-effort.
    pub fn save<S: KvStore>(&self, store: &S) {
        match serde_json::to_string(&self.players) {
            Ok(json) => {
                if let Err(e) = store.write(STORE_KEY, &json) {
                    log::warn!("roster not saved: {e}");
                }
            }
            Err(e) => log::warn!("roster not serialized: {e}"),
        }
    }

    /// Add a username, trimmed and capped at [`MAX_NAME_LEN`] characters.
    ///
    /// Blank names are rejected. Returns the player's position — the
    /// existing one when the name is already on the roster.
    pub fn add(&mut self, username: &str) -> Option<usize> {
        let name: String = username.trim().chars().take(MAX_NAME_LEN).collect();
        if name.is_empty() {
            return None;
        }
        if let Some(position) = self.players.iter().position(|p| *p == name) {
            return Some(position);
        }
        self.players.push(name);
        Some(self.players.len() - 1)
    }

    /// Remove a username, keeping the turn index valid: it wraps modulo the
    /// new length, and an emptied roster has no current player.
    pub fn remove(&mut self, username: &str) {
        self.players.retain(|p| p != username);
        self.turn = if self.players.is_empty() {
            0
        } else {
            self.turn % self.players.len()
        };
    }

    /// Rotate to the next player. With one player or none, stays put.
    pub fn advance(&mut self) {
        if self.players.len() > 1 {
            self.turn = (self.turn + 1) % self.players.len();
        }
    }

    /// Whoever is up, if anyone is.
    pub fn current(&self) -> Option<&str> {
        self.players.get(self.turn).map(String::as_str)
    }

    /// Who plays after the current player.
    pub fn next_up(&self) -> Option<&str> {
        if self.players.len() < 2 {
            return None;
        }
        self.players
            .get((self.turn + 1) % self.players.len())
            .map(String::as_str)
    }

    pub fn position_of(&self, username: &str) -> Option<usize> {
        self.players.iter().position(|p| p == username)
    }

    /// Jump the turn to an index; out-of-range values are ignored.
    pub fn set_turn(&mut self, index: usize) {
        if index < self.players.len() {
            self.turn = index;
        }
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::MemStore;

    #[test]
    fn add_trims_and_rejects_blanks() {
        let mut roster = Roster::default();
        assert_eq!(roster.add("  alice  "), Some(0));
        assert_eq!(roster.players(), ["alice"]);
        assert_eq!(roster.add(""), None);
        assert_eq!(roster.add("   "), None);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn add_is_idempotent() {
        let mut roster = Roster::default();
        roster.add("alice");
        roster.add("bob");
        assert_eq!(roster.add("alice"), Some(0));
        assert_eq!(roster.players(), ["alice", "bob"]);
    }

    #[test]
    fn add_caps_name_length() {
        let mut roster = Roster::default();
        roster.add("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(roster.players(), ["abcdefghijklmnopqrst"]);
    }

    #[test]
    fn rotation_wraps_and_single_player_stays_put() {
        let mut roster = Roster::default();
        roster.add("alice");
        roster.advance();
        assert_eq!(roster.current(), Some("alice"));

        roster.add("bob");
        roster.add("carol");
        roster.advance();
        assert_eq!(roster.current(), Some("bob"));
        roster.advance();
        assert_eq!(roster.current(), Some("carol"));
        roster.advance();
        assert_eq!(roster.current(), Some("alice"));
    }

    #[test]
    fn removal_keeps_the_turn_index_valid() {
        let mut roster = Roster::default();
        roster.add("alice");
        roster.add("bob");
        roster.add("carol");
        roster.set_turn(2);

        roster.remove("carol");
        assert_eq!(roster.current(), Some("alice"));

        roster.remove("alice");
        assert_eq!(roster.current(), Some("bob"));

        roster.remove("bob");
        assert_eq!(roster.current(), None);
        assert!(roster.is_empty());
    }

    #[test]
    fn next_up_previews_the_rotation() {
        let mut roster = Roster::default();
        roster.add("alice");
        assert_eq!(roster.next_up(), None);

        roster.add("bob");
        assert_eq!(roster.next_up(), Some("bob"));
        roster.advance();
        assert_eq!(roster.next_up(), Some("alice"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = MemStore::new();
        let mut roster = Roster::default();
        roster.add("alice");
        roster.add("bob");
        roster.save(&store);

        let restored = Roster::load(&store);
        assert_eq!(restored.players(), ["alice", "bob"]);
        assert_eq!(restored.current(), Some("alice"));
    }

    #[test]
    fn load_filters_malformed_entries() {
        let store = MemStore::with_record("players", r#"["alice", 7, "", "alice", "bob"]"#);
        let roster = Roster::load(&store);
        assert_eq!(roster.players(), ["alice", "bob"]);
    }

    #[test]
    fn load_rejects_non_array_wholesale() {
        let store = MemStore::with_record("players", r#"{"players": ["alice"]}"#);
        assert!(Roster::load(&store).is_empty());

        let store = MemStore::with_record("players", "not json");
        assert!(Roster::load(&store).is_empty());
    }
}
