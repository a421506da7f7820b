//! # huematch
//!
//! A color-matching game for [Floem](https://github.com/lapce/floem).
//!
//! A target color is drawn from a fixed-brightness HSV wheel; the active
//! player clicks the wheel to match it. Accuracy drives points and streak
//! bonuses on a persistent local top-10 leaderboard, and an ordered roster
//! of local players rotates turns.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // `huematch::game_view()` is the whole game as a Floem view tree.
//! let _view = || huematch::game_view();
//! ```

mod app;
mod color;
mod constants;
mod game;
mod math;
mod panels;
mod roster;
mod scoring;
mod stats;
mod store;
mod wheel;

pub use color::{random_wheel_color, Hsv, Rgb};
pub use game::{GameSession, RoundPhase, RoundResult};
pub use roster::Roster;
pub use scoring::{score_guess, AccuracyBadge, RankTier, RoundScore};
pub use stats::{Leaderboard, PlayerRecord};
pub use store::{FileStore, KvStore, StoreError};

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level game view over the default on-disk store.
///
/// Falls back to a store under the system temp directory when no data
/// directory exists; the game then simply plays without durable state.
pub fn game_view() -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });

    let store = FileStore::open_default().unwrap_or_else(|e| {
        log::warn!("falling back to temp-dir storage: {e}");
        FileStore::at(std::env::temp_dir().join("huematch"))
    });
    app::game_root(GameSession::new(store))
}
