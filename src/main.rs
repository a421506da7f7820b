//! Standalone entry point: opens a window with the game.

use floem::prelude::*;
use floem::window::WindowConfig;

fn main() {
    env_logger::init();

    floem::Application::new()
        .window(
            move |_| {
                huematch::game_view().on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((900.0, 620.0))
                    .title("HueMatch"),
            ),
        )
        .run();
}
