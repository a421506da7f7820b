//! Root view: wires the game session to the wheel and panels.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};

use crate::color::Hsv;
use crate::constants;
use crate::game::{GameSession, RoundPhase};
use crate::panels::{leaderboard_panel, result_panel, roster_panel, target_panel};
use crate::store::FileStore;
use crate::wheel::color_wheel;

/// The session as the UI sees it: game logic over the on-disk store.
pub(crate) type Session = GameSession<FileStore>;

fn header(session: RwSignal<Session>) -> impl IntoView {
    h_stack((
        label(|| "HueMatch").style(|s| {
            s.font_size(20.0)
                .font_bold()
                .color(Color::rgb8(40, 40, 40))
        }),
        empty().style(|s| s.flex_grow(1.0)),
        label(move || {
            session.with(|s| match s.current_player() {
                Some(player) => format!("{player} · {} pts", s.current_score()),
                None => "join to play".to_string(),
            })
        })
        .style(|s| {
            s.font_size(constants::BODY_FONT)
                .color(Color::rgb8(40, 40, 40))
        }),
        label(move || {
            let streak = session.with(|s| s.streak());
            if streak > 1 {
                format!("streak x{streak}")
            } else {
                String::new()
            }
        })
        .style(|s| {
            s.font_size(constants::BODY_FONT)
                .font_bold()
                .color(Color::rgb8(190, 130, 30))
        }),
    ))
    .style(|s| s.items_center().gap(constants::GAP))
}

fn footer(session: RwSignal<Session>) -> impl IntoView {
    label(move || {
        session.with(|s| {
            let roster = s.roster();
            match roster.next_up() {
                Some(next) => format!(
                    "Turn {}/{} · next up: {next}",
                    roster.turn() + 1,
                    roster.len()
                ),
                None => String::new(),
            }
        })
    })
    .style(|s| {
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(120, 120, 120))
    })
}

/// Builds the whole game window around one session.
pub(crate) fn game_root(session: GameSession<FileStore>) -> impl IntoView {
    let session = RwSignal::new(session);
    let marker = RwSignal::new(None::<Hsv>);
    let wheel_enabled = RwSignal::new(false);

    // The wheel takes picks only while a guess is pending and someone is
    // playing.
    create_effect(move |_| {
        let accepting = session.with(|s| {
            s.current_player().is_some() && matches!(s.phase(), RoundPhase::AwaitingGuess)
        });
        wheel_enabled.set(accepting);
    });

    let wheel = color_wheel(marker, wheel_enabled, move |hsv| {
        marker.set(Some(hsv));
        session.update(|s| s.pick(hsv.to_rgb()));
    });

    v_stack((
        header(session),
        h_stack((
            v_stack((
                h_stack((
                    target_panel(session),
                    v_stack((
                        label(|| "Click to match").style(|s| {
                            s.font_size(constants::BODY_FONT)
                                .color(Color::rgb8(120, 120, 120))
                        }),
                        wheel,
                    ))
                    .style(|s| s.items_center().gap(6.0)),
                ))
                .style(|s| s.items_center().gap(constants::GAP * 2.0)),
                result_panel(session, marker),
            ))
            .style(|s| s.flex_grow(1.0).items_center().gap(constants::GAP)),
            v_stack((leaderboard_panel(session), roster_panel(session, marker)))
                .style(|s| s.width(constants::SIDEBAR_WIDTH).gap(constants::GAP * 1.5)),
        ))
        .style(|s| s.gap(constants::GAP * 2.0)),
        footer(session),
    ))
    .style(|s| {
        s.size_full()
            .gap(constants::GAP)
            .padding(constants::PADDING)
            .background(Color::rgb8(246, 246, 248))
    })
}
