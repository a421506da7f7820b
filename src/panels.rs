//! Game panels: target display, round result, leaderboard, and the
//! join/roster form.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith};
use floem::views::{dyn_container, dyn_stack};

use crate::app::Session;
use crate::color::{Hsv, Rgb};
use crate::constants;
use crate::game::RoundPhase;
use crate::scoring::{AccuracyBadge, RankTier};
use crate::stats::PlayerRecord;

fn fill_color(c: Rgb) -> Color {
    Color::rgb8(c.r, c.g, c.b)
}

fn badge_color(badge: AccuracyBadge) -> Color {
    match badge {
        AccuracyBadge::Perfect => Color::rgb8(34, 160, 76),
        AccuracyBadge::Excellent => Color::rgb8(70, 150, 60),
        AccuracyBadge::Great => Color::rgb8(120, 140, 40),
        AccuracyBadge::Good => Color::rgb8(190, 130, 30),
        AccuracyBadge::KeepTrying => Color::rgb8(180, 70, 60),
    }
}

fn tier_color(tier: RankTier) -> Color {
    match tier {
        RankTier::Gold => Color::rgb8(212, 175, 55),
        RankTier::Silver => Color::rgb8(145, 150, 160),
        RankTier::Bronze => Color::rgb8(176, 123, 80),
        RankTier::Default => Color::rgb8(120, 120, 120),
    }
}

/// A flat square of color.
fn swatch(color: impl Fn() -> Rgb + 'static, side: f32) -> impl IntoView {
    empty().style(move |st| {
        st.width(side)
            .height(side)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .background(fill_color(color()))
    })
}

/// A small text button with press feedback.
fn text_button(lbl: &'static str, on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(label(move || lbl).style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(240, 240, 240)
        } else {
            Color::WHITE
        };
        s.font_size(constants::BODY_FONT).color(c)
    }))
    .style(|s| {
        s.padding_horiz(12.0)
            .padding_vert(6.0)
            .border_radius(constants::RADIUS)
            .background(Color::rgb8(59, 130, 246))
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(37, 99, 235)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// A small icon button that copies the result of `get_text` to the
/// clipboard.
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

fn heading(lbl: &'static str) -> impl IntoView {
    label(move || lbl).style(|s| {
        s.font_size(constants::HEADING_FONT)
            .font_bold()
            .color(Color::rgb8(40, 40, 40))
    })
}

/// Target color card: swatch plus hex and RGB readouts.
pub(crate) fn target_panel(session: RwSignal<Session>) -> impl IntoView {
    v_stack((
        heading("Target Color"),
        swatch(
            move || session.with(|s| s.target()),
            constants::SWATCH_SIZE,
        ),
        h_stack((
            label(move || session.with(|s| s.target().to_hex())).style(|s| {
                s.font_size(constants::BODY_FONT)
                    .font_family("monospace".to_string())
                    .font_bold()
                    .color(Color::rgb8(40, 40, 40))
            }),
            copy_button(move || session.with(|s| s.target().to_hex())),
        ))
        .style(|s| s.items_center().gap(4.0)),
        label(move || {
            session.with(|s| {
                let t = s.target();
                format!("RGB({}, {}, {})", t.r, t.g, t.b)
            })
        })
        .style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(6.0))
}

/// Result card, visible only while a round result is showing.
pub(crate) fn result_panel(
    session: RwSignal<Session>,
    marker: RwSignal<Option<Hsv>>,
) -> impl IntoView {
    dyn_container(
        move || session.with(|s| s.phase()),
        move |phase| match phase {
            RoundPhase::AwaitingGuess => empty().into_any(),
            RoundPhase::ShowingResult(result) => {
                let badge = AccuracyBadge::for_accuracy(result.accuracy);
                let target = session.with_untracked(|s| s.target());
                v_stack((
                    label(move || badge.label()).style(move |s| {
                        s.font_size(constants::HEADING_FONT)
                            .font_bold()
                            .color(badge_color(badge))
                    }),
                    h_stack((
                        v_stack((
                            swatch(move || target, 56.0),
                            label(|| "target").style(|s| {
                                s.font_size(constants::LABEL_FONT)
                                    .color(Color::rgb8(120, 120, 120))
                            }),
                        ))
                        .style(|s| s.items_center().gap(2.0)),
                        v_stack((
                            swatch(move || result.selected, 56.0),
                            label(|| "your pick").style(|s| {
                                s.font_size(constants::LABEL_FONT)
                                    .color(Color::rgb8(120, 120, 120))
                            }),
                        ))
                        .style(|s| s.items_center().gap(2.0)),
                    ))
                    .style(|s| s.gap(constants::GAP)),
                    label(move || format!("{:.1}% accuracy", result.accuracy)).style(|s| {
                        s.font_size(constants::BODY_FONT)
                            .color(Color::rgb8(40, 40, 40))
                    }),
                    label(move || {
                        if result.streak > 1 {
                            format!("+{} points (streak x{})", result.points, result.streak)
                        } else {
                            format!("+{} points", result.points)
                        }
                    })
                    .style(|s| {
                        s.font_size(constants::BODY_FONT)
                            .font_bold()
                            .color(Color::rgb8(40, 40, 40))
                    }),
                    text_button("Next Round", move || {
                        marker.set(None);
                        session.update(|s| s.next_round());
                    }),
                ))
                .style(|s| {
                    s.items_center()
                        .gap(8.0)
                        .padding(constants::PADDING)
                        .border_radius(constants::RADIUS)
                        .background(Color::rgb8(250, 250, 250))
                        .border(1.0)
                        .border_color(Color::rgb8(220, 220, 220))
                })
                .into_any()
            }
        },
    )
}

fn leaderboard_row(
    session: RwSignal<Session>,
    position: usize,
    record: PlayerRecord,
) -> impl IntoView {
    let row_name = record.username.clone();
    let display_name = record.username.clone();
    let games_played = record.games_played;
    let best_accuracy = record.best_accuracy;
    let total_score = record.total_score;
    h_stack((
        label(move || format!("{position}")).style(move |s| {
            s.width(20.0)
                .font_size(constants::BODY_FONT)
                .font_bold()
                .color(tier_color(RankTier::for_position(position)))
        }),
        v_stack((
            label(move || display_name.clone()).style(|s| {
                s.font_size(constants::BODY_FONT)
                    .font_bold()
                    .color(Color::rgb8(40, 40, 40))
            }),
            label(move || format!("{games_played} rounds · best {best_accuracy:.0}%")).style(
                |s| {
                    s.font_size(constants::LABEL_FONT)
                        .color(Color::rgb8(120, 120, 120))
                },
            ),
        ))
        .style(|s| s.flex_grow(1.0)),
        label(move || format!("{total_score}")).style(|s| {
            s.font_size(constants::BODY_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(40, 40, 40))
        }),
    ))
    .style(move |s| {
        let highlighted = session.with(|s| s.current_player() == Some(row_name.as_str()));
        let bg = if highlighted {
            Color::rgb8(235, 242, 254)
        } else {
            Color::TRANSPARENT
        };
        s.items_center()
            .gap(6.0)
            .padding_horiz(6.0)
            .padding_vert(4.0)
            .border_radius(4.0)
            .background(bg)
    })
}

/// Top-10 leaderboard.
pub(crate) fn leaderboard_panel(session: RwSignal<Session>) -> impl IntoView {
    v_stack((
        heading("Leaderboard"),
        dyn_container(
            move || session.with(|s| s.leaderboard().entries().is_empty()),
            move |is_empty| {
                if is_empty {
                    label(|| "No scores yet — be the first!")
                        .style(|s| {
                            s.font_size(constants::BODY_FONT)
                                .color(Color::rgb8(120, 120, 120))
                        })
                        .into_any()
                } else {
                    empty().into_any()
                }
            },
        ),
        dyn_stack(
            move || {
                session.with(|s| {
                    s.leaderboard()
                        .entries()
                        .iter()
                        .cloned()
                        .enumerate()
                        .collect::<Vec<_>>()
                })
            },
            |(position, record)| (*position, record.username.clone()),
            move |(position, record)| leaderboard_row(session, position + 1, record),
        )
        .style(|s| s.flex_col().gap(2.0)),
    ))
    .style(|s| s.gap(8.0))
}

fn roster_row(
    session: RwSignal<Session>,
    marker: RwSignal<Option<Hsv>>,
    username: String,
) -> impl IntoView {
    let switch_name = username.clone();
    let remove_name = username.clone();
    let label_name = username.clone();
    let style_name = username;
    let remove_pressed = RwSignal::new(false);
    h_stack((
        label(move || label_name.clone())
            .style(move |s| {
                let is_current =
                    session.with(|s| s.current_player() == Some(style_name.as_str()));
                let weight = if is_current {
                    s.font_bold()
                } else {
                    s
                };
                weight
                    .font_size(constants::BODY_FONT)
                    .color(Color::rgb8(40, 40, 40))
                    .flex_grow(1.0)
                    .cursor(floem::style::CursorStyle::Pointer)
            })
            .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
                marker.set(None);
                let name = switch_name.clone();
                session.update(|s| s.switch_to(&name));
            }),
        container(
            label(|| lucide_icons::Icon::X.unicode().to_string()).style(move |s| {
                let c = if remove_pressed.get() {
                    Color::rgb8(160, 50, 40)
                } else {
                    Color::rgb8(120, 120, 120)
                };
                s.font_size(12.0).font_family("lucide".to_string()).color(c)
            }),
        )
        .style(|s| {
            s.size(18.0, 18.0)
                .items_center()
                .justify_center()
                .border_radius(3.0)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
            remove_pressed.set(true);
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            remove_pressed.set(false);
            marker.set(None);
            let name = remove_name.clone();
            session.update(|s| s.remove(&name));
        }),
    ))
    .style(|s| {
        s.items_center()
            .gap(6.0)
            .padding_horiz(6.0)
            .padding_vert(3.0)
    })
}

/// Join form plus the turn-order roster.
pub(crate) fn roster_panel(
    session: RwSignal<Session>,
    marker: RwSignal<Option<Hsv>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());

    let join = move || {
        let raw = name.get_untracked();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        let joining = trimmed.to_string();
        marker.set(None);
        session.update(|s| s.join(&joining));
        name.set(String::new());
    };
    let join_on_enter = join;
    let join_on_click = join;

    v_stack((
        heading("Players"),
        h_stack((
            text_input(name)
                .placeholder("username")
                .style(|s| {
                    s.width(constants::NAME_INPUT_WIDTH)
                        .padding(4.0)
                        .font_size(constants::BODY_FONT)
                        .background(Color::WHITE)
                        .border(1.0)
                        .border_color(Color::rgb8(200, 200, 200))
                        .border_radius(4.0)
                })
                .on_event(floem::event::EventListener::KeyDown, move |e| {
                    if let floem::event::Event::KeyDown(ke) = e {
                        if ke.key.logical_key
                            == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                        {
                            join_on_enter();
                            return EventPropagation::Stop;
                        }
                    }
                    EventPropagation::Continue
                }),
            text_button("Join", join_on_click),
        ))
        .style(|s| s.items_center().gap(6.0)),
        dyn_stack(
            move || session.with(|s| s.roster().players().to_vec()),
            |username| username.clone(),
            move |username| roster_row(session, marker, username),
        )
        .style(|s| s.flex_col().gap(2.0)),
    ))
    .style(|s| s.gap(8.0))
}
