use std::f64::consts::PI;
use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as Stroke},
        Paragraph, Widget,
    },
};

use super::{rows, Chrome};
use crate::screens::wheel::{WheelScreen, WheelState, SPIN_DURATION};
use crate::util::{ease_out, progress};

const SEGMENTS: [Color; 8] = [
    Color::Rgb(0xef, 0x44, 0x44),
    Color::Rgb(0x8b, 0x5c, 0xf6),
    Color::Rgb(0x06, 0xb6, 0xd4),
    Color::Rgb(0x22, 0xc5, 0x5e),
    Color::Rgb(0xf5, 0x9e, 0x0b),
    Color::Rgb(0xec, 0x48, 0x99),
    Color::Rgb(0x14, 0xb8, 0xa6),
    Color::Rgb(0x63, 0x66, 0xf1),
];
const RADIUS: f64 = 10.0;
const HUB: f64 = 2.5;
// Spokes per segment; enough to read as a filled wedge in braille.
const SPOKES: usize = 8;

/// Wheel angle in degrees at `now`.
pub fn rotation_at(wheel: &WheelScreen, now: Duration, reduced_motion: bool) -> f64 {
    match wheel.state() {
        WheelState::Idle => 0.0,
        WheelState::Spinning { .. } if reduced_motion => 0.0,
        WheelState::Spinning {
            rotation,
            started_at,
            ..
        } => rotation * ease_out(progress(now.saturating_sub(started_at), SPIN_DURATION)),
        WheelState::Settled { rotation, .. } => rotation,
    }
}

pub fn render(wheel: &WheelScreen, chrome: &Chrome<'_>, area: Rect, buf: &mut Buffer) {
    let chunks = rows(
        area,
        &[
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );

    Paragraph::new(Span::styled(
        "GAME 1 · SPIN THE WHEEL",
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    render_disc(wheel, chrome, chunks[2], buf);

    let status = match wheel.state() {
        WheelState::Idle => Line::from("press enter to spin"),
        WheelState::Spinning { .. } => Line::from("..."),
        WheelState::Settled { result, .. } => {
            let mut style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
            if wheel.flash() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::raw("Seconds X: "),
                Span::styled(format!(" {result} "), style),
            ])
        }
    };
    Paragraph::new(status)
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

    let legend = match wheel.state() {
        WheelState::Idle => "(enter) spin / (b)ack / (esc)ape",
        WheelState::Spinning { .. } => "(b)ack / (esc)ape",
        WheelState::Settled { .. } => "(enter) continue / (b)ack / (esc)ape",
    };
    Paragraph::new(Span::styled(
        legend,
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[5], buf);
}

fn render_disc(wheel: &WheelScreen, chrome: &Chrome<'_>, area: Rect, buf: &mut Buffer) {
    // Cells are roughly twice as tall as wide
    let width = area.height.saturating_mul(2).min(area.width);
    let disc = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let angle = rotation_at(wheel, chrome.now, chrome.reduced_motion);
    let label = match wheel.state() {
        WheelState::Idle => "?".to_string(),
        WheelState::Spinning { .. } => String::new(),
        WheelState::Settled { result, .. } => result.to_string(),
    };

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-12.0, 12.0])
        .y_bounds([-12.0, 12.0])
        .paint(|ctx| {
            let step = 360.0 / SEGMENTS.len() as f64;
            for (i, color) in SEGMENTS.iter().enumerate() {
                for k in 0..=SPOKES {
                    // Clockwise spin, segment 0 starting under the pointer
                    let deg = 90.0 - angle - i as f64 * step - k as f64 * step / SPOKES as f64;
                    let rad = deg * PI / 180.0;
                    ctx.draw(&Stroke {
                        x1: HUB * rad.cos(),
                        y1: HUB * rad.sin(),
                        x2: RADIUS * rad.cos(),
                        y2: RADIUS * rad.sin(),
                        color: *color,
                    });
                }
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: Color::White,
            });
            // Fixed pointer at twelve o'clock
            for (x1, x2) in [(-1.2, 0.0), (1.2, 0.0)] {
                ctx.draw(&Stroke {
                    x1,
                    y1: 11.8,
                    x2,
                    y2: 9.4,
                    color: Color::White,
                });
            }
            ctx.layer();
            ctx.print(-0.5 * label.len() as f64, 0.0, label.clone());
        })
        .render(disc, buf);
}
