use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::rows;
use crate::scoring::Tier;
use crate::screens::timing::{TimingScreen, TimingState};

/// Column of the cursor on a bar `width` cells wide.
pub fn cursor_column(position: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let max = f64::from(width - 1);
    ((position.clamp(0.0, 100.0) / 100.0) * max).round() as u16
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Perfect => Color::Green,
        Tier::Great => Color::Cyan,
        Tier::Ok => Color::Yellow,
        Tier::Miss => Color::Red,
    }
}

pub fn render(timing: &TimingScreen, area: Rect, buf: &mut Buffer) {
    let chunks = rows(
        area,
        &[
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ],
    );

    Paragraph::new(Span::styled(
        "GAME 1 · STOP THE CURSOR",
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    let status = match timing.state() {
        TimingState::Locked { .. } => Span::styled("LOCKED", Style::default().fg(Color::DarkGray)),
        _ => Span::styled(
            "TAP NOW!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };
    Paragraph::new(status)
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

    render_bar(timing, chunks[3], buf);

    let scale = chunks[4];
    if scale.width >= 6 {
        let gap = usize::from(scale.width) - 6;
        Paragraph::new(format!("0%{:^gap$}100%", "|"))
            .style(Style::default().fg(Color::DarkGray))
            .render(scale, buf);
    }

    if let TimingState::Locked { score, tier } = timing.state() {
        let mut tier_style = Style::default()
            .fg(tier_color(tier))
            .add_modifier(Modifier::BOLD);
        if timing.impact() {
            tier_style = tier_style.add_modifier(Modifier::REVERSED);
        }
        Paragraph::new(Span::styled(format!(" {tier} "), tier_style))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);
        Paragraph::new(Line::from(vec![
            Span::raw("Seconds Y: "),
            Span::styled(
                score.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[7], buf);
    }

    let legend = if timing.is_locked() {
        "get ready to breathe"
    } else {
        "(any key) stop / (esc)ape"
    };
    Paragraph::new(Span::styled(
        legend,
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[9], buf);
}

fn render_bar(timing: &TimingScreen, area: Rect, buf: &mut Buffer) {
    let width = area.width;
    if width == 0 {
        return;
    }
    let centre = (width - 1) / 2;
    let cursor = cursor_column(timing.position(), width);
    let cursor_style = match timing.state() {
        TimingState::Locked { tier, .. } => Style::default()
            .fg(tier_color(tier))
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };

    let spans: Vec<Span> = (0..width)
        .map(|col| {
            if col == cursor {
                Span::styled("█", cursor_style)
            } else if col == centre {
                Span::styled("┃", Style::default().fg(Color::Green))
            } else {
                Span::styled("─", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Paragraph::new(Line::from(spans)).render(area, buf);
}
