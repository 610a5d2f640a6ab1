use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::rows;
use crate::screens::landing::{TAGLINE, TITLE};
use crate::screens::HomeScreen;

const DISCLAIMER: &str = "These games play with your breath. Stop at once if you feel dizzy \
and never play underwater, while driving, or anywhere fainting would be dangerous.";

pub fn render_landing(area: Rect, buf: &mut Buffer) {
    let chunks = rows(
        area,
        &[
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ],
    );

    Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);
    Paragraph::new(TAGLINE)
        .alignment(Alignment::Center)
        .render(chunks[2], buf);
    Paragraph::new(Span::styled(
        "(enter) go / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[4], buf);
}

pub fn render_disclaimer(area: Rect, buf: &mut Buffer) {
    let chunks = rows(
        area,
        &[
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(1),
        ],
    );
    Paragraph::new(Span::styled(
        "DISCLAIMER",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);
    Paragraph::new(DISCLAIMER)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[2], buf);
}

pub fn render_home(home: &HomeScreen, area: Rect, buf: &mut Buffer) {
    let chunks = rows(
        area,
        &[
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ],
    );

    Paragraph::new(Span::styled(
        "CHOOSE A GAME",
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    let tiles = home.tiles();
    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, 3); tiles.len().div_ceil(2)])
        .split(chunks[1]);

    for (i, tile) in tiles.iter().enumerate() {
        let row = grid_rows[i / 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(row);
        let cell = cols[i % 2];

        let selected = i == home.selected();
        let playable = tile.route.is_some();
        let border = match (selected, playable) {
            (true, _) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::White),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        let caption = if playable { "" } else { "soon" };

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", i + 1, tile.name),
                border,
            )),
            Line::from(Span::styled(caption, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
        .render(cell, buf);
    }

    Paragraph::new(Span::styled(
        "(arrows) move / (enter) open / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);
}
