use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::rows;
use crate::screens::CountdownScreen;
use crate::sequencer::Phase;

const INSPIRE_COLOR: Color = Color::Rgb(0x22, 0xc5, 0x5e);
const HOLD_COLOR: Color = Color::Rgb(0xf4, 0x3f, 0x5e);

// 3x5 block digits
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Five text rows spelling `n` in block digits.
pub fn big_number(n: u32) -> Vec<String> {
    let digits: Vec<usize> = n
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    (0..5)
        .map(|row| digits.iter().map(|&d| DIGITS[d][row]).join(" "))
        .collect()
}

pub fn render(countdown: &CountdownScreen, area: Rect, buf: &mut Buffer) {
    let (Some(phase), Some(remaining)) = (countdown.phase(), countdown.remaining()) else {
        return;
    };
    let (color, instruction) = match phase {
        Phase::Inspire => (INSPIRE_COLOR, "breathe in slowly"),
        Phase::Hold => (HOLD_COLOR, "hold your breath"),
    };

    let chunks = rows(
        area,
        &[
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ],
    );

    Paragraph::new(Span::styled(
        phase.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    let digits: Vec<Line> = big_number(remaining)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(color))))
        .collect();
    Paragraph::new(digits)
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

    Paragraph::new(Span::styled(
        instruction,
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[5], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::RecordingFeedback;
    use crate::host::Host;
    use crate::navigation::Route;
    use crate::ui::test_support::rendered;
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    #[test]
    fn block_digits_line_up() {
        let rows = big_number(12);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.chars().count() == 7));
        assert_eq!(rows[0], " █  ███");
    }

    #[test]
    fn shows_phase_and_instruction() {
        let mut host = Host::new(RecordingFeedback::new(), StdRng::seed_from_u64(1));
        host.store_mut().set_x(9);
        host.store_mut().set_y(1);
        host.start(Route::Countdown, Duration::ZERO);

        let text = rendered(host.view(), Duration::ZERO);
        assert!(text.contains("INSPIRE"));
        assert!(text.contains("breathe in slowly"));

        host.advance(Duration::from_secs(1));
        let text = rendered(host.view(), Duration::from_secs(1));
        assert!(text.contains("HOLD"));
        assert!(text.contains("hold your breath"));
    }

    #[test]
    fn nothing_drawn_before_the_guard_passes() {
        let screen = CountdownScreen::new();
        let text = rendered(Some(crate::screens::View::Countdown(&screen)), Duration::ZERO);
        assert!(!text.contains("INSPIRE"));
    }
}
