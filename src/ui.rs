pub mod countdown;
pub mod menu;
pub mod timing;
pub mod wheel;

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};

use crate::celebration::Burst;
use crate::scoring::Tier;
use crate::screens::timing::TimingState;
use crate::screens::View;

pub(crate) const VERTICAL_MARGIN: u16 = 1;
pub(crate) const HORIZONTAL_MARGIN: u16 = 2;

/// Frame-level state that does not belong to any screen.
pub struct Chrome<'a> {
    pub now: Duration,
    pub reduced_motion: bool,
    /// Border flash standing in for a vibration.
    pub pulse: bool,
    pub burst: &'a Burst,
}

pub fn draw(f: &mut Frame, view: Option<View<'_>>, chrome: &Chrome<'_>) {
    let area = f.area();
    render(view, chrome, area, f.buffer_mut());
}

pub fn render(view: Option<View<'_>>, chrome: &Chrome<'_>, area: Rect, buf: &mut Buffer) {
    let border_style = if chrome.pulse {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    match view {
        Some(View::Landing(_)) => menu::render_landing(inner, buf),
        Some(View::Disclaimer(_)) => menu::render_disclaimer(inner, buf),
        Some(View::Home(home)) => menu::render_home(home, inner, buf),
        Some(View::Wheel(wheel)) => wheel::render(wheel, chrome, inner, buf),
        Some(View::Timing(timing)) => timing::render(timing, inner, buf),
        Some(View::Countdown(countdown)) => countdown::render(countdown, inner, buf),
        None => {}
    }

    if chrome.burst.is_active && !chrome.reduced_motion {
        render_burst(chrome.burst, inner, buf);
    }
}

/// Moments worth a particle burst: the wheel settling and a perfect stop.
pub fn celebrates(view: Option<View<'_>>) -> bool {
    match view {
        Some(View::Wheel(wheel)) => wheel.flash(),
        Some(View::Timing(timing)) => {
            timing.impact()
                && matches!(
                    timing.state(),
                    TimingState::Locked {
                        tier: Tier::Perfect,
                        ..
                    }
                )
        }
        _ => false,
    }
}

/// Vertical stack of rows inside the standard margins.
pub(crate) fn rows(area: Rect, constraints: &[Constraint]) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .vertical_margin(VERTICAL_MARGIN)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(constraints)
        .split(area)
}

fn render_burst(burst: &Burst, area: Rect, buf: &mut Buffer) {
    let colors = [
        Color::Red,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Yellow,
        Color::LightMagenta,
        Color::LightCyan,
        Color::Blue,
    ];

    for particle in &burst.particles {
        if particle.x < 0.0 || particle.y < 0.0 {
            continue;
        }
        let (x, y) = (particle.x as u16, particle.y as u16);
        if x >= area.width || y >= area.height {
            continue;
        }
        let color = colors[particle.color_index % colors.len()];
        let fade = 1.0 - particle.age / particle.max_age;
        let style = if fade > 0.6 {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else if fade > 0.25 {
            Style::default().fg(color)
        } else {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        };
        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_symbol(&particle.symbol.to_string());
            cell.set_style(style);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::LandingScreen;

    #[test]
    fn empty_view_draws_only_the_frame() {
        let text = test_support::rendered(None, Duration::ZERO);
        assert!(text.contains('┌'));
    }

    #[test]
    fn only_the_settle_flash_and_perfect_stops_celebrate() {
        use crate::feedback::RecordingFeedback;
        use crate::host::Host;
        use crate::navigation::Route;
        use crate::screens::Action;
        use rand::{rngs::StdRng, SeedableRng};

        let mut host = Host::new(RecordingFeedback::new(), StdRng::seed_from_u64(2));
        host.start(Route::Wheel, Duration::ZERO);
        assert!(!celebrates(host.view()));
        host.dispatch(Action::Primary, Duration::ZERO);
        host.advance(Duration::from_millis(3000));
        assert!(celebrates(host.view()));
        host.advance(Duration::from_millis(3500));
        assert!(!celebrates(host.view()));

        // Cursor at the centre after half a sweep
        host.dispatch(Action::Primary, Duration::from_millis(3500));
        host.advance(Duration::from_millis(3500));
        host.advance(Duration::from_millis(3975));
        host.dispatch(Action::Primary, Duration::from_millis(3975));
        assert!(celebrates(host.view()));

        assert!(!celebrates(None));
    }

    #[test]
    fn burst_particles_are_drawn_inside_the_frame() {
        let mut burst = Burst::new();
        burst.start(Duration::ZERO, 78, 28);
        let chrome = Chrome {
            now: Duration::ZERO,
            reduced_motion: false,
            pulse: true,
            burst: &burst,
        };
        let landing = LandingScreen::new();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        render(Some(View::Landing(&landing)), &chrome, area, &mut buf);

        let symbols: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(burst
            .particles
            .iter()
            .any(|p| symbols.contains(p.symbol)));
    }
}
