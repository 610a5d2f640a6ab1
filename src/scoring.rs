use crate::feedback;

pub const MIN_SCORE: u32 = 4;
pub const MAX_SCORE: u32 = 12;

/// Maps a frozen cursor position to `seconds_y`.
///
/// Distance from the centre is normalised to `[0, 1]` and bent by an
/// exponent below one, so the curve rises fastest near the centre.
pub fn score(position: f64) -> u32 {
    let p = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 100.0)
    };
    let d = (50.0 - p).abs() / 50.0;
    let raw = (4.0 + 8.0 * d.powf(0.85)).round();
    (raw as u32).clamp(MIN_SCORE, MAX_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Tier {
    #[strum(serialize = "PERFECT!")]
    Perfect,
    #[strum(serialize = "GREAT!")]
    Great,
    #[strum(serialize = "OK")]
    Ok,
    #[strum(serialize = "MISS")]
    Miss,
}

impl Tier {
    pub fn of(score: u32) -> Self {
        match score {
            0..=5 => Tier::Perfect,
            6..=7 => Tier::Great,
            8..=9 => Tier::Ok,
            _ => Tier::Miss,
        }
    }

    pub fn vibration(&self) -> &'static [u64] {
        match self {
            Tier::Perfect => feedback::PERFECT,
            Tier::Great => feedback::GREAT,
            Tier::Ok | Tier::Miss => feedback::PLAIN,
        }
    }
}
