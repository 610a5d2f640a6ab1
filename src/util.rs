use std::time::Duration;

/// Triangle wave over `[0, 100]`.
///
/// Even sweeps run 0 → 100, odd sweeps run back 100 → 0. Driven by elapsed
/// wall-clock time so the speed does not depend on how often frames arrive.
pub fn triangle_position(elapsed: Duration, half_period: Duration) -> f64 {
    let half = half_period.as_secs_f64();
    if half <= 0.0 {
        return 0.0;
    }
    let t = elapsed.as_secs_f64();
    let sweep = (t / half).floor();
    let phase = (t % half) / half;
    let pct = if sweep as u64 % 2 == 0 {
        phase * 100.0
    } else {
        (1.0 - phase) * 100.0
    };
    pct.clamp(0.0, 100.0)
}

/// Decelerating curve for the wheel, `t` in `[0, 1]`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Fraction of `total` covered by `elapsed`, clamped to `[0, 1]`.
pub fn progress(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}
