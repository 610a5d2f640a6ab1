use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

const SYMBOLS: [char; 6] = ['✦', '✧', '*', '+', '•', '★'];
const GRAVITY: f64 = 15.0;

/// One spark of the settle burst.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
}

impl Particle {
    fn new(x: f64, y: f64, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-6.0..6.0),
            vel_y: rng.gen_range(-6.0..-1.5),
            symbol: *SYMBOLS.choose(rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..8),
            age: 0.0,
            max_age: rng.gen_range(0.8..1.6),
        }
    }

    fn update(&mut self, dt: f64) -> bool {
        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += GRAVITY * dt;
        self.age += dt;
        self.age < self.max_age
    }
}

/// Short particle burst around a point, advanced with wall-clock deltas.
#[derive(Debug, Default)]
pub struct Burst {
    pub particles: Vec<Particle>,
    pub is_active: bool,
    last_update: Duration,
    width: f64,
    height: f64,
}

impl Burst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Duration, width: u16, height: u16) {
        let mut rng = rand::thread_rng();
        self.particles.clear();
        self.is_active = true;
        self.last_update = now;
        self.width = width as f64;
        self.height = height as f64;

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        for _ in 0..30 {
            let x = cx + rng.gen_range(-4.0..4.0);
            let y = cy + rng.gen_range(-2.0..2.0);
            self.particles.push(Particle::new(x, y, &mut rng));
        }
    }

    pub fn update(&mut self, now: Duration) {
        if !self.is_active {
            return;
        }
        let dt = now.saturating_sub(self.last_update).as_secs_f64();
        self.last_update = now;

        let (w, h) = (self.width, self.height);
        self.particles.retain_mut(|p| {
            let alive = p.update(dt);
            let on_screen = p.x >= -1.0 && p.x <= w + 1.0 && p.y <= h + 1.0;
            alive && on_screen
        });
        if self.particles.is_empty() {
            self.is_active = false;
        }
    }

    pub fn stop(&mut self) {
        self.particles.clear();
        self.is_active = false;
    }
}
