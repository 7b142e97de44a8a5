//! Particle state for the two decorative canvas backgrounds.
//!
//! Both fields are pure simulations: the `ui` crate owns the canvas and
//! calls `step` once per frame, then draws what comes back. Resizing keeps
//! existing particles where possible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const GLYPHS: &[char] = &[
    '0', '1', '{', '}', '<', '>', '/', '=', ';', ':', '(', ')', '[', ']', '#', '$', '&', '|', '*',
    '+', 'λ', 'Σ', 'ƒ', '→',
];

pub const TECH_ICONS: &[&str] = &[
    "Rust", "TS", "React", "SQL", "Docker", "Git", "Go", "K8s", "AWS", "Linux", "</>", "{ }",
];

/// Chance per frame that a drop below the bottom edge restarts at the top.
const RESET_CHANCE: f64 = 0.025;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub x: f64,
    pub y: f64,
    pub ch: char,
}

/// Column-based falling glyphs.
#[derive(Clone, Debug)]
pub struct GlyphRain {
    width: f64,
    height: f64,
    size: f64,
    /// Current row of each column's head. Negative rows are above the canvas.
    drops: Vec<i64>,
    rng: SmallRng,
}

impl GlyphRain {
    pub fn new(width: f64, height: f64, glyph_size: f64, seed: u64) -> Self {
        let mut rain = Self {
            width: 0.0,
            height: 0.0,
            size: glyph_size.max(4.0),
            drops: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        };
        rain.resize(width, height);
        rain
    }

    pub fn glyph_size(&self) -> f64 {
        self.size
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    fn rows(&self) -> i64 {
        (self.height / self.size).ceil() as i64
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let columns = (self.width / self.size).floor() as usize;
        let rows = self.rows().max(1);
        while self.drops.len() < columns {
            let start = -self.rng.gen_range(0..rows);
            self.drops.push(start);
        }
        self.drops.truncate(columns);
    }

    /// Advance one frame. Returns the head glyph of every visible column.
    pub fn step(&mut self) -> Vec<Glyph> {
        let mut frame = Vec::with_capacity(self.drops.len());
        let size = self.size;
        let height = self.height;
        for (i, drop) in self.drops.iter_mut().enumerate() {
            if *drop >= 0 {
                frame.push(Glyph {
                    x: i as f64 * size,
                    y: (*drop + 1) as f64 * size,
                    ch: GLYPHS[self.rng.gen_range(0..GLYPHS.len())],
                });
            }
            if *drop as f64 * size > height && self.rng.gen_bool(RESET_CHANCE) {
                *drop = 0;
            } else {
                *drop += 1;
            }
        }
        frame
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IconParticle {
    pub x: f64,
    pub y: f64,
    /// Pixels per second, downwards.
    pub speed: f64,
    /// Pixels per second, sideways.
    pub drift: f64,
    pub size: f64,
    pub opacity: f64,
    pub label: &'static str,
}

/// Tech labels drifting down at individual speeds.
#[derive(Clone, Debug)]
pub struct IconRain {
    width: f64,
    height: f64,
    particles: Vec<IconParticle>,
    rng: SmallRng,
}

impl IconRain {
    pub fn new(width: f64, height: f64, count: usize, seed: u64) -> Self {
        let mut rain = Self {
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::with_capacity(count),
            rng: SmallRng::seed_from_u64(seed),
        };
        for _ in 0..count {
            let y = rain.rng.gen_range(-rain.height..rain.height);
            let p = rain.spawn(y);
            rain.particles.push(p);
        }
        rain
    }

    fn spawn(&mut self, y: f64) -> IconParticle {
        IconParticle {
            x: self.rng.gen_range(0.0..self.width),
            y,
            speed: self.rng.gen_range(20.0..60.0),
            drift: self.rng.gen_range(-8.0..8.0),
            size: self.rng.gen_range(12.0..22.0),
            opacity: self.rng.gen_range(0.08..0.25),
            label: TECH_ICONS[self.rng.gen_range(0..TECH_ICONS.len())],
        }
    }

    pub fn particles(&self) -> &[IconParticle] {
        &self.particles
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        let w = self.width;
        for p in &mut self.particles {
            if p.x > w {
                p.x %= w;
            }
        }
    }

    /// Advance by `dt_ms`. Particles that left the bottom re-enter above the top.
    pub fn step(&mut self, dt_ms: f64) {
        let dt = dt_ms.max(0.0) / 1000.0;
        let (width, height) = (self.width, self.height);
        let mut respawn = Vec::new();
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.y += p.speed * dt;
            p.x = (p.x + p.drift * dt).rem_euclid(width);
            if p.y - p.size > height {
                respawn.push(i);
            }
        }
        for i in respawn {
            let size = self.particles[i].size;
            self.particles[i] = self.spawn(-size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_columns_follow_width() {
        let mut rain = GlyphRain::new(160.0, 100.0, 16.0, 1);
        assert_eq!(rain.columns(), 10);
        rain.resize(330.0, 100.0);
        assert_eq!(rain.columns(), 20);
        rain.resize(48.0, 100.0);
        assert_eq!(rain.columns(), 3);
    }

    #[test]
    fn test_glyph_frame_positions() {
        let mut rain = GlyphRain::new(64.0, 64.0, 16.0, 7);
        // After enough frames every column has entered the canvas.
        let mut frame = Vec::new();
        for _ in 0..5 {
            frame = rain.step();
        }
        assert_eq!(frame.len(), 4);
        for g in &frame {
            assert_eq!(g.x % 16.0, 0.0);
            assert!(g.y > 0.0);
            assert!(GLYPHS.contains(&g.ch));
        }
    }

    #[test]
    fn test_glyph_drops_reset() {
        let mut rain = GlyphRain::new(32.0, 32.0, 16.0, 3);
        let mut saw_top = false;
        for _ in 0..2_000 {
            let frame = rain.step();
            if frame.iter().any(|g| g.y == 16.0) {
                saw_top = true;
            }
        }
        assert!(saw_top);
    }

    #[test]
    fn test_glyph_rain_deterministic() {
        let mut a = GlyphRain::new(100.0, 100.0, 10.0, 42);
        let mut b = GlyphRain::new(100.0, 100.0, 10.0, 42);
        for _ in 0..20 {
            assert_eq!(a.step(), b.step());
        }
    }

    #[test]
    fn test_icons_fall_and_respawn() {
        let mut rain = IconRain::new(200.0, 100.0, 12, 9);
        assert_eq!(rain.particles().len(), 12);
        let before: Vec<f64> = rain.particles().iter().map(|p| p.y).collect();
        rain.step(100.0);
        for (p, y) in rain.particles().iter().zip(before) {
            assert!(p.y > y || p.y < 0.0);
        }
        for _ in 0..200 {
            rain.step(100.0);
        }
        assert_eq!(rain.particles().len(), 12);
        for p in rain.particles() {
            assert!(p.y - p.size <= 100.0 + p.speed * 0.1);
            assert!((0.0..200.0).contains(&p.x));
            assert!(TECH_ICONS.contains(&p.label));
        }
    }

    #[test]
    fn test_icons_zero_dt_is_still() {
        let mut rain = IconRain::new(50.0, 50.0, 3, 1);
        let before = rain.particles().to_vec();
        rain.step(0.0);
        assert_eq!(rain.particles(), &before[..]);
    }
}
