//! Seasonal confetti easter egg.
//!
//! Fires once per launch on January 14th. The date gate is a pure predicate
//! over month/day so it is testable without touching the clock; the caller
//! feeds it today's date.

use chrono::{Datelike, Local};
use giostra_core::geometry::Rect;
use giostra_render::cell::Cell;
use giostra_render::frame::Frame;
use giostra_style::{Color, Style};

const GLYPHS: [char; 4] = ['*', '+', '.', 'o'];
const COLORS: [Color; 5] = [
    Color::YELLOW,
    Color::MAGENTA,
    Color::CYAN,
    Color::GREEN,
    Color::RED,
];
const PARTICLES: usize = 60;
const LIFETIME_TICKS: u32 = 90;

/// Whether confetti should fire on the given calendar date.
#[must_use]
pub fn is_celebration_day(month: u32, day: u32) -> bool {
    month == 1 && day == 14
}

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    glyph: char,
    color: Color,
}

/// Confetti burst driven by the app's tick.
#[derive(Debug, Clone, Default)]
pub struct Celebration {
    particles: Vec<Particle>,
    ticks_left: u32,
}

impl Celebration {
    /// Create an inactive celebration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the burst if today is the celebration day.
    pub fn maybe_start_today(&mut self, width: u16, height: u16) {
        let today = Local::now();
        if is_celebration_day(today.month(), today.day()) {
            self.start(width, height);
        }
    }

    /// Start the burst unconditionally.
    pub fn start(&mut self, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }
        self.particles.clear();
        // Deterministic fan-out from the top center; no RNG needed for a
        // one-shot flourish.
        let origin_x = f32::from(width) / 2.0;
        for i in 0..PARTICLES {
            let angle = i as f32 / PARTICLES as f32 * std::f32::consts::TAU;
            let speed = 0.4 + (i % 7) as f32 * 0.12;
            self.particles.push(Particle {
                x: origin_x,
                y: 1.0,
                dx: angle.cos() * speed,
                dy: angle.sin().abs() * speed * 0.5 + 0.1,
                glyph: GLYPHS[i % GLYPHS.len()],
                color: COLORS[i % COLORS.len()],
            });
        }
        self.ticks_left = LIFETIME_TICKS;
    }

    /// Whether particles are still falling.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    /// Advance one tick; returns `true` while the burst is live.
    pub fn tick(&mut self) -> bool {
        if self.ticks_left == 0 {
            return false;
        }
        self.ticks_left -= 1;
        for particle in &mut self.particles {
            particle.x += particle.dx;
            particle.y += particle.dy;
            // Light gravity.
            particle.dy += 0.02;
        }
        if self.ticks_left == 0 {
            self.particles.clear();
        }
        true
    }

    /// Draw the particles over whatever is already in the frame.
    pub fn render(&self, area: Rect, frame: &mut Frame) {
        if !self.is_active() {
            return;
        }
        for particle in &self.particles {
            if particle.x < 0.0 || particle.y < 0.0 {
                continue;
            }
            let x = particle.x as u16;
            let y = particle.y as u16;
            if area.contains(x, y) {
                frame.buffer.set(
                    x,
                    y,
                    Cell::styled(particle.glyph, Style::new().fg(particle.color)),
                );
            }
        }
    }
}
