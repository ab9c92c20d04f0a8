use crate::color::Rgb;
use crate::surface::RenderSurface;

/// A short-lived dot left behind by the emitter.
///
/// Life starts at 1 and drops by `decay` per step. It is derived from the
/// step count rather than accumulated, so `decay = 0.01` reaches exactly 0
/// after 100 steps and goes negative on the 101st.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    decay: f64,
    age: u32,
}

impl Particle {
    pub fn new(x: f64, y: f64, radius: f64, color: Rgb, decay: f64) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            decay,
            age: 0,
        }
    }

    pub fn life(&self) -> f64 {
        1.0 - self.decay * f64::from(self.age)
    }

    /// Number of steps taken since spawn.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn step(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life() >= 0.0
    }

    /// Fill a circle whose bounding box starts at `(x, y)`, faded by life.
    pub fn render(&self, surface: &mut impl RenderSurface) {
        surface.set_fill_color(self.color.with_alpha(self.life().max(0.0)));
        surface.fill_circle(self.x + self.radius, self.y + self.radius, self.radius);
    }
}
