use rand::Rng;

use crate::color::Rgb;
use crate::config::LoaderConfig;

/// The moving point particles are spawned from.
///
/// Position is the top-left corner of the emitter's bounding box, so an axis
/// hits the far wall when `coord + 2 * radius` reaches the surface size.
#[derive(Clone, Debug, PartialEq)]
pub struct Emitter {
    pub x: f64,
    pub y: f64,
    pub h_speed: f64,
    pub v_speed: f64,
    pub radius: f64,
    pub radius_speed: f64,
    /// Frames into the current palette transition, `0..=color_change_tick`
    pub tick: u32,
    pub color_index: usize,
}

impl Emitter {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            h_speed: config.initial_h_speed,
            v_speed: config.initial_v_speed,
            radius: config.initial_radius,
            radius_speed: config.radius_speed,
            tick: 0,
            color_index: 0,
        }
    }

    /// Advance the palette transition by one frame.
    pub fn advance_tick(&mut self, color_change_tick: u32, palette_len: usize) {
        self.tick += 1;
        if self.tick > color_change_tick {
            self.tick = 0;
            self.color_index = if self.color_index + 1 < palette_len {
                self.color_index + 1
            } else {
                0
            };
        }
    }

    /// Move one step and bounce off the walls.
    pub fn next_coordinates(&mut self, config: &LoaderConfig, rng: &mut impl Rng) {
        self.x += self.h_speed;
        self.y += self.v_speed;

        let limit = f64::from(config.size);
        self.h_speed = bounce(self.x, self.radius, self.h_speed, limit, config.base_speed, rng);
        self.v_speed = bounce(self.y, self.radius, self.v_speed, limit, config.base_speed, rng);
    }

    /// Grow or shrink, reversing at the radius bounds.
    pub fn next_radius(&mut self, config: &LoaderConfig) {
        self.radius += self.radius_speed;

        if self.radius > config.max_radius || self.radius < config.min_radius {
            self.radius_speed = -self.radius_speed;
            self.radius = self.radius.clamp(config.min_radius, config.max_radius);
        }
    }

    /// Current color along the transition from `palette[color_index]` to the
    /// next entry, wrapping to the first.
    pub fn next_color(&self, config: &LoaderConfig) -> Rgb {
        let palette = &config.palette;
        let start = palette[self.color_index % palette.len()];
        let stop = palette.get(self.color_index + 1).copied().unwrap_or(palette[0]);

        start.gradient(stop, f64::from(self.tick) / f64::from(config.color_change_tick))
    }
}

/// New speed for one axis after moving to `coord`.
fn bounce(coord: f64, radius: f64, speed: f64, limit: f64, base: f64, rng: &mut impl Rng) -> f64 {
    if coord + radius * 2.0 >= limit {
        -base + jitter(base, rng)
    } else if coord <= 1.0 {
        base + jitter(base, rng)
    } else {
        speed
    }
}

/// Uniform in `[-base / 2, base / 2)`.
fn jitter(base: f64, rng: &mut impl Rng) -> f64 {
    let half = base / 2.0;
    rng.random_range(-half..half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tick_wraps_through_palette() {
        let config = LoaderConfig::default();
        let mut emitter = Emitter::new(&config);

        for _ in 0..40 {
            emitter.advance_tick(40, 3);
        }
        assert_eq!((emitter.tick, emitter.color_index), (40, 0));

        emitter.advance_tick(40, 3);
        assert_eq!((emitter.tick, emitter.color_index), (0, 1));

        emitter.color_index = 2;
        emitter.tick = 40;
        emitter.advance_tick(40, 3);
        assert_eq!((emitter.tick, emitter.color_index), (0, 0));
    }

    #[test]
    fn color_at_transition_edges() {
        let config = LoaderConfig::default();
        let mut emitter = Emitter::new(&config);

        assert_eq!(emitter.next_color(&config), config.palette[0]);

        emitter.tick = 40;
        assert_eq!(emitter.next_color(&config), config.palette[1]);

        emitter.color_index = config.palette.len() - 1;
        assert_eq!(emitter.next_color(&config), config.palette[0]);
    }

    #[test]
    fn single_color_palette_is_constant() {
        let config = LoaderConfig {
            palette: vec![Rgb::new(10, 20, 30)],
            ..Default::default()
        };
        let mut emitter = Emitter::new(&config);
        for _ in 0..200 {
            emitter.advance_tick(config.color_change_tick, 1);
            assert_eq!(emitter.next_color(&config), Rgb::new(10, 20, 30));
        }
    }

    #[test]
    fn radius_reverses_and_clamps() {
        let config = LoaderConfig::default();
        let mut emitter = Emitter::new(&config);
        emitter.radius = 11.99;

        emitter.next_radius(&config);
        assert_eq!(emitter.radius, config.max_radius);
        assert!(emitter.radius_speed < 0.0);

        emitter.next_radius(&config);
        assert!(emitter.radius < config.max_radius);
    }

    #[test]
    fn bounces_off_far_wall() {
        let config = LoaderConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut emitter = Emitter::new(&config);
        emitter.x = 95.0 - 2.0 * emitter.radius;
        emitter.h_speed = 1.5;

        emitter.next_coordinates(&config, &mut rng);
        assert!(emitter.h_speed < 0.0);
        assert!(emitter.h_speed >= -2.25 && emitter.h_speed < -0.75);
    }

    #[test]
    fn bounces_off_near_wall() {
        let config = LoaderConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut emitter = Emitter::new(&config);

        // Starts at y = 0 with v_speed 1, landing on the near limit.
        emitter.next_coordinates(&config, &mut rng);
        assert_eq!(emitter.y, 1.0);
        assert!(emitter.v_speed >= 0.75 && emitter.v_speed < 2.25);
        assert_eq!(emitter.h_speed, 1.5);
    }
}
