//! Particle loader animation.
//!
//! A single emitter bounces around a square surface, growing and shrinking
//! while its color slides through a palette. Every frame it drops a particle
//! that fades out over the following frames, leaving a colored trail.
//!
//! ```ignore
//! use lumen_core::{DisplayList, Loader, LoaderConfig};
//!
//! let mut loader = Loader::new(LoaderConfig::default())?;
//! let mut surface = DisplayList::new(loader.config().size);
//! loader.frame(&mut surface);
//! ```
//!
//! [`AnimationHandle`] drives a loader on a tokio task at the configured
//! frame rate.

mod animation;
mod emitter;
mod particle;

pub use animation::AnimationHandle;
pub use emitter::Emitter;
pub use particle::Particle;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;
use crate::config::LoaderConfig;
use crate::error::LumenResult;
use crate::surface::RenderSurface;

/// Particle trail animation state.
#[derive(Debug)]
pub struct Loader<R = StdRng> {
    config: LoaderConfig,
    emitter: Emitter,
    particles: Vec<Particle>,
    rng: R,
}

impl Loader<StdRng> {
    /// Create a loader seeded from the operating system.
    pub fn new(config: LoaderConfig) -> LumenResult<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Loader<R> {
    /// Create a loader with an explicit random source for the bounce jitter.
    pub fn with_rng(config: LoaderConfig, rng: R) -> LumenResult<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected loader configuration");
            return Err(e);
        }

        Ok(Self {
            emitter: Emitter::new(&config),
            particles: Vec::new(),
            config,
            rng,
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn calculate_next_coordinates(&mut self) {
        self.emitter.next_coordinates(&self.config, &mut self.rng);
    }

    pub fn calculate_next_radius(&mut self) {
        self.emitter.next_radius(&self.config);
    }

    pub fn calculate_next_color(&self) -> Rgb {
        self.emitter.next_color(&self.config)
    }

    /// Age every particle, move the emitter and spawn a particle at its
    /// new position.
    pub fn step(&mut self) {
        self.emitter
            .advance_tick(self.config.color_change_tick, self.config.palette.len());

        for particle in &mut self.particles {
            particle.step();
        }

        self.calculate_next_coordinates();
        self.calculate_next_radius();
        let color = self.calculate_next_color();

        self.particles.push(Particle::new(
            self.emitter.x,
            self.emitter.y,
            self.emitter.radius,
            color,
            self.config.decay,
        ));
    }

    /// Clear the surface, drop dead particles and paint the rest.
    pub fn draw(&mut self, surface: &mut impl RenderSurface) {
        let size = f64::from(self.config.size);
        surface.clear_rect(0.0, 0.0, size, size);

        self.particles.retain(Particle::is_alive);
        for particle in &self.particles {
            particle.render(surface);
        }
    }

    /// One animation frame: step, then draw.
    pub fn frame(&mut self, surface: &mut impl RenderSurface) {
        self.step();
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LumenError;
    use crate::surface::DisplayList;

    fn seeded(config: LoaderConfig) -> Loader {
        Loader::with_rng(config, StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = LoaderConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(Loader::new(config), Err(LumenError::EmptyPalette)));
    }

    #[test]
    fn step_spawns_one_particle() {
        let mut loader = seeded(LoaderConfig::default());
        loader.step();
        loader.step();

        let particles = loader.particles();
        assert_eq!(particles.len(), 2);
        assert_eq!(particles[0].age(), 1);
        assert_eq!(particles[1].age(), 0);
        assert_eq!(particles[1].x, loader.emitter().x);
        assert_eq!(particles[1].radius, loader.emitter().radius);
    }

    #[test]
    fn first_particle_uses_first_transition_step() {
        let mut loader = seeded(LoaderConfig::default());
        loader.step();

        let palette = &loader.config().palette;
        let expected = palette[0].gradient(palette[1], 1.0 / 40.0);
        assert_eq!(loader.particles()[0].color, expected);
    }

    #[test]
    fn removed_on_draw_after_101_steps() {
        let mut loader = seeded(LoaderConfig::default());
        let mut surface = DisplayList::new(96);

        loader.step();
        for _ in 0..100 {
            loader.step();
        }
        // The first particle has aged 100 times and sits at life 0.
        assert_eq!(loader.particles()[0].life(), 0.0);
        loader.draw(&mut surface);
        assert_eq!(loader.particles().len(), 101);

        loader.step();
        assert!(!loader.particles()[0].is_alive());
        loader.draw(&mut surface);
        assert_eq!(loader.particles().len(), 101);
        assert!(loader.particles().iter().all(Particle::is_alive));
    }

    #[test]
    fn draw_paints_survivors_oldest_first() {
        let mut loader = seeded(LoaderConfig::default());
        let mut surface = DisplayList::new(96);
        for _ in 0..5 {
            loader.frame(&mut surface);
        }

        let frame = surface.into_frame(5);
        let alphas: Vec<f64> = frame.circles().map(|(_, _, _, color)| color.a).collect();
        assert_eq!(alphas.len(), 5);
        assert!(alphas.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(alphas[4], 1.0);
    }
}
