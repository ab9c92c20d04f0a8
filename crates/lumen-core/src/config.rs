//! Loader configuration.
//!
//! All fields have defaults, so a JSON file only needs to name the values it
//! overrides:
//!
//! ```json
//! { "size": 128, "palette": [{ "r": 255, "g": 0, "b": 0 }] }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, DEFAULT_PALETTE};
use crate::error::{LumenError, LumenResult};

/// Highest frame rate accepted, one frame per millisecond.
pub const MAX_FPS: u32 = 1000;

/// Configuration for a [`Loader`](crate::loader::Loader), fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Width and height of the square surface in pixels
    pub size: u32,
    /// Ordered, cyclic list of colors the emitter interpolates through
    pub palette: Vec<Rgb>,
    /// Speed magnitude the emitter bounces back with
    pub base_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub initial_radius: f64,
    pub initial_h_speed: f64,
    pub initial_v_speed: f64,
    /// Radius change per frame
    pub radius_speed: f64,
    /// Frames spent interpolating between two palette entries
    pub color_change_tick: u32,
    /// Particle life lost per frame
    pub decay: f64,
    pub fps: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            size: 96,
            palette: DEFAULT_PALETTE.to_vec(),
            base_speed: 1.5,
            min_radius: 6.0,
            max_radius: 12.0,
            initial_radius: 8.0,
            initial_h_speed: 1.5,
            initial_v_speed: 1.0,
            radius_speed: 0.05,
            color_change_tick: 40,
            decay: 0.01,
            fps: 60,
        }
    }
}

impl LoaderConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LumenResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: LoaderConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that a loader built from this configuration can animate.
    pub fn validate(&self) -> LumenResult<()> {
        if self.palette.is_empty() {
            return Err(LumenError::EmptyPalette);
        }
        if self.size == 0 {
            return Err(LumenError::InvalidSize(self.size));
        }

        positive("base_speed", self.base_speed)?;
        positive("radius_speed", self.radius_speed)?;
        positive("decay", self.decay)?;
        positive("color_change_tick", f64::from(self.color_change_tick))?;
        positive("fps", f64::from(self.fps))?;
        if self.fps > MAX_FPS {
            return Err(LumenError::FpsOutOfRange {
                fps: self.fps,
                max: MAX_FPS,
            });
        }

        // Bounces leave the wall at most 1.5 * base_speed; the initial speeds
        // share that bound so the first frames stay on the surface too.
        let max_speed = self.base_speed * 1.5;
        initial_speed("initial_h_speed", self.initial_h_speed, max_speed)?;
        initial_speed("initial_v_speed", self.initial_v_speed, max_speed)?;

        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err(LumenError::InvalidRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.min_radius..=self.max_radius).contains(&self.initial_radius) {
            return Err(LumenError::RadiusOutOfRange {
                radius: self.initial_radius,
                min: self.min_radius,
                max: self.max_radius,
            });
        }

        // The emitter must fit between both walls with room for a full
        // bounce, otherwise both limits trigger at once and it drifts away.
        if f64::from(self.size) < 2.0 * self.max_radius + 4.0 * self.base_speed {
            return Err(LumenError::SurfaceTooSmall {
                size: self.size,
                max_radius: self.max_radius,
                base_speed: self.base_speed,
            });
        }

        Ok(())
    }

    /// Time between two animation frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

fn positive(name: &'static str, value: f64) -> LumenResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(LumenError::NonPositive { name, value })
    }
}

fn initial_speed(name: &'static str, value: f64, max: f64) -> LumenResult<()> {
    if value.is_finite() && value != 0.0 && value.abs() <= max {
        Ok(())
    } else {
        Err(LumenError::InitialSpeedOutOfRange { name, value, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_valid() {
        let config = LoaderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.size, 96);
        assert_eq!(config.palette.len(), 7);
        assert_eq!(config.frame_interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn rejects_empty_palette() {
        let config = LoaderConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LumenError::EmptyPalette)));
    }

    #[test]
    fn rejects_bad_radius() {
        let inverted = LoaderConfig {
            min_radius: 10.0,
            max_radius: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(LumenError::InvalidRadiusRange { .. })
        ));

        let outside = LoaderConfig {
            initial_radius: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            outside.validate(),
            Err(LumenError::RadiusOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_small_surface() {
        let config = LoaderConfig {
            size: 20,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LumenError::SurfaceTooSmall { .. })
        ));
    }

    #[test]
    fn rejects_zero_decay() {
        let config = LoaderConfig {
            decay: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LumenError::NonPositive { name: "decay", .. })
        ));
    }

    #[test]
    fn rejects_fps_above_limit() {
        let config = LoaderConfig {
            fps: 2_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LumenError::FpsOutOfRange { fps: 2_000_000_000, max: MAX_FPS })
        ));

        let fastest = LoaderConfig {
            fps: MAX_FPS,
            ..Default::default()
        };
        assert!(fastest.validate().is_ok());
        assert_eq!(fastest.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn rejects_bad_initial_speed() {
        for (h, v) in [(0.0, 1.0), (1.0, 500.0), (f64::NAN, 1.0), (1.0, f64::INFINITY), (-3.0, 1.0)] {
            let config = LoaderConfig {
                initial_h_speed: h,
                initial_v_speed: v,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(LumenError::InitialSpeedOutOfRange { .. })),
                "h = {h} v = {v}"
            );
        }

        let reversed = LoaderConfig {
            initial_h_speed: -1.5,
            initial_v_speed: -2.25,
            ..Default::default()
        };
        assert!(reversed.validate().is_ok());
    }

    #[test]
    fn load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "size": 128, "palette": [{{ "r": 255, "g": 0, "b": 0 }}] }}"#).unwrap();

        let config = LoaderConfig::load(file.path()).unwrap();
        assert_eq!(config.size, 128);
        assert_eq!(config.palette, vec![Rgb::new(255, 0, 0)]);
        assert_eq!(config.decay, 0.01);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            LoaderConfig::load(file.path()),
            Err(LumenError::Serialization(_))
        ));
    }
}
