//! Error types for Lumen

use thiserror::Error;

/// Main error type for Lumen operations
#[derive(Error, Debug)]
pub enum LumenError {
    /// The loader palette has no colors to cycle through
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// Surface size is zero
    #[error("Invalid surface size: {0}")]
    InvalidSize(u32),

    /// The surface cannot contain the emitter bouncing between its walls
    #[error("Surface size {size} is too small for max radius {max_radius} at base speed {base_speed}")]
    SurfaceTooSmall {
        size: u32,
        max_radius: f64,
        base_speed: f64,
    },

    /// Radius bounds are not a valid, positive range
    #[error("Invalid radius range: min {min} max {max}")]
    InvalidRadiusRange { min: f64, max: f64 },

    /// Initial radius falls outside the radius bounds
    #[error("Initial radius {radius} outside [{min}, {max}]")]
    RadiusOutOfRange { radius: f64, min: f64, max: f64 },

    /// A rate, speed or tick value that must be strictly positive is not
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// Frame rate is above what the animation timer can tick at
    #[error("fps must be at most {max}, got {fps}")]
    FpsOutOfRange { fps: u32, max: u32 },

    /// An initial emitter speed is zero, not finite, or faster than a bounce
    #[error("{name} must be non-zero with magnitude at most {max}, got {value}")]
    InitialSpeedOutOfRange {
        name: &'static str,
        value: f64,
        max: f64,
    },

    /// A color string was not in `#RRGGBB` form
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The animation task ended abnormally
    #[error("Animation error: {0}")]
    Animation(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LumenError
pub type LumenResult<T> = Result<T, LumenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LumenError::InvalidColor("#12".to_string());
        assert_eq!(format!("{}", err), "Invalid color: #12");

        let err = LumenError::NonPositive {
            name: "decay",
            value: 0.0,
        };
        assert_eq!(format!("{}", err), "decay must be positive, got 0");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LumenError = io_err.into();
        assert!(matches!(err, LumenError::Io(_)));
    }
}
