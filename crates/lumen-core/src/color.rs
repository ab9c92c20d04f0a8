//! RGB colors and palette interpolation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LumenError;

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel. Alpha is clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Linear gradient from `self` to `stop` at `position` (0 = self, 1 = stop).
    ///
    /// Each channel is `a + round((b - a) * position)` with halves rounded
    /// up, so position 0 yields `self` exactly and position 1 yields `stop`.
    pub fn gradient(self, stop: Rgb, position: f64) -> Rgb {
        let channel = |a: u8, b: u8| {
            let delta = ((f64::from(b) - f64::from(a)) * position + 0.5).floor();
            (f64::from(a) + delta).clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: channel(self.r, stop.r),
            g: channel(self.g, stop.g),
            b: channel(self.b, stop.b),
        }
    }

    /// `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = LumenError;

    /// Parse `#RRGGBB` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LumenError::InvalidColor(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| LumenError::InvalidColor(s.to_string()))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An RGB color with a floating point alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgb::new(0, 0, 0).with_alpha(1.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// The default loader palette.
pub const DEFAULT_PALETTE: [Rgb; 7] = [
    Rgb::new(215, 60, 234), // #D73CEA
    Rgb::new(145, 53, 224), // #9135E0
    Rgb::new(88, 72, 224),  // #5848E0
    Rgb::new(37, 183, 255), // #25B7FF
    Rgb::new(89, 189, 0),   // #59BD00
    Rgb::new(251, 172, 2),  // #FBAC02
    Rgb::new(227, 37, 129), // #E32581
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints() {
        let start = DEFAULT_PALETTE[0];
        let stop = DEFAULT_PALETTE[1];
        assert_eq!(start.gradient(stop, 0.0), start);
        assert_eq!(start.gradient(stop, 1.0), stop);
    }

    #[test]
    fn gradient_rounds_half_up() {
        // (10 - 5) * 0.5 = 2.5 -> 3, (0 - 5) * 0.5 = -2.5 -> -2
        let a = Rgb::new(5, 5, 5);
        let b = Rgb::new(10, 0, 5);
        assert_eq!(a.gradient(b, 0.5), Rgb::new(8, 3, 5));
    }

    #[test]
    fn parse_hex() {
        assert_eq!("#D73CEA".parse::<Rgb>().unwrap(), Rgb::new(215, 60, 234));
        assert_eq!("25b7ff".parse::<Rgb>().unwrap(), Rgb::new(37, 183, 255));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#12345g".parse::<Rgb>().is_err());
    }

    #[test]
    fn css_formatting() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(c.to_string(), "rgb(1, 2, 3)");
        assert_eq!(c.to_hex(), "#010203");
        assert_eq!(c.with_alpha(0.5).to_string(), "rgba(1, 2, 3, 0.5)");
        assert_eq!(c.with_alpha(-0.2).a, 0.0);
    }
}
