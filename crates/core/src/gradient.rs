//! Color schemes: piecewise-linear RGB gradients over [0, 1].
//!
//! A scheme is an ordered list of at least two 8-bit RGB stops, evenly
//! spaced along the sample parameter. Interpolation happens per channel
//! with `floor` rounding, and out-of-range samples clamp to the end stops
//! (no extrapolation).
//!
//! The mapping from a concentration pair to the sample parameter uses the
//! normalized order parameter `v = (a - b + 1) / 2`, so a pure-substrate
//! cell lands at 1.0 and a pure-activator cell at 0.0.

use crate::error::SimError;

/// An 8-bit RGB color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case
    /// insensitive).
    ///
    /// Returns `SimError::InvalidColor` unless the input is a 6-digit hex
    /// color.
    pub fn from_hex(hex: &str) -> Result<Self, SimError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(SimError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| SimError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Self {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }
}

/// Names of the built-in color schemes.
const SCHEME_NAMES: &[&str] = &["thermal", "ocean", "forest", "purple"];

/// A piecewise-linear gradient over an ordered list of RGB stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    stops: Vec<Rgb>,
}

impl ColorScheme {
    /// Creates a scheme from explicit stops. Requires at least two.
    pub fn new(stops: Vec<Rgb>) -> Result<Self, SimError> {
        if stops.len() < 2 {
            return Err(SimError::InvalidScheme(format!(
                "a gradient needs at least 2 stops, got {}",
                stops.len()
            )));
        }
        Ok(Self { stops })
    }

    /// Creates a scheme by parsing hex color strings.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, SimError> {
        let stops: Result<Vec<Rgb>, SimError> = hexes.iter().map(|h| Rgb::from_hex(h)).collect();
        Self::new(stops?)
    }

    /// The ordered gradient stops.
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Number of stops in the gradient.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false for a constructed scheme; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Samples the gradient at `t` in [0, 1].
    ///
    /// `t` is clamped to [0, 1] (NaN maps to 0). `sample(0.0)` returns the
    /// first stop exactly and `sample(1.0)` the last; between two stops each
    /// channel interpolates linearly with `floor` rounding.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let idx = (scaled as usize).min(segments - 1);
        let frac = scaled - idx as f64;

        let lo = self.stops[idx];
        let hi = self.stops[idx + 1];
        Rgb {
            r: lerp_channel(lo.r, hi.r, frac),
            g: lerp_channel(lo.g, hi.g, frac),
            b: lerp_channel(lo.b, hi.b, frac),
        }
    }

    /// Maps a concentration pair to a color via the normalized order
    /// parameter `v = (a - b + 1) / 2`.
    pub fn colorize(&self, a: f64, b: f64) -> Rgb {
        self.sample((a - b + 1.0) / 2.0)
    }

    // -- Built-in schemes --

    /// Black through red and yellow to white.
    pub fn thermal() -> Self {
        Self::from_hex(&["#000000", "#ff0000", "#ffff00", "#ffffff"])
            .expect("thermal scheme hex values are valid")
    }

    /// Deep blue through azure and cyan to white.
    pub fn ocean() -> Self {
        Self::from_hex(&["#000033", "#0066ff", "#00ffff", "#ffffff"])
            .expect("ocean scheme hex values are valid")
    }

    /// Dark green through green and yellow to white.
    pub fn forest() -> Self {
        Self::from_hex(&["#003300", "#00ff00", "#ffff00", "#ffffff"])
            .expect("forest scheme hex values are valid")
    }

    /// Deep blue through violet and magenta to white.
    pub fn purple() -> Self {
        Self::from_hex(&["#000033", "#6600ff", "#ff00ff", "#ffffff"])
            .expect("purple scheme hex values are valid")
    }

    /// Looks up a built-in scheme by name (case insensitive).
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "thermal" => Ok(Self::thermal()),
            "ocean" => Ok(Self::ocean()),
            "forest" => Ok(Self::forest()),
            "purple" => Ok(Self::purple()),
            _ => Err(SimError::UnknownScheme(name.to_string())),
        }
    }

    /// Names of all built-in schemes, in catalog order.
    pub fn list_names() -> &'static [&'static str] {
        SCHEME_NAMES
    }
}

/// Linear interpolation of one 8-bit channel with `floor` rounding.
fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    (f64::from(start) + (f64::from(end) - f64::from(start)) * t).floor() as u8
}
