//! Simulation parameters, pointer input, and JSON override helpers.
//!
//! `Params` crosses the API boundary by value on every tick; the stepper
//! keeps no parameter history, so callers may change any knob between two
//! steps. JSON override objects are accepted at the outer boundary (CLI,
//! recipes) through the total `param_*` helpers, which fall back to the
//! current value when a key is missing or mistyped.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default diffusion rate for the substrate A.
pub const DEFAULT_DIFFUSION_A: f64 = 1.0;
/// Default diffusion rate for the activator B.
pub const DEFAULT_DIFFUSION_B: f64 = 0.5;
/// Default feed rate (F): replenishment of A.
pub const DEFAULT_FEED_RATE: f64 = 0.055;
/// Default kill rate (k): removal of B.
pub const DEFAULT_KILL_RATE: f64 = 0.062;
/// Default time step per tick. Must stay in (0, 1] for stability with the
/// default diffusion rates; large diffusion coefficients need a smaller dt.
pub const DEFAULT_DT: f64 = 1.0;
/// Default brush radius in cells.
pub const DEFAULT_BRUSH_SIZE: usize = 4;

/// Tunable constants of the Gray-Scott update, supplied fresh each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Diffusion rate for the substrate A (must be positive).
    pub diffusion_a: f64,
    /// Diffusion rate for the activator B (must be positive).
    pub diffusion_b: f64,
    /// Feed rate F (non-negative).
    pub feed_rate: f64,
    /// Kill rate k (non-negative).
    pub kill_rate: f64,
    /// Explicit Euler time step, in (0, 1].
    pub dt: f64,
    /// Brush radius in cells for interactive seeding (at least 1).
    pub brush_size: usize,
    /// Adds the advisory flow-field bias to the diffusion term.
    pub use_flow_field: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            diffusion_a: DEFAULT_DIFFUSION_A,
            diffusion_b: DEFAULT_DIFFUSION_B,
            feed_rate: DEFAULT_FEED_RATE,
            kill_rate: DEFAULT_KILL_RATE,
            dt: DEFAULT_DT,
            brush_size: DEFAULT_BRUSH_SIZE,
            use_flow_field: false,
        }
    }
}

impl Params {
    /// Builds parameters from a JSON object, starting from defaults.
    pub fn from_json(overrides: &Value) -> Self {
        Self::default().with_overrides(overrides)
    }

    /// Returns a copy with any keys present in `overrides` replaced.
    /// Missing or mistyped keys keep their current values.
    pub fn with_overrides(&self, overrides: &Value) -> Self {
        Self {
            diffusion_a: param_f64(overrides, "diffusion_a", self.diffusion_a),
            diffusion_b: param_f64(overrides, "diffusion_b", self.diffusion_b),
            feed_rate: param_f64(overrides, "feed_rate", self.feed_rate),
            kill_rate: param_f64(overrides, "kill_rate", self.kill_rate),
            dt: param_f64(overrides, "dt", self.dt),
            brush_size: param_usize(overrides, "brush_size", self.brush_size),
            use_flow_field: param_bool(overrides, "use_flow_field", self.use_flow_field),
        }
    }

    /// Checks every knob for NaN, sign, and range violations.
    ///
    /// The stepper calls this before touching the grid so that a NaN or a
    /// negative diffusion rate can never reach the concentration buffers.
    pub fn validate(&self) -> Result<(), SimError> {
        require(self.diffusion_a > 0.0, "diffusion_a", self.diffusion_a)?;
        require(self.diffusion_b > 0.0, "diffusion_b", self.diffusion_b)?;
        require(self.feed_rate >= 0.0, "feed_rate", self.feed_rate)?;
        require(self.kill_rate >= 0.0, "kill_rate", self.kill_rate)?;
        require(
            self.dt.is_finite() && self.dt > 0.0 && self.dt <= 1.0,
            "dt",
            self.dt,
        )?;
        require(self.brush_size >= 1, "brush_size", self.brush_size as f64)?;
        Ok(())
    }
}

/// Rejects when `cond` is false or `value` is not finite. NaN fails every
/// comparison, so a NaN value is caught on either path.
fn require(cond: bool, name: &str, value: f64) -> Result<(), SimError> {
    if cond && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name: name.to_string(),
            value,
        })
    }
}

/// Pointer/brush interaction input, sampled once at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    /// Cell x coordinate; may lie outside the grid (the brush is clipped).
    pub x: isize,
    /// Cell y coordinate; may lie outside the grid.
    pub y: isize,
    /// Whether the pointer is currently drawing.
    pub active: bool,
}

impl Pointer {
    /// An actively drawing pointer at the given cell.
    pub fn pressed(x: isize, y: isize) -> Self {
        Self { x, y, active: true }
    }

    /// A hovering (non-drawing) pointer at the given cell.
    pub fn hovering(x: isize, y: isize) -> Self {
        Self {
            x,
            y,
            active: false,
        }
    }
}

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. Accepts JSON integers as well.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing,
/// negative, fractional, or wrong type.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or
/// wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}
