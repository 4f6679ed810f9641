//! Named parameter presets for classic Gray-Scott pattern regimes.
//!
//! Selecting a preset replaces the active parameters wholesale; ancillary
//! knobs (dt, brush size, flow toggle) come from [`Params::default`], so
//! the same name always yields the same record.

use crate::error::SimError;
use crate::params::Params;

/// Catalog keys, in display order.
const PRESET_NAMES: &[&str] = &["turing-spots", "coral-growth", "fingerprint", "maze"];

/// Looks up a preset by name and returns its full parameter record.
///
/// Names are case insensitive; spaces and underscores are treated as
/// hyphens, so `"Turing Spots"` and `"turing-spots"` match the same entry.
pub fn preset_params(name: &str) -> Result<Params, SimError> {
    let key = name.trim().to_ascii_lowercase().replace([' ', '_'], "-");
    let (diffusion_a, diffusion_b, feed_rate, kill_rate) = match key.as_str() {
        "turing-spots" => (1.0, 0.5, 0.055, 0.062),
        "coral-growth" => (1.0, 0.4, 0.0367, 0.0649),
        "fingerprint" => (1.0, 0.6, 0.037, 0.06),
        "maze" | "maze-pattern" => (1.0, 0.5, 0.029, 0.057),
        _ => return Err(SimError::UnknownPreset(name.to_string())),
    };
    Ok(Params {
        diffusion_a,
        diffusion_b,
        feed_rate,
        kill_rate,
        ..Params::default()
    })
}

/// Names of all catalog presets, in display order.
pub fn list_presets() -> &'static [&'static str] {
    PRESET_NAMES
}
