//! Reproducible description of a simulation run.
//!
//! A [`Recipe`] captures everything needed to recreate a render: preset and
//! scheme names, grid dimensions, seeding mode, RNG seed, step count, and
//! parameter overrides. Two identical recipes fed to the same binary
//! produce bit-identical frames.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Serializable specification of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Preset catalog key (see [`crate::preset::preset_params`]).
    pub preset: String,
    /// Color scheme catalog key.
    pub scheme: String,
    pub width: usize,
    pub height: usize,
    /// Seeding mode name (see [`crate::stepper::SeedMode::from_name`]).
    pub seed_mode: String,
    /// Seed for the injected PRNG.
    pub rng_seed: u64,
    /// Ticks to run before rendering.
    pub steps: usize,
    /// JSON parameter overrides applied on top of the preset.
    #[serde(default)]
    pub overrides: serde_json::Value,
}

impl Recipe {
    /// Creates a recipe with no overrides and zero steps.
    pub fn new(preset: &str, scheme: &str, width: usize, height: usize, rng_seed: u64) -> Self {
        Self {
            preset: preset.to_string(),
            scheme: scheme.to_string(),
            width,
            height,
            seed_mode: "center-blob".to_string(),
            rng_seed,
            steps: 0,
            overrides: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates the grid dimensions: at least 3x3 (smaller grids have no
    /// interior cells) and no `usize` overflow.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width < 3 || self.height < 3 {
            return Err(SimError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.width
            .checked_mul(self.height)
            .ok_or(SimError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let r = Recipe::new("turing-spots", "thermal", 256, 256, 42);
        assert_eq!(r.preset, "turing-spots");
        assert_eq!(r.scheme, "thermal");
        assert_eq!(r.seed_mode, "center-blob");
        assert_eq!(r.steps, 0);
        assert_eq!(r.overrides, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip() {
        let mut r = Recipe::new("maze", "ocean", 128, 96, 7);
        r.steps = 500;
        r.overrides = serde_json::json!({"feed_rate": 0.03});
        let json = serde_json::to_string_pretty(&r).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(r, restored);
    }

    #[test]
    fn missing_overrides_key_deserializes() {
        let json = r#"{
            "preset": "fingerprint",
            "scheme": "purple",
            "width": 64,
            "height": 64,
            "seed_mode": "scatter",
            "rng_seed": 1,
            "steps": 10
        }"#;
        let r: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(r.preset, "fingerprint");
    }

    #[test]
    fn validate_rejects_grids_without_interior() {
        for (w, h) in [(0, 64), (64, 0), (2, 64), (64, 2)] {
            let r = Recipe::new("maze", "thermal", w, h, 1);
            assert!(r.validate().is_err(), "{w}x{h} should be rejected");
        }
    }

    #[test]
    fn validate_rejects_overflow() {
        let r = Recipe::new("maze", "thermal", usize::MAX, 2, 1);
        assert!(r.validate().is_err());
    }

    #[test]
    fn validate_accepts_minimum_grid() {
        assert!(Recipe::new("maze", "thermal", 3, 3, 1).validate().is_ok());
    }
}
