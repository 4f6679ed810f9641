//! Error types for the morphogen core.

use thiserror::Error;

/// Errors produced by simulation and rendering operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// Grid dimensions were zero, overflowed addressable memory, or were
    /// too small to contain any interior cells.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Two fields had incompatible dimensions for a paired operation.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A numeric parameter was NaN, non-finite, or outside its allowed range.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter { name: String, value: f64 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color scheme could not be constructed from the given stops.
    #[error("invalid color scheme: {0}")]
    InvalidScheme(String),

    /// A preset name was not found in the catalog.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A color scheme name was not found in the catalog.
    #[error("unknown color scheme: {0}")]
    UnknownScheme(String),

    /// A seeding mode name was not recognized.
    #[error("unknown seed mode: {0}")]
    UnknownSeedMode(String),

    /// An I/O failure while writing a snapshot or reading a recipe.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_names_both_extents() {
        let err = SimError::InvalidDimensions {
            width: 0,
            height: 128,
        };
        let msg = format!("{err}");
        assert!(msg.contains('0') && msg.contains("128"), "got: {msg}");
    }

    #[test]
    fn dimension_mismatch_includes_all_four_extents() {
        let err = SimError::DimensionMismatch {
            lhs_w: 10,
            lhs_h: 20,
            rhs_w: 30,
            rhs_h: 40,
        };
        let msg = format!("{err}");
        for part in ["10", "20", "30", "40"] {
            assert!(msg.contains(part), "missing {part} in: {msg}");
        }
    }

    #[test]
    fn invalid_parameter_names_the_offender() {
        let err = SimError::InvalidParameter {
            name: "diffusion_a".into(),
            value: f64::NAN,
        };
        let msg = format!("{err}");
        assert!(msg.contains("diffusion_a"), "got: {msg}");
        assert!(msg.contains("NaN"), "got: {msg}");
    }

    #[test]
    fn catalog_errors_echo_the_requested_name() {
        let preset = SimError::UnknownPreset("zebra".into());
        assert!(format!("{preset}").contains("zebra"));
        let scheme = SimError::UnknownScheme("lava".into());
        assert!(format!("{scheme}").contains("lava"));
        let mode = SimError::UnknownSeedMode("spiral".into());
        assert!(format!("{mode}").contains("spiral"));
    }

    #[test]
    fn sim_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimError>();
    }

    #[test]
    fn sim_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<SimError>();
    }
}
