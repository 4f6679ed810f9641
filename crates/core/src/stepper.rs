//! The `Stepper` contract shared by all simulation implementations.
//!
//! The trait is object-safe so a driver can hold `Box<dyn Stepper>` and
//! switch between realizations (a sequential reference stepper, a
//! data-parallel one) without caring which is behind the pointer.

use crate::error::SimError;
use crate::field::Field;
use crate::params::{Params, Pointer};

/// Initial field configuration selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Substrate everywhere, one centered square of activator.
    #[default]
    CenterBlob,
    /// Substrate everywhere, activator at a small fixed count of random
    /// cells.
    Scatter,
    /// Irregular nucleation: many random angle/radius sites biased toward
    /// the center, with randomized activator and slightly depleted
    /// substrate.
    OrganicRadial,
}

impl SeedMode {
    /// Looks up a mode by name (case insensitive).
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "center-blob" | "blob" => Ok(Self::CenterBlob),
            "scatter" => Ok(Self::Scatter),
            "organic" | "organic-radial" => Ok(Self::OrganicRadial),
            _ => Err(SimError::UnknownSeedMode(name.to_string())),
        }
    }

    /// Canonical name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::CenterBlob => "center-blob",
            Self::Scatter => "scatter",
            Self::OrganicRadial => "organic-radial",
        }
    }

    /// Canonical names of all modes.
    pub fn list() -> &'static [&'static str] {
        &["center-blob", "scatter", "organic-radial"]
    }
}

/// A discrete-time two-species simulation advancing one tick per call.
///
/// Implementations own the concentration buffers; parameters arrive fresh
/// on every call and no parameter history may be retained. The trait is
/// **object-safe**.
pub trait Stepper {
    /// Advances the simulation by one tick.
    ///
    /// `pointer` is this tick's interaction sample; implementations read it
    /// exactly once, at the start of the step. Invalid parameters surface
    /// as `SimError::InvalidParameter` before any cell is touched.
    fn step(&mut self, params: &Params, pointer: Option<Pointer>) -> Result<(), SimError>;

    /// The substrate (A) concentration field after the last completed tick.
    fn substrate(&self) -> &Field;

    /// The activator (B) concentration field after the last completed tick.
    fn activator(&self) -> &Field;

    /// Number of completed ticks since construction or the last reseed.
    fn tick(&self) -> u64;

    /// Discards the current state and reinitializes both fields.
    fn reseed(&mut self, mode: SeedMode, seed: u64) -> Result<(), SimError>;
}
