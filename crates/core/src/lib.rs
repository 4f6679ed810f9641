#![deny(unsafe_code)]
//! Core types for the morphogen reaction-diffusion simulator.
//!
//! Provides the `Stepper` trait and `SeedMode` selector, the `Field` grid
//! type, `Params`/`Pointer` configuration, the preset catalog, `ColorScheme`
//! gradients, the Perlin `FlowField`, the `Xorshift64` PRNG, and `Recipe`
//! run descriptions.

pub mod error;
pub mod field;
pub mod flow;
pub mod gradient;
pub mod params;
pub mod preset;
pub mod prng;
pub mod recipe;
pub mod stepper;

pub use error::SimError;
pub use field::Field;
pub use flow::FlowField;
pub use gradient::{ColorScheme, Rgb};
pub use params::{Params, Pointer};
pub use prng::Xorshift64;
pub use recipe::Recipe;
pub use stepper::{SeedMode, Stepper};
