//! Two-dimensional scalar field with edge-clipped coordinate access.
//!
//! A `Field` stores `width * height` f64 values in row-major layout
//! (`index = y * width + x`). Concentrations live in [0, 1]; `set` clamps
//! values into that range. Unlike a toroidal grid, coordinates never wrap:
//! the simulation uses a no-flux boundary, so out-of-range writes through
//! the `*_clipped` accessors are silently discarded rather than folded back
//! onto the opposite edge.

use crate::error::SimError;

/// A 2D scalar field with values clamped to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, SimError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field filled with `value`, clamped to [0, 1].
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, SimError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value.clamp(0.0, 1.0); len],
        })
    }

    /// Creates a field from a pre-built data vector, validating that
    /// `data.len() == width * height`.
    ///
    /// Values are **not** clamped; the caller is responsible for ensuring
    /// they lie in [0, 1].
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, SimError> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(SimError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn checked_len(width: usize, height: usize) -> Result<usize, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(SimError::InvalidDimensions { width, height })
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the underlying row-major data.
    ///
    /// Values written here bypass the [0, 1] clamping. The stepper hot path
    /// manages its own clamping and uses this for bulk copies.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} field",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Gets the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the field.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[self.offset(x, y)]
    }

    /// Sets the value at `(x, y)`, clamped to [0, 1].
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the field.
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let idx = self.offset(x, y);
        self.data[idx] = value.clamp(0.0, 1.0);
    }

    /// Returns true if the signed coordinate addresses a cell of this field.
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Sets the value at a signed coordinate, clamped to [0, 1].
    /// Out-of-range writes are discarded (edge-clipped, no wrapping).
    pub fn set_clipped(&mut self, x: isize, y: isize, value: f64) {
        if self.in_bounds(x, y) {
            self.set(x as usize, y as usize, value);
        }
    }

    /// Adds `delta` to the value at a signed coordinate, clamping the result
    /// to [0, 1]. Out-of-range writes are discarded.
    pub fn add_clipped(&mut self, x: isize, y: isize, delta: f64) {
        if self.in_bounds(x, y) {
            let idx = y as usize * self.width + x as usize;
            self.data[idx] = (self.data[idx] + delta).clamp(0.0, 1.0);
        }
    }
}
