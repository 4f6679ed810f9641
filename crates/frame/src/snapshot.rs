//! PNG snapshot of a concentration pair.
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! raw RGBA path can drop the `image` dependency.

use morphogen_core::{ColorScheme, Field, SimError};
use std::path::Path;

use crate::pixel::colorize_fields;

/// Writes the (A, B) pair as a PNG image through the given scheme.
///
/// Returns `SimError::InvalidDimensions` if the field extents overflow
/// `u32`, or `SimError::Io` on encode/write failure.
pub fn write_png(
    a: &Field,
    b: &Field,
    scheme: &ColorScheme,
    path: &Path,
) -> Result<(), SimError> {
    let rgba = colorize_fields(a, b, scheme)?;
    let w = u32::try_from(a.width()).map_err(|_| SimError::InvalidDimensions {
        width: a.width(),
        height: a.height(),
    })?;
    let h = u32::try_from(a.height()).map_err(|_| SimError::InvalidDimensions {
        width: a.width(),
        height: a.height(),
    })?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_png_round_trip() {
        let a = Field::filled(16, 12, 1.0).unwrap();
        let b = Field::new(16, 12).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&a, &b, &ColorScheme::thermal(), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 12);
        // Full substrate maps to the top stop of thermal: white.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn write_png_propagates_mismatch() {
        let a = Field::new(8, 8).unwrap();
        let b = Field::new(8, 9).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        assert!(write_png(&a, &b, &ColorScheme::ocean(), &path).is_err());
    }
}
