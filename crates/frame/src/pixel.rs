//! Pure-computation RGBA conversion from a concentration pair.
//!
//! Always available (no feature gate) so the PNG snapshot path and any
//! embedding surface share the same conversion.

use morphogen_core::{ColorScheme, Field, SimError};

/// Maps an (A, B) field pair through a color scheme to an RGBA8 buffer.
///
/// Each cell contributes four bytes (R, G, B, 255) in row-major order, so
/// the buffer length is `width * height * 4`. Returns
/// `SimError::DimensionMismatch` if the fields disagree in size.
pub fn colorize_fields(a: &Field, b: &Field, scheme: &ColorScheme) -> Result<Vec<u8>, SimError> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(SimError::DimensionMismatch {
            lhs_w: a.width(),
            lhs_h: a.height(),
            rhs_w: b.width(),
            rhs_h: b.height(),
        });
    }
    let mut out = Vec::with_capacity(a.data().len() * 4);
    for (&av, &bv) in a.data().iter().zip(b.data().iter()) {
        let c = scheme.colorize(av, bv);
        out.extend_from_slice(&[c.r, c.g, c.b, u8::MAX]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_has_four_bytes_per_cell() {
        let a = Field::new(8, 4).unwrap();
        let b = Field::new(8, 4).unwrap();
        let buf = colorize_fields(&a, &b, &ColorScheme::thermal()).unwrap();
        assert_eq!(buf.len(), 8 * 4 * 4);
    }

    #[test]
    fn alpha_is_always_opaque() {
        let a = Field::filled(4, 4, 0.6).unwrap();
        let b = Field::filled(4, 4, 0.2).unwrap();
        let buf = colorize_fields(&a, &b, &ColorScheme::ocean()).unwrap();
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {}", i / 4);
            }
        }
    }

    #[test]
    fn substrate_bath_renders_as_the_last_stop() {
        // a = 1, b = 0 maps to the top of the gradient: white for thermal.
        let a = Field::filled(2, 2, 1.0).unwrap();
        let b = Field::new(2, 2).unwrap();
        let buf = colorize_fields(&a, &b, &ColorScheme::thermal()).unwrap();
        assert_eq!(&buf[0..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn activator_spike_renders_as_the_first_stop() {
        let a = Field::new(2, 2).unwrap();
        let b = Field::filled(2, 2, 1.0).unwrap();
        let buf = colorize_fields(&a, &b, &ColorScheme::thermal()).unwrap();
        assert_eq!(&buf[0..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn mismatched_fields_are_rejected() {
        let a = Field::new(4, 4).unwrap();
        let b = Field::new(4, 5).unwrap();
        assert!(matches!(
            colorize_fields(&a, &b, &ColorScheme::thermal()),
            Err(SimError::DimensionMismatch { .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn length_is_always_w_h_4(w in 1_usize..=32, h in 1_usize..=32) {
                let a = Field::new(w, h).unwrap();
                let b = Field::new(w, h).unwrap();
                let buf = colorize_fields(&a, &b, &ColorScheme::purple()).unwrap();
                prop_assert_eq!(buf.len(), w * h * 4);
            }
        }
    }
}
