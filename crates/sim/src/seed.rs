//! Initial field configurations.
//!
//! Every mode starts from a full substrate bath (A = 1) and differs only in
//! where and how strongly the activator B is injected. No mode reads prior
//! field state; determinism comes entirely from the injected PRNG.

use morphogen_core::{Field, SeedMode, SimError, Xorshift64};

/// Nucleation sites placed by [`SeedMode::Scatter`].
const SCATTER_SITES: usize = 10;
/// Fraction of total cells sampled by [`SeedMode::OrganicRadial`].
const ORGANIC_DENSITY: f64 = 0.10;
/// Substrate level written at organic nucleation sites.
const ORGANIC_SUBSTRATE: f64 = 0.95;
/// Divisor of the shorter grid edge for the center blob side length.
const BLOB_DIVISOR: usize = 10;
/// Smallest center blob side length in cells.
const BLOB_MIN_SIDE: usize = 2;

/// Produces the initial (A, B) configuration for a grid.
///
/// Returns `SimError::InvalidDimensions` for zero or overflowing
/// dimensions.
pub fn seed_fields(
    width: usize,
    height: usize,
    mode: SeedMode,
    rng: &mut Xorshift64,
) -> Result<(Field, Field), SimError> {
    let mut a = Field::filled(width, height, 1.0)?;
    let mut b = Field::new(width, height)?;
    match mode {
        SeedMode::CenterBlob => center_blob(&mut b),
        SeedMode::Scatter => scatter(&mut b, rng),
        SeedMode::OrganicRadial => organic_radial(&mut a, &mut b, rng),
    }
    Ok((a, b))
}

/// One centered square of B = 1, side scaled to the shorter grid edge.
fn center_blob(b: &mut Field) {
    let side = (b.width().min(b.height()) / BLOB_DIVISOR).max(BLOB_MIN_SIDE);
    let side = side.min(b.width()).min(b.height());
    let x0 = (b.width() - side) / 2;
    let y0 = (b.height() - side) / 2;
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            b.set(x, y, 1.0);
        }
    }
}

/// B = 1 at a small fixed count of uniformly random cells. Collisions are
/// allowed, so fewer than [`SCATTER_SITES`] distinct cells may result.
fn scatter(b: &mut Field, rng: &mut Xorshift64) {
    for _ in 0..SCATTER_SITES {
        let x = rng.next_usize(b.width());
        let y = rng.next_usize(b.height());
        b.set(x, y, 1.0);
    }
}

/// Random angle/radius sites biased toward the center, with randomized
/// activator and slightly depleted substrate at each site.
fn organic_radial(a: &mut Field, b: &mut Field, rng: &mut Xorshift64) {
    let (w, h) = (a.width(), a.height());
    let count = ((w * h) as f64 * ORGANIC_DENSITY).ceil() as usize;
    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;
    let max_r = cx.min(cy);
    for _ in 0..count {
        let angle = rng.next_range(0.0, std::f64::consts::TAU);
        // Product of two uniforms biases the radius toward the center.
        let radius = max_r * rng.next_f64() * rng.next_f64();
        let x = (cx + radius * angle.cos()).floor() as isize;
        let y = (cy + radius * angle.sin()).floor() as isize;
        let activator = rng.next_f64();
        b.set_clipped(x, y, activator);
        a.set_clipped(x, y, ORGANIC_SUBSTRATE);
    }
}
