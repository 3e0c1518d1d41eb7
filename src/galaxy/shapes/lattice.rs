//! GRID: an axis-aligned lattice filling a `gal_size` square, jittered to
//! break visual symmetry while still honoring the minimum-spacing
//! invariant in the adversarial case (two neighbors jittering directly
//! toward each other).
//!
//! The jitter amplitude and the spacing-widening compensation are an
//! open question in the spec, resolved in `DESIGN.md`.

use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::{GenerationParameters, Point, MIN_PLANET_DISTANCE};

/// Less than `0.5 * MIN_PLANET_DISTANCE` per the spec's bare constraint;
/// widened lattice spacing (below) makes the adversarial worst case safe.
const JITTER_AMPLITUDE: f64 = 0.2 * MIN_PLANET_DISTANCE;

pub fn generate(params: &GenerationParameters, rng: &mut DeterministicRng) -> Vec<Point> {
    let n_planets = params.n_planets as usize;
    let side_count = (params.n_planets as f64).sqrt().ceil().max(1.0) as usize;
    let gal_size = params.gal_size();

    // Two lattice neighbors can jitter at most `2 * JITTER_AMPLITUDE`
    // closer together than their nominal spacing, so widen spacing enough
    // that the worst case still clears MIN_PLANET_DISTANCE.
    let spacing =
        (gal_size / side_count as f64).max(MIN_PLANET_DISTANCE + 2.0 * JITTER_AMPLITUDE);
    let half_extent = spacing * (side_count as f64 - 1.0) / 2.0;

    let mut points = Vec::with_capacity(n_planets);
    'fill: for i in 0..side_count {
        for j in 0..side_count {
            if points.len() >= n_planets {
                break 'fill;
            }
            let base_x = i as f64 * spacing - half_extent;
            let base_y = j as f64 * spacing - half_extent;
            let jitter_x = (rng.next_double() * 2.0 - 1.0) * JITTER_AMPLITUDE;
            let jitter_y = (rng.next_double() * 2.0 - 1.0) * JITTER_AMPLITUDE;
            points.push(Point::new(base_x + jitter_x, base_y + jitter_y));
        }
    }

    points
}
