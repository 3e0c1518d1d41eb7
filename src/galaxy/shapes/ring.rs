//! RING: Poisson-disk sampling over an annulus, sized so its area
//! matches `gal_size^2 * 0.85` with `inner ~= 0.55 * outer`.

use crate::galaxy::poisson::poisson_disk;
use crate::galaxy::region::Annulus;
use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::{GenerationParameters, Point, MIN_PLANET_DISTANCE};

const INNER_TO_OUTER_RATIO: f64 = 0.55;

pub fn generate(params: &GenerationParameters, rng: &mut DeterministicRng) -> Vec<Point> {
    let gal_size = params.gal_size();
    let annulus_area = gal_size * gal_size * 0.85;
    let ratio_sq = INNER_TO_OUTER_RATIO * INNER_TO_OUTER_RATIO;
    let outer = (annulus_area / (std::f64::consts::PI * (1.0 - ratio_sq))).sqrt();
    let inner = INNER_TO_OUTER_RATIO * outer;

    let region = Annulus { center: Point::new(0.0, 0.0), inner, outer };
    poisson_disk(&region, MIN_PLANET_DISTANCE, params.n_planets as usize, rng, &[])
}
