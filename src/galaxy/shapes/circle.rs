//! CIRCLE: Poisson-disk sampling over a single disk sized so the
//! expected area per planet matches `gal_size^2 / n_planets`.

use crate::galaxy::poisson::poisson_disk;
use crate::galaxy::region::Disk;
use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::{GenerationParameters, Point, MIN_PLANET_DISTANCE};

pub fn generate(params: &GenerationParameters, rng: &mut DeterministicRng) -> Vec<Point> {
    let gal_size = params.gal_size();
    let area_per_planet = gal_size * gal_size / params.n_planets as f64;
    let disk_area = params.n_planets as f64 * area_per_planet;
    let radius = (disk_area / std::f64::consts::PI).sqrt();

    let region = Disk { center: Point::new(0.0, 0.0), radius };
    poisson_disk(&region, MIN_PLANET_DISTANCE, params.n_planets as usize, rng, &[])
}
