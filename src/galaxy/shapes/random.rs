//! RANDOM: Poisson-disk sampling over a square field.

use crate::galaxy::poisson::poisson_disk;
use crate::galaxy::region::Rectangle;
use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::{GenerationParameters, Point, MIN_PLANET_DISTANCE};

pub fn generate(params: &GenerationParameters, rng: &mut DeterministicRng) -> Vec<Point> {
    let side = params.gal_size() * 0.85;
    let region = Rectangle {
        center: Point::new(0.0, 0.0),
        width: side,
        height: side,
    };
    poisson_disk(&region, MIN_PLANET_DISTANCE, params.n_planets as usize, rng, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::Shape;

    #[test]
    fn e1_scenario_places_most_planets_with_valid_spacing() {
        let params = GenerationParameters {
            n_planets: 5,
            n_players: 1,
            density: 1.0,
            shape: Shape::Random,
            seed: 1,
        };
        let mut rng = DeterministicRng::new(params.seed, params.seed);
        let points = generate(&params, &mut rng);
        assert!(points.len() >= 4);
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert!(points[i].distance(&points[j]) >= MIN_PLANET_DISTANCE - 1e-6);
            }
        }
    }

    #[test]
    fn bounded_by_n_planets() {
        let params = GenerationParameters {
            n_planets: 100,
            n_players: 4,
            density: 0.5,
            shape: Shape::Random,
            seed: 77,
        };
        let mut rng = DeterministicRng::new(params.seed, params.seed);
        let points = generate(&params, &mut rng);
        assert!(points.len() <= 100);
    }
}
