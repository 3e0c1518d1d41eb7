//! CLUSTER: one cluster disk per player, arranged on a ring around the
//! origin, each filled by direct region-uniform rejection sampling
//! (no Bridson active-list growth).

use crate::galaxy::grid::SpatialGrid;
use crate::galaxy::poisson::rejection_sample;
use crate::galaxy::region::Disk;
use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::{GenerationParameters, Point, MIN_PLANET_DISTANCE};

pub fn generate(params: &GenerationParameters, rng: &mut DeterministicRng) -> Vec<Point> {
    let n_clusters = params.n_players as usize;
    let gal_size = params.gal_size();

    let cluster_radius = gal_size / (2.0 * (n_clusters as f64).sqrt());
    let spacing_factor = 1.1 + (1.0 - params.density) * 0.9;
    let desired_spacing = 2.0 * cluster_radius * spacing_factor;
    let ring_radius = desired_spacing * n_clusters as f64 / std::f64::consts::TAU;

    let base_target = params.n_planets as usize / n_clusters;
    let remainder = params.n_planets as usize % n_clusters;

    let extent = ring_radius + cluster_radius + MIN_PLANET_DISTANCE;
    let mut grid = SpatialGrid::new(MIN_PLANET_DISTANCE, extent);
    let mut points = Vec::new();

    for k in 0..n_clusters {
        let target = base_target + if k < remainder { 1 } else { 0 };
        let angle = std::f64::consts::TAU * k as f64 / n_clusters as f64;
        let center = Point::new(ring_radius * angle.cos(), ring_radius * angle.sin());
        let region = Disk { center, radius: cluster_radius };

        let attempt_budget = (target * 10).max(1) as u32;
        let mut placed_in_cluster = 0;
        while placed_in_cluster < target {
            let remaining_attempts = attempt_budget.saturating_sub(placed_in_cluster as u32 * 10);
            match rejection_sample(&region, &grid, MIN_PLANET_DISTANCE, rng, remaining_attempts.max(1)) {
                Some(p) => {
                    grid.insert(p.x, p.y, points.len());
                    points.push(p);
                    placed_in_cluster += 1;
                }
                None => break,
            }
        }
    }

    points
}
