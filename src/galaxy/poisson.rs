//! Bridson-style Poisson-disk sampling and plain region-uniform rejection
//! sampling, the two acceptance strategies the shape generators build on.

use crate::galaxy::grid::SpatialGrid;
use crate::galaxy::region::Region;
use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::Point;

/// Bridson's fixed per-active-point attempt cap.
const BRIDSON_ATTEMPTS: u32 = 30;

/// Dart-throws within `region`, honoring `min_dist` against both `seeds`
/// (pre-existing points that block candidates but are never themselves
/// emitted) and points generated during this call. Terminates when
/// `max_points` new points have been emitted, the active list empties, or
/// the per-point attempt cap is exhausted — whichever comes first.
pub fn poisson_disk(
    region: &dyn Region,
    min_dist: f64,
    max_points: usize,
    rng: &mut DeterministicRng,
    seeds: &[Point],
) -> Vec<Point> {
    let (min_corner, max_corner) = region.bounding_box();
    let extent = min_corner
        .x
        .abs()
        .max(min_corner.y.abs())
        .max(max_corner.x.abs())
        .max(max_corner.y.abs())
        + min_dist;
    let mut grid = SpatialGrid::new(min_dist, extent);

    for (i, &seed) in seeds.iter().enumerate() {
        grid.insert(seed.x, seed.y, i);
    }

    let mut samples: Vec<Point> = Vec::new();
    let mut active: Vec<usize> = Vec::new();

    if max_points == 0 {
        return samples;
    }

    // Seed the active list with one region-uniform point.
    if let Some(first) = rejection_sample(region, &grid, min_dist, rng, 1000) {
        grid.insert(first.x, first.y, seeds.len());
        samples.push(first);
        active.push(0);
    } else {
        return samples;
    }

    while !active.is_empty() && samples.len() < max_points {
        let pick = rng.next_int_range(0, active.len() as i64 - 1) as usize;
        let base = samples[active[pick]];
        let mut placed = false;

        for _ in 0..BRIDSON_ATTEMPTS {
            let angle = rng.next_double() * std::f64::consts::TAU;
            // Candidates are drawn from the annulus [min_dist, 2*min_dist).
            // Sampling `dist` linearly in r biases toward the inner edge,
            // since area grows with r; solving for r with r^2 uniform over
            // [min_dist^2, 4*min_dist^2] keeps density uniform across the
            // annulus, matching Bridson's construction.
            let dist = (min_dist * min_dist * (1.0 + 3.0 * rng.next_double())).sqrt();
            let candidate = Point::new(base.x + dist * angle.cos(), base.y + dist * angle.sin());

            if !region.contains(candidate) {
                continue;
            }
            if !grid.is_position_valid(candidate.x, candidate.y, min_dist) {
                continue;
            }

            let id = seeds.len() + samples.len();
            grid.insert(candidate.x, candidate.y, id);
            samples.push(candidate);
            active.push(samples.len() - 1);
            placed = true;

            if samples.len() >= max_points {
                break;
            }
        }

        if !placed {
            active.swap_remove(pick);
        }
    }

    samples
}

/// Plain rejection sampling directly from `region`, with no annulus
/// attraction — used where a shape needs region-uniform placement rather
/// than Bridson's active-list growth (the CLUSTER shape).
pub fn rejection_sample(
    region: &dyn Region,
    grid: &SpatialGrid,
    min_dist: f64,
    rng: &mut DeterministicRng,
    max_attempts: u32,
) -> Option<Point> {
    for _ in 0..max_attempts {
        let candidate = region.sample_uniform(rng);
        if grid.is_position_valid(candidate.x, candidate.y, min_dist) {
            return Some(candidate);
        }
    }
    None
}
