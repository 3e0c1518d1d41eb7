//! SPIRAL: a four-phase deterministic construction — parameter draw,
//! core-radius refinement against a Fermat-spiral arc-length estimate,
//! per-arm band placement, and a core Poisson-disk fill seeded by the
//! arms so the core never encroaches on them.
//!
//! Arm placement happens before the core fill and its output is appended
//! first; reordering either phase changes which core candidates survive
//! and would break determinism (see the spec's design notes).

use crate::galaxy::grid::SpatialGrid;
use crate::galaxy::poisson::poisson_disk;
use crate::galaxy::region::Disk;
use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::{GenerationParameters, Point, MIN_PLANET_DISTANCE};

const ANGULAR_STEP: f64 = 0.1;
const BAND_HALF_WIDTH: f64 = 2.0;
const BAND_OFFSET_STEP: f64 = 1.0;
const REFINEMENT_ITERATIONS: u32 = 10;

/// `r(theta) = a * sqrt(theta)`, rotated by `arm_angle`.
fn fermat_point(a: f64, theta: f64, arm_angle: f64) -> Point {
    let r = a * theta.sqrt();
    let angle = theta + arm_angle;
    Point::new(r * angle.cos(), r * angle.sin())
}

/// Pythagorean approximation of the arc length between `theta_core` and
/// `theta_outer` along the Fermat spiral of coefficient `a`.
fn arc_length_estimate(a: f64, theta_core: f64, theta_outer: f64) -> f64 {
    let r_core = a * theta_core.sqrt();
    let r_outer = a * theta_outer.sqrt();
    let r_avg = (r_core + r_outer) / 2.0;
    let radial = r_outer - r_core;
    let angular = r_avg * (theta_outer - theta_core);
    (radial * radial + angular * angular).sqrt()
}

pub fn generate(params: &GenerationParameters, rng: &mut DeterministicRng) -> Vec<Point> {
    let n_planets = params.n_planets as f64;
    let n_players = params.n_players as f64;

    // Phase 1: parameter draw.
    let delta_theta = std::f64::consts::FRAC_PI_4
        + rng.next_double() * (std::f64::consts::PI - std::f64::consts::FRAC_PI_4);
    let a = 100.0 / delta_theta.sqrt();
    let ratio = 2.0 + rng.next_double() * 4.0;

    // Phase 2: sizing, refined against an arc-length planet estimate.
    let active_area = params.gal_size().powi(2);
    let mut core_radius = (active_area / std::f64::consts::PI).sqrt();

    for _ in 0..REFINEMENT_ITERATIONS {
        let theta_core = (core_radius / a).powi(2);
        let arc_length = arc_length_estimate(a, theta_core, delta_theta);
        let core_planets = (core_radius / MIN_PLANET_DISTANCE).powi(2);
        let planets_per_arm = arc_length / MIN_PLANET_DISTANCE;
        let estimated = core_planets + n_players * planets_per_arm;

        if estimated < 0.95 * n_planets {
            core_radius *= 1.05;
        } else if estimated > 1.05 * n_planets {
            core_radius *= 0.95;
        } else {
            break;
        }
    }

    let theta_core = (core_radius / a).powi(2);
    let theta_outer = delta_theta;
    let outer_arm_radius = core_radius * ratio;

    // Phase 3: walk each arm, banding candidates perpendicular to the
    // spiral tangent and accepting via the shared grid.
    // `r(theta) = a * sqrt(theta)` is increasing in theta, so the
    // farthest an arm point can land is at `theta_outer` — note this is
    // `a * sqrt(delta_theta) == 100.0` by construction (phase 1 picks `a`
    // as `100 / sqrt(delta_theta)`), independent of `core_radius`/`ratio`.
    // The grid extent has to cover whichever of the two is larger.
    let max_arm_radius = a * theta_outer.sqrt();
    let extent = outer_arm_radius.max(max_arm_radius) + BAND_HALF_WIDTH + MIN_PLANET_DISTANCE;
    let mut grid = SpatialGrid::new(MIN_PLANET_DISTANCE, extent);
    let mut arm_points: Vec<Point> = Vec::new();

    // Arm placement shares the overall `n_planets` budget with the core
    // fill — without this cap the arm walk alone can place far more than
    // `n_planets` points (the walk is driven by `theta`/band geometry,
    // not by a target count), which would break the output's bounded-size
    // invariant (I1/P5) before the core phase even runs.
    let target = params.n_planets as usize;

    let arm_angle_step = std::f64::consts::TAU / n_players;
    'arms: for arm_idx in 0..params.n_players {
        let arm_angle = arm_idx as f64 * arm_angle_step;
        let mut theta = theta_core;
        while theta <= theta_outer {
            let center = fermat_point(a, theta, arm_angle);
            let angle_perp = arm_angle + theta + std::f64::consts::FRAC_PI_2;

            let mut offset = -BAND_HALF_WIDTH;
            while offset <= BAND_HALF_WIDTH {
                if arm_points.len() >= target {
                    break 'arms;
                }
                let candidate = Point::new(
                    center.x + offset * angle_perp.cos(),
                    center.y + offset * angle_perp.sin(),
                );
                if grid.is_position_valid(candidate.x, candidate.y, MIN_PLANET_DISTANCE) {
                    grid.insert(candidate.x, candidate.y, arm_points.len());
                    arm_points.push(candidate);
                }
                offset += BAND_OFFSET_STEP;
            }
            theta += ANGULAR_STEP;
        }
    }

    // Phase 4: fill the core, seeded with the arm points so the sampler
    // doesn't encroach on them.
    let remaining = target.saturating_sub(arm_points.len());
    let core_region = Disk { center: Point::new(0.0, 0.0), radius: core_radius };
    let core_points = poisson_disk(&core_region, MIN_PLANET_DISTANCE, remaining, rng, &arm_points);

    let mut all_points = arm_points;
    all_points.extend(core_points);
    all_points
}
