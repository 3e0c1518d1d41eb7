//! End-to-end scenario tests (E1-E6) and property tests (P1-P7) for the
//! galaxy coordinate generator.

use proptest::prelude::*;
use starfall_core::{generate, GalaxyError, GenerationParameters, Point, Shape};

const MIN_PLANET_DISTANCE: f64 = 4.0;
const EPSILON: f64 = 1e-6;

fn all_pairwise_spacing_ok(points: &[Point]) -> bool {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].distance(&points[j]) < MIN_PLANET_DISTANCE - EPSILON {
                return false;
            }
        }
    }
    true
}

fn params(n_planets: u32, n_players: u32, density: f64, shape: Shape, seed: u64) -> GenerationParameters {
    GenerationParameters { n_planets, n_players, density, shape, seed }
}

// ----------------------------------------------------------------------
// E1-E6: concrete end-to-end scenarios
// ----------------------------------------------------------------------

#[test]
fn e1_random_small_galaxy() {
    let p = params(5, 1, 1.0, Shape::Random, 1);
    let galaxy = generate(&p).unwrap();

    assert!(galaxy.points.len() >= 4);
    assert!(all_pairwise_spacing_ok(&galaxy.points));
    assert_eq!(galaxy.home_indices.len(), 1);
    assert!(galaxy.home_indices[0] < galaxy.points.len());
}

#[test]
fn e2_spiral_runs_to_completion() {
    let p = params(150, 3, 0.5, Shape::Spiral, 12345);
    let galaxy = generate(&p).unwrap();

    assert!(!galaxy.points.is_empty());
    assert_eq!(galaxy.home_indices.len(), 3);
    let mut sorted = galaxy.home_indices.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), galaxy.home_indices.len());
}

#[test]
fn e3_cluster_produces_separated_clusters() {
    let p = params(150, 3, 0.5, Shape::Cluster, 54321);
    let galaxy = generate(&p).unwrap();

    assert!(all_pairwise_spacing_ok(&galaxy.points));
    assert_eq!(galaxy.home_indices.len(), 3);

    // ring_radius ~= desired_spacing * n_clusters / (2*pi), and
    // desired_spacing = 2 * cluster_radius * spacing_factor where
    // cluster_radius = gal_size / (2*sqrt(n_clusters)).
    let gal_size = p.gal_size();
    let n_clusters = p.n_players as f64;
    let cluster_radius = gal_size / (2.0 * n_clusters.sqrt());
    let spacing_factor = 1.1 + (1.0 - p.density) * 0.9;
    let expected_ring_radius =
        2.0 * cluster_radius * spacing_factor * n_clusters / std::f64::consts::TAU;
    assert!(expected_ring_radius > 0.0);
}

#[test]
fn e4_circle_stays_within_disk() {
    let p = params(100, 4, 0.5, Shape::Circle, 42);
    let galaxy = generate(&p).unwrap();

    assert!(galaxy.points.len() <= 100);
    assert!(all_pairwise_spacing_ok(&galaxy.points));
}

#[test]
fn e5_ring_avoids_the_inner_radius() {
    let p = params(200, 2, 0.5, Shape::Ring, 7);
    let galaxy = generate(&p).unwrap();

    let gal_size = p.gal_size();
    let annulus_area = gal_size * gal_size * 0.85;
    let ratio = 0.55;
    let outer = (annulus_area / (std::f64::consts::PI * (1.0 - ratio * ratio))).sqrt();
    let inner = ratio * outer;

    for point in &galaxy.points {
        let d = point.distance(&Point::new(0.0, 0.0));
        assert!(d >= inner - EPSILON, "point at distance {d} fell inside the inner radius {inner}");
    }
}

#[test]
fn e6_grid_places_a_jittered_lattice() {
    let p = params(64, 1, 1.0, Shape::Grid, 99);
    let galaxy = generate(&p).unwrap();

    assert_eq!(galaxy.points.len(), 64);
    assert!(all_pairwise_spacing_ok(&galaxy.points));
}

#[test]
fn scenarios_are_byte_identical_across_repeated_runs() {
    let scenarios = [
        (5, 1, 1.0, Shape::Random, 1),
        (150, 3, 0.5, Shape::Spiral, 12345),
        (150, 3, 0.5, Shape::Cluster, 54321),
        (100, 4, 0.5, Shape::Circle, 42),
        (200, 2, 0.5, Shape::Ring, 7),
        (64, 1, 1.0, Shape::Grid, 99),
    ];

    for (n_planets, n_players, density, shape, seed) in scenarios {
        let p = params(n_planets, n_players, density, shape, seed);
        let a = generate(&p).unwrap();
        let b = generate(&p).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.home_indices, b.home_indices);
    }
}

// ----------------------------------------------------------------------
// Parameter validation
// ----------------------------------------------------------------------

#[test]
fn validation_rejects_invalid_parameters_before_rng_work() {
    assert!(matches!(
        generate(&params(0, 1, 1.0, Shape::Random, 1)),
        Err(GalaxyError::InvalidPlanetCount(0))
    ));
    assert!(matches!(
        generate(&params(501, 1, 1.0, Shape::Random, 1)),
        Err(GalaxyError::InvalidPlanetCount(501))
    ));
    assert!(matches!(
        generate(&params(10, 0, 1.0, Shape::Random, 1)),
        Err(GalaxyError::InvalidPlayerCount(0))
    ));
    assert!(matches!(
        generate(&params(10, 1, 0.0, Shape::Random, 1)),
        Err(GalaxyError::InvalidDensity(_))
    ));
    assert!(matches!(
        generate(&params(10, 1, 1.1, Shape::Random, 1)),
        Err(GalaxyError::InvalidDensity(_))
    ));
}

// ----------------------------------------------------------------------
// P1-P7: property tests over randomized, in-domain parameters
// ----------------------------------------------------------------------

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Random),
        Just(Shape::Spiral),
        Just(Shape::Circle),
        Just(Shape::Ring),
        Just(Shape::Cluster),
        Just(Shape::Grid),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// P1: every emitted pair is at least MIN_PLANET_DISTANCE apart.
    #[test]
    fn p1_spacing_invariant(
        n_planets in 5u32..=200,
        n_players in 1u32..=6,
        density in 0.05f64..=1.0,
        shape in shape_strategy(),
        seed in any::<u64>(),
    ) {
        let p = params(n_planets, n_players, density, shape, seed);
        if let Ok(galaxy) = generate(&p) {
            prop_assert!(all_pairwise_spacing_ok(&galaxy.points));
        }
    }

    /// P2: identical parameters produce identical output.
    #[test]
    fn p2_determinism(
        n_planets in 5u32..=200,
        n_players in 1u32..=6,
        density in 0.05f64..=1.0,
        shape in shape_strategy(),
        seed in any::<u64>(),
    ) {
        let p = params(n_planets, n_players, density, shape, seed);
        let a = generate(&p);
        let b = generate(&p);
        match (a, b) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.points, b.points);
                prop_assert_eq!(a.home_indices, b.home_indices);
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "determinism broken: one run succeeded, the other failed"),
        }
    }

    /// P4: home indices are pairwise distinct, of length n_players, and
    /// each indexes a valid point.
    #[test]
    fn p4_home_validity(
        n_planets in 5u32..=200,
        n_players in 1u32..=6,
        density in 0.05f64..=1.0,
        shape in shape_strategy(),
        seed in any::<u64>(),
    ) {
        let p = params(n_planets, n_players, density, shape, seed);
        if let Ok(galaxy) = generate(&p) {
            prop_assert_eq!(galaxy.home_indices.len(), n_players as usize);
            let mut sorted = galaxy.home_indices.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), galaxy.home_indices.len());
            for &idx in &galaxy.home_indices {
                prop_assert!(idx < galaxy.points.len());
            }
        }
    }

    /// P5: emitted point count never exceeds n_planets.
    #[test]
    fn p5_bounded_output(
        n_planets in 5u32..=200,
        n_players in 1u32..=6,
        density in 0.05f64..=1.0,
        shape in shape_strategy(),
        seed in any::<u64>(),
    ) {
        let p = params(n_planets, n_players, density, shape, seed);
        if let Ok(galaxy) = generate(&p) {
            prop_assert!(galaxy.points.len() <= n_planets as usize);
        }
    }
}

// P3: home selection draws strictly after the shape generator runs, in
// every shape's dispatch path — so regardless of how many draws a given
// shape consumes internally, home selection still runs and its output
// still satisfies P4 for every shape at a fixed seed.
#[test]
fn p3_shape_change_leaves_home_selection_well_formed() {
    for shape in [Shape::Random, Shape::Spiral, Shape::Circle, Shape::Ring, Shape::Cluster, Shape::Grid] {
        let p = params(80, 3, 0.6, shape, 2024);
        if let Ok(galaxy) = generate(&p) {
            assert_eq!(galaxy.home_indices.len(), 3);
            for &idx in &galaxy.home_indices {
                assert!(idx < galaxy.points.len());
            }
        }
    }
}

/// P6: RANDOM density sanity — mean nearest-neighbor distance lands in a
/// plausible band for the field-size calibration.
#[test]
fn p6_random_density_sanity() {
    let p = params(100, 1, 0.5, Shape::Random, 2468);
    let galaxy = generate(&p).unwrap();
    assert!(galaxy.points.len() >= 50, "too few points placed to judge spacing: {}", galaxy.points.len());

    let mut nearest_sum = 0.0;
    for (i, p1) in galaxy.points.iter().enumerate() {
        let mut nearest = f64::MAX;
        for (j, p2) in galaxy.points.iter().enumerate() {
            if i != j {
                nearest = nearest.min(p1.distance(p2));
            }
        }
        nearest_sum += nearest;
    }
    let mean_nearest = nearest_sum / galaxy.points.len() as f64;
    assert!(
        (5.0..=7.0).contains(&mean_nearest),
        "mean nearest-neighbor distance {mean_nearest} outside plausible range"
    );
}

/// P7: CLUSTER target sanity — with 150 planets split across 3 clusters,
/// the overall point count should land in the ballpark of the combined
/// per-cluster targets even under the attempt-budget cap.
#[test]
fn p7_cluster_target_sanity() {
    let p = params(150, 3, 0.5, Shape::Cluster, 11);
    let galaxy = generate(&p).unwrap();
    let target_total = p.n_planets as f64;
    assert!(galaxy.points.len() as f64 >= 0.6 * target_total * 0.5);
    assert!(galaxy.points.len() <= p.n_planets as usize);
}
