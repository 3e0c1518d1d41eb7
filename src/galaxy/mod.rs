//! Deterministic galaxy coordinate generation.
//!
//! This is the core of the crate: given high-level parameters (planet
//! count, player count, density, shape, seed) it produces an ordered
//! sequence of planet positions and a set of home-planet indices, as a
//! pure function of its inputs. See the shape submodules for the
//! per-shape algorithms and `home` for the player-home assignment.

pub mod error;
pub mod grid;
pub mod home;
pub mod poisson;
pub mod region;
pub mod rng;
pub mod shapes;

use serde::{Deserialize, Serialize};

pub use error::GalaxyError;
use rng::DeterministicRng;

/// Fixed minimum pairwise separation between any two emitted planets.
/// Compiled in, per the external-interface contract — not configurable.
pub const MIN_PLANET_DISTANCE: f64 = 4.0;

/// An ordered pair of coordinates. Has no identity beyond position; a
/// point's meaning beyond its own coordinates is carried entirely by its
/// position in a `GeneratedGalaxy`'s point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::Vector2::new(self.x - other.x, self.y - other.y).norm()
    }

    /// Polar angle about the origin, normalized to `[0, 2*PI)`.
    pub fn angle_from_origin(&self) -> f64 {
        let mut a = self.y.atan2(self.x);
        if a < 0.0 {
            a += std::f64::consts::TAU;
        }
        a
    }
}

/// The six supported spatial layouts. Discriminants are fixed to match
/// the external binding layer's C-ABI enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum Shape {
    Random = 0,
    Spiral = 1,
    Circle = 2,
    Ring = 3,
    Cluster = 4,
    Grid = 5,
}

impl std::convert::TryFrom<i32> for Shape {
    type Error = GalaxyError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Shape::Random),
            1 => Ok(Shape::Spiral),
            2 => Ok(Shape::Circle),
            3 => Ok(Shape::Ring),
            4 => Ok(Shape::Cluster),
            5 => Ok(Shape::Grid),
            other => Err(GalaxyError::UnknownShape(other)),
        }
    }
}

impl std::str::FromStr for Shape {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RANDOM" => Ok(Shape::Random),
            "SPIRAL" => Ok(Shape::Spiral),
            "CIRCLE" => Ok(Shape::Circle),
            "RING" => Ok(Shape::Ring),
            "CLUSTER" => Ok(Shape::Cluster),
            "GRID" => Ok(Shape::Grid),
            _ => Err(GalaxyError::UnknownShape(-1)),
        }
    }
}

/// Immutable generation input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub n_planets: u32,
    pub n_players: u32,
    pub density: f64,
    pub shape: Shape,
    pub seed: u64,
}

impl GenerationParameters {
    /// Validates before any RNG work is performed, per the external
    /// interface contract.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.n_planets < 5 || self.n_planets > 500 {
            return Err(GalaxyError::InvalidPlanetCount(self.n_planets));
        }
        if self.n_players == 0 {
            return Err(GalaxyError::InvalidPlayerCount(self.n_players));
        }
        if self.density <= 0.0 || self.density > 1.0 {
            return Err(GalaxyError::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// The derived field extent shared by every shape generator.
    pub fn gal_size(&self) -> f64 {
        (self.n_planets as f64).sqrt() * (5.0 + 6.4 / self.density)
    }
}

/// Generation output: the ordered point sequence (length may be less than
/// `n_planets` when an attempt budget is exhausted) plus one home index
/// per player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedGalaxy {
    pub points: Vec<Point>,
    pub home_indices: Vec<usize>,
}

/// Runs the full pipeline: validate, construct the RNG, dispatch to the
/// chosen shape generator, select homes, assemble the result.
///
/// RNG draws happen in a fixed lexical order — shape dispatch first, home
/// selection last — so that varying only the shape still produces
/// reproducible results for every other shape (P3).
pub fn generate(params: &GenerationParameters) -> Result<GeneratedGalaxy, GalaxyError> {
    params.validate()?;
    log::info!(
        "generating galaxy: shape={:?} n_planets={} n_players={} density={} seed={}",
        params.shape,
        params.n_planets,
        params.n_players,
        params.density,
        params.seed
    );

    let mut rng = DeterministicRng::new(params.seed, params.seed);

    let points = match params.shape {
        Shape::Random => shapes::random::generate(params, &mut rng),
        Shape::Spiral => shapes::spiral::generate(params, &mut rng),
        Shape::Circle => shapes::circle::generate(params, &mut rng),
        Shape::Ring => shapes::ring::generate(params, &mut rng),
        Shape::Cluster => shapes::cluster::generate(params, &mut rng),
        Shape::Grid => shapes::lattice::generate(params, &mut rng),
    };

    if points.len() < params.n_planets as usize {
        log::warn!(
            "unplaceable configuration: placed {} of {} requested planets",
            points.len(),
            params.n_planets
        );
    }

    let home_indices = home::select_homes(&points, params.n_players as usize, &mut rng)?;

    log::info!(
        "generation complete: {} points, {} homes",
        points.len(),
        home_indices.len()
    );

    Ok(GeneratedGalaxy { points, home_indices })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(shape: Shape, seed: u64) -> GenerationParameters {
        GenerationParameters {
            n_planets: 5,
            n_players: 1,
            density: 1.0,
            shape,
            seed,
        }
    }

    #[test]
    fn rejects_zero_planets() {
        let p = params(Shape::Random, 1);
        let p = GenerationParameters { n_planets: 0, ..p };
        assert!(matches!(p.validate(), Err(GalaxyError::InvalidPlanetCount(0))));
    }

    #[test]
    fn rejects_below_minimum_planet_count() {
        let p = GenerationParameters { n_planets: 4, ..params(Shape::Random, 1) };
        assert!(matches!(p.validate(), Err(GalaxyError::InvalidPlanetCount(4))));
        let p = GenerationParameters { n_planets: 5, ..params(Shape::Random, 1) };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_too_many_planets() {
        let p = GenerationParameters { n_planets: 501, ..params(Shape::Random, 1) };
        assert!(matches!(p.validate(), Err(GalaxyError::InvalidPlanetCount(501))));
    }

    #[test]
    fn rejects_zero_players() {
        let p = GenerationParameters { n_players: 0, ..params(Shape::Random, 1) };
        assert!(matches!(p.validate(), Err(GalaxyError::InvalidPlayerCount(0))));
    }

    #[test]
    fn rejects_bad_density() {
        let p = GenerationParameters { density: 0.0, ..params(Shape::Random, 1) };
        assert!(matches!(p.validate(), Err(GalaxyError::InvalidDensity(_))));
        let p = GenerationParameters { density: 1.5, ..params(Shape::Random, 1) };
        assert!(matches!(p.validate(), Err(GalaxyError::InvalidDensity(_))));
    }

    #[test]
    fn shape_from_str_accepts_known_names() {
        assert_eq!("circle".parse::<Shape>().unwrap(), Shape::Circle);
        assert_eq!("GRID".parse::<Shape>().unwrap(), Shape::Grid);
        assert!("nonsense".parse::<Shape>().is_err());
    }

    #[test]
    fn generate_is_deterministic() {
        let p = params(Shape::Random, 1234);
        let a = generate(&p).unwrap();
        let b = generate(&p).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.home_indices, b.home_indices);
    }

    #[test]
    fn generate_validates_before_rng_work() {
        let p = GenerationParameters { n_planets: 0, ..params(Shape::Random, 1) };
        assert!(generate(&p).is_err());
    }
}
