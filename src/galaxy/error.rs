//! The generator's error taxonomy. Unplaceable configurations are
//! deliberately absent from this enum: per the error-handling design, a
//! shape generator that exhausts its attempt budget returns whatever it
//! placed rather than failing, and the driver logs a warning.

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GalaxyError {
    #[error("n_planets must be between 5 and 500, got {0}")]
    InvalidPlanetCount(u32),

    #[error("n_players must be at least 1, got {0}")]
    InvalidPlayerCount(u32),

    #[error("density must be in (0.0, 1.0], got {0}")]
    InvalidDensity(f64),

    #[error("unknown galaxy shape discriminant {0}")]
    UnknownShape(i32),

    #[error("wedge {wedge} of {total} received no candidate planets for home selection")]
    EmptyWedge { wedge: usize, total: usize },

    #[error("internal invariant violation: {0}")]
    InvariantViolation(String),
}
