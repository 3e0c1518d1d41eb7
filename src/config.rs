//! Configuration module
//!
//! Supplies the CLI's fallback generation parameters when a flag is not
//! given on the command line. The minimum-planet-distance constant stays
//! compiled into `galaxy` rather than living here — it is not meant to be
//! tunable by a config file.

use crate::galaxy::Shape;
use serde::{Deserialize, Serialize};

/// Fallback generation parameters, loaded from a YAML file or used as-is
/// via [`GenerationDefaults::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationDefaults {
    pub n_planets: u32,
    pub n_players: u32,
    pub density: f64,
    pub shape: Shape,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        GenerationDefaults {
            n_planets: 100,
            n_players: 4,
            density: 0.5,
            shape: Shape::Random,
        }
    }
}
