//! starfall-core
//!
//! Deterministic galaxy coordinate generation for a turn-based
//! space-strategy game. `galaxy` is the crate's core: given high-level
//! parameters (planet count, player count, density, shape, seed) it
//! produces an ordered point sequence and a set of home-planet indices as
//! a pure function of its inputs. `config`, `models`, and `formulas` are
//! the ambient surface the generator sits inside — a config type for CLI
//! defaults, and the placeholder domain types/formulas the originating
//! simulation carries around the generator.

pub mod config;
pub mod formulas;
pub mod galaxy;
pub mod models;

pub use galaxy::{generate, GalaxyError, GeneratedGalaxy, GenerationParameters, Point, Shape};
