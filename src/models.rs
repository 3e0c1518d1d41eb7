//! Placeholder domain models
//!
//! Thin stand-ins for the surrounding turn-based simulation's data model
//! (players, fleets, ship designs, colonized planets). The coordinate
//! generator never touches these; they exist so `formulas` has something
//! to take by id/value, mirroring the stub headers the originating
//! codebase carries for the same purpose until a real design replaces
//! them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub money: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    pub id: u32,
    pub owner_id: u32,
    pub ship_ids: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipDesign {
    pub id: u32,
    pub owner_id: u32,
    pub tech_range: i32,
    pub tech_speed: i32,
    pub tech_weapons: i32,
    pub tech_shields: i32,
    pub tech_mini: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonizedPlanet {
    pub planet_index: usize,
    pub owner_id: u32,
    pub population: i64,
    pub metal_remaining: i64,
    pub temperature: f64,
}
