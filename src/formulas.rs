//! Placeholder game-simulation formulas
//!
//! The originating codebase surrounds its coordinate generator with a
//! broader turn-based simulation (ship design costs, fleet power, tech
//! trees, planetary income) that is "largely placeholder arithmetic" —
//! most of these return a fixed constant pending a real design. They are
//! carried here unchanged in behavior so the rest of the simulation has
//! something to call; only the coordinate generator itself is asked to
//! be complete.

use crate::galaxy::rng::DeterministicRng;

/// Positive-savings interest rate; debt accrues at a steeper rate.
const MONEY_INTEREST_RATE_POSITIVE: f64 = 0.02;
const MONEY_INTEREST_RATE_DEBT: f64 = 0.05;

const TECH_COST_BASE_MULTIPLIER: i64 = 100;

// ============================================================================
// Ship design cost calculations
// ============================================================================

/// Placeholder. Real formula will be implemented later.
pub fn ship_design_build_cost(
    _tech_range: i32,
    _tech_speed: i32,
    _tech_weapons: i32,
    _tech_shields: i32,
    _tech_mini: i32,
) -> i64 {
    1
}

/// Placeholder. Real formula will be implemented later.
pub fn ship_design_prototype_cost(
    _tech_range: i32,
    _tech_speed: i32,
    _tech_weapons: i32,
    _tech_shields: i32,
    _tech_mini: i32,
) -> i64 {
    1
}

/// Placeholder. Real formula will be implemented later.
pub fn ship_design_metal_cost(
    _tech_range: i32,
    _tech_speed: i32,
    _tech_weapons: i32,
    _tech_shields: i32,
    _tech_mini: i32,
) -> i64 {
    1
}

// ============================================================================
// Player metrics calculations
// ============================================================================

/// Placeholder. Real formula will be implemented later.
pub fn player_fleet_power(_player_id: u32) -> i64 {
    1
}

/// Placeholder. Real formula will be implemented later.
pub fn player_victory_points(_player_id: u32) -> i32 {
    1
}

// ============================================================================
// Money and resources calculations
// ============================================================================

/// Positive savings earn interest at `MONEY_INTEREST_RATE_POSITIVE`; debt
/// accrues at the steeper `MONEY_INTEREST_RATE_DEBT`.
pub fn money_interest(savings: i64) -> i64 {
    if savings >= 0 {
        (savings as f64 * MONEY_INTEREST_RATE_POSITIVE) as i64
    } else {
        (savings as f64 * MONEY_INTEREST_RATE_DEBT) as i64
    }
}

/// Placeholder one-to-one conversion. Real formula will be implemented later.
pub fn money_to_research_points(money_allocated: i64) -> i64 {
    money_allocated
}

// ============================================================================
// Technology advancement calculations
// ============================================================================

fn tech_advancement_cost(current_level: i32) -> i64 {
    let next_level = (current_level + 1) as i64;
    next_level * next_level * TECH_COST_BASE_MULTIPLIER
}

/// Identical quadratic formula across all six tracks: `(level + 1)^2 * 100`.
pub fn tech_range_advancement_cost(current_level: i32) -> i64 {
    tech_advancement_cost(current_level)
}

pub fn tech_speed_advancement_cost(current_level: i32) -> i64 {
    tech_advancement_cost(current_level)
}

pub fn tech_weapons_advancement_cost(current_level: i32) -> i64 {
    tech_advancement_cost(current_level)
}

pub fn tech_shields_advancement_cost(current_level: i32) -> i64 {
    tech_advancement_cost(current_level)
}

pub fn tech_mini_advancement_cost(current_level: i32) -> i64 {
    tech_advancement_cost(current_level)
}

pub fn tech_radical_advancement_cost(current_level: i32) -> i64 {
    tech_advancement_cost(current_level)
}

// ============================================================================
// Player income calculations
// ============================================================================

/// Placeholder, returns 0. Real implementation will sum income from all
/// planets owned by the player.
pub fn planetary_income(_player_id: u32) -> i64 {
    0
}

pub fn interest_income(savings: i64) -> i64 {
    money_interest(savings)
}

/// Placeholder, returns 0. Real implementation will handle rare special events.
pub fn windfall_income(_player_id: u32) -> i64 {
    0
}

// ============================================================================
// Population growth calculations
// ============================================================================

/// Placeholder linear growth (1% per turn), floored at 1 population.
/// Real formula will depend on how well the planet matches the player's
/// ideal temperature and gravity.
pub fn population_growth(
    current_population: i64,
    _planet_temperature: f64,
    _planet_gravity: f64,
    _ideal_temperature: f64,
    _ideal_gravity: f64,
) -> i64 {
    let growth = (current_population as f64 * 0.01) as i64;
    growth.max(1)
}

// ============================================================================
// Terraforming and mining calculations
// ============================================================================

/// Placeholder linear conversion (1 money = 0.01 temperature), clamped so
/// it cannot overshoot `target_temperature`.
pub fn temperature_change(money_spent: i64, current_temperature: f64, target_temperature: f64) -> f64 {
    let change = money_spent as f64 * 0.01;

    if current_temperature < target_temperature {
        change.min(target_temperature - current_temperature)
    } else if current_temperature > target_temperature {
        -change.min(current_temperature - target_temperature)
    } else {
        0.0
    }
}

/// Placeholder linear conversion (1 money = 1 metal), clamped to what
/// remains on the planet.
pub fn metal_mined(money_spent: i64, metal_remaining: i64) -> i64 {
    money_spent.min(metal_remaining)
}

// ============================================================================
// Planet mechanics calculations
// ============================================================================

/// Placeholder, returns 1. Reserved for a future Poisson-distributed
/// model; takes the deterministic RNG even though it is currently
/// unused, matching the original signature.
pub fn planet_nova_warning_duration(_rng: &mut DeterministicRng) -> i32 {
    1
}
