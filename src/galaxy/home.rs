//! Wedge-based home-planet selection: partitions the plane around the
//! origin into equal angular wedges and assigns one home planet per
//! player by drawing uniformly from each wedge's candidates in turn.

use crate::galaxy::error::GalaxyError;
use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::Point;

/// True iff `angle` (already normalized to `[0, 2*PI)`) falls within the
/// half-open wedge `[start, start + width)`, wrapping past `2*PI` as
/// needed. Equivalent to the original two-branch wrap check, expressed as
/// a single modulo.
fn in_wedge(angle: f64, start: f64, width: f64) -> bool {
    let tau = std::f64::consts::TAU;
    let mut diff = (angle - start) % tau;
    if diff < 0.0 {
        diff += tau;
    }
    diff < width
}

/// Assigns exactly one home index per player. Each wedge must contain at
/// least one not-yet-claimed point or the call fails outright — the
/// caller's only recourse is to retry with a different seed.
pub fn select_homes(
    points: &[Point],
    n_players: usize,
    rng: &mut DeterministicRng,
) -> Result<Vec<usize>, GalaxyError> {
    let wedge_width = std::f64::consts::TAU / n_players as f64;
    let alpha = rng.next_double() * std::f64::consts::TAU;

    let mut claimed = vec![false; points.len()];
    let mut homes = Vec::with_capacity(n_players);

    for wedge in 0..n_players {
        let start = alpha + wedge as f64 * wedge_width;
        let candidates: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(idx, p)| !claimed[*idx] && in_wedge(p.angle_from_origin(), start, wedge_width))
            .map(|(idx, _)| idx)
            .collect();

        if candidates.is_empty() {
            return Err(GalaxyError::EmptyWedge { wedge, total: n_players });
        }

        let pick = rng.next_int_range(0, candidates.len() as i64 - 1) as usize;
        let chosen = candidates[pick];
        claimed[chosen] = true;
        homes.push(chosen);
    }

    Ok(homes)
}
