//! End-of-turn bookkeeping: supply centers, eliminations, victory, and
//! the phase clock.

use log::debug;

use crate::board::state::{GameState, Phase};

/// Transfers every occupied supply center to its occupant's owner.
/// Called after fall orders only.
pub fn update_supply_centers(state: &mut GameState) {
    let mut captures: Vec<(crate::board::PowerId, String)> = Vec::new();
    for t in state.map.iter() {
        if !t.supply_center {
            continue;
        }
        if let Some(unit) = state.unit_at(&t.id) {
            captures.push((unit.power, t.id.clone()));
        }
    }
    for (new_owner, center) in captures {
        let already = state.power(new_owner).supply_centers.contains(&center);
        if already {
            continue;
        }
        for power in state.powers.values_mut() {
            power.supply_centers.remove(&center);
        }
        debug!("{new_owner} captures {center}");
        state
            .power_mut(new_owner)
            .supply_centers
            .insert(center);
    }
}

/// Marks powers with no centers and no units as eliminated. The flag is
/// never cleared.
pub fn check_eliminations(state: &mut GameState) {
    for power in state.powers.values_mut() {
        if !power.eliminated && power.supply_centers.is_empty() && power.units.is_empty()
        {
            debug!("{} eliminated", power.id);
            power.eliminated = true;
        }
    }
}

/// Declares a winner once a power holds the victory threshold.
pub fn check_victory(state: &mut GameState) {
    if state.finished {
        return;
    }
    let threshold = state.victory_centers;
    if let Some(winner) = state
        .powers
        .values()
        .find(|p| p.supply_centers.len() >= threshold)
    {
        debug!("{} wins with {} centers", winner.id, winner.supply_centers.len());
        state.winner = Some(winner.id);
        state.finished = true;
    }
}

/// Steps the phase clock forward one notch; a new spring starts a new year.
pub fn advance(state: &mut GameState) {
    state.phase = state.phase.next();
    if state.phase == Phase::SpringOrders {
        state.year += 1;
    }
}
