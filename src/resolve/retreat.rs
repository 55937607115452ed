//! Retreat-phase adjudication.
//!
//! Every dislodged unit either retreats to one of its precomputed options
//! or disbands. Two units retreating to the same place all disband. A
//! dislodged unit with no order disbands in civil disorder.

use std::collections::BTreeMap;

use log::debug;

use crate::board::order::{RetreatOrder, SubmittedOrder};
use crate::board::state::{DislodgedUnit, GameState, OrderResolution, TurnResult};
use crate::board::territory::split_qualified;
use crate::board::unit::PowerId;
use crate::resolve::phase;
use crate::resolve::ResolveError;

/// Resolves a retreat phase.
///
/// Supply centers never change hands here; that happens only after fall
/// orders.
pub fn resolve_retreats(
    state: &GameState,
    orders_by_power: &BTreeMap<PowerId, Vec<RetreatOrder>>,
) -> Result<TurnResult, ResolveError> {
    if state.finished {
        return Err(ResolveError::GameFinished);
    }
    if !state.phase.is_retreats() {
        return Err(ResolveError::NotRetreatPhase(state.phase));
    }
    debug!(
        "resolving {} {} with {} dislodged",
        state.year,
        state.phase,
        state.dislodged.len()
    );

    // Pair each dislodgement with its order, synthesizing disbands for
    // units left unordered.
    let mut paired: Vec<(&DislodgedUnit, RetreatOrder)> = Vec::new();
    for d in &state.dislodged {
        let submitted = orders_by_power
            .get(&d.unit.power)
            .and_then(|orders| {
                orders
                    .iter()
                    .find(|o| split_qualified(&o.location).0 == d.from)
            })
            .cloned();
        let order = submitted
            .unwrap_or_else(|| RetreatOrder::disband(d.unit.power, &d.from));
        paired.push((d, order));
    }

    // A destination claimed by more than one retreat swallows them all.
    let mut claims: BTreeMap<String, u32> = BTreeMap::new();
    for (d, order) in &paired {
        if let Some(dest) = &order.dest {
            if resolve_destination(d, dest).is_some() {
                *claims.entry(split_qualified(dest).0.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut resolutions: Vec<OrderResolution> = Vec::new();
    let mut next = state.clone();

    for (d, order) in paired {
        let (succeeded, reason, landed) = match &order.dest {
            None => (true, None, None),
            Some(dest) => match resolve_destination(d, dest) {
                None => (
                    false,
                    Some(format!("{dest} is not a valid retreat")),
                    None,
                ),
                Some(qualified) => {
                    let base = split_qualified(&qualified).0.to_string();
                    if claims.get(&base).copied().unwrap_or(0) > 1 {
                        (false, Some(format!("retreat clash at {base}")), None)
                    } else {
                        (true, None, Some(qualified))
                    }
                }
            },
        };

        if let Some(qualified) = landed {
            let (base, coast) = split_qualified(&qualified);
            let mut unit = d.unit.clone();
            unit.territory = base.to_string();
            unit.coast = coast.map(str::to_string);
            next.power_mut(d.unit.power).units.push(unit);
        } else {
            debug!("{} {} at {} disbands", d.unit.power, d.unit.kind.letter(), d.from);
        }

        resolutions.push(OrderResolution {
            order: SubmittedOrder::Retreat(order),
            succeeded,
            reason,
        });
    }

    next.dislodged.clear();
    phase::check_eliminations(&mut next);
    phase::advance(&mut next);

    Ok(TurnResult {
        orders: resolutions
            .iter()
            .map(|r| r.order.clone())
            .collect(),
        resolutions,
        dislodged: Vec::new(),
        state: next,
    })
}

/// Matches an ordered destination against the precomputed retreat set.
/// A bare base id is accepted when exactly one option has that base.
fn resolve_destination(d: &DislodgedUnit, dest: &str) -> Option<String> {
    if d.retreat_options.iter().any(|o| o == dest) {
        return Some(dest.to_string());
    }
    let (base, coast) = split_qualified(dest);
    if coast.is_some() {
        return None;
    }
    let matches: Vec<&String> = d
        .retreat_options
        .iter()
        .filter(|o| split_qualified(o).0 == base)
        .collect();
    match matches.as_slice() {
        [only] => Some((*only).clone()),
        _ => None,
    }
}
