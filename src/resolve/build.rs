//! Winter adjustments: builds, disbands, and civil-disorder removals.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use crate::board::order::{BuildOrder, BuildOrderKind, SubmittedOrder};
use crate::board::state::{GameState, OrderResolution, TurnResult};
use crate::board::territory::{split_qualified, TerritoryKind, TerritoryMap};
use crate::board::unit::{Power, PowerId, Unit, UnitKind};
use crate::resolve::phase;
use crate::resolve::ResolveError;

/// Centers minus units: positive means builds owed, negative disbands.
pub fn adjustment(power: PowerId, state: &GameState) -> i32 {
    let p = state.power(power);
    p.supply_centers.len() as i32 - p.units.len() as i32
}

/// Home centers the power still owns and does not currently occupy.
pub fn available_build_locations(power: PowerId, state: &GameState) -> Vec<String> {
    let p = state.power(power);
    state
        .map
        .iter()
        .filter(|t| {
            t.home == Some(power)
                && p.supply_centers.contains(&t.id)
                && state.unit_at(&t.id).is_none()
        })
        .map(|t| t.id.clone())
        .collect()
}

/// Resolves the winter builds phase.
///
/// Builds beyond the adjustment count or on illegal sites fail in the
/// log. A power over its center count that submits too few disbands has
/// the shortfall removed in civil disorder, farthest units from home
/// first.
pub fn resolve_builds(
    state: &GameState,
    orders_by_power: &BTreeMap<PowerId, Vec<BuildOrder>>,
) -> Result<TurnResult, ResolveError> {
    if state.finished {
        return Err(ResolveError::GameFinished);
    }
    if state.phase != crate::board::Phase::WinterBuilds {
        return Err(ResolveError::NotBuildPhase(state.phase));
    }
    debug!("resolving {} winter builds", state.year);

    let mut next = state.clone();
    let mut resolutions: Vec<OrderResolution> = Vec::new();
    let empty = Vec::new();

    for &power in crate::board::ALL_POWERS.iter() {
        let orders = orders_by_power.get(&power).unwrap_or(&empty);
        let allowance = adjustment(power, state);
        let mut built = 0i32;
        let mut disbanded = 0i32;

        for order in orders {
            let (succeeded, reason) = match &order.kind {
                BuildOrderKind::Build {
                    unit_kind,
                    location,
                    coast,
                } => {
                    let base = split_qualified(location).0.to_string();
                    if allowance <= built {
                        (false, Some("no build available".to_string()))
                    } else {
                        match validate_build(&next, power, *unit_kind, &base, coast.as_deref())
                        {
                            Err(reason) => (false, Some(reason)),
                            Ok(landed_coast) => {
                                next.power_mut(power).units.push(Unit {
                                    kind: *unit_kind,
                                    power,
                                    territory: base.clone(),
                                    coast: landed_coast,
                                });
                                built += 1;
                                (true, None)
                            }
                        }
                    }
                }
                BuildOrderKind::Disband { location } => {
                    let base = split_qualified(location).0;
                    match next.power_mut(power).remove_unit_at(base) {
                        Some(unit) => {
                            debug!("{power} disbands {} at {base}", unit.kind.letter());
                            disbanded += 1;
                            (true, None)
                        }
                        None => (false, Some(format!("no unit at {base}"))),
                    }
                }
            };
            resolutions.push(OrderResolution {
                order: SubmittedOrder::Adjustment(order.clone()),
                succeeded,
                reason,
            });
        }

        // Civil disorder: the shortfall comes off the board unasked.
        let owed = built - allowance - disbanded;
        for _ in 0..owed.max(0) {
            let Some(territory) = farthest_from_home(next.power(power), &next.map) else {
                break;
            };
            next.power_mut(power).remove_unit_at(&territory);
            debug!("{power} disbands unit at {territory} in civil disorder");
            resolutions.push(OrderResolution {
                order: SubmittedOrder::Adjustment(BuildOrder::disband(power, &territory)),
                succeeded: true,
                reason: Some("disbanded in civil disorder".to_string()),
            });
        }
    }

    phase::check_eliminations(&mut next);
    phase::advance(&mut next);

    Ok(TurnResult {
        orders: resolutions.iter().map(|r| r.order.clone()).collect(),
        resolutions,
        dislodged: Vec::new(),
        state: next,
    })
}

/// Site rules for one build. Returns the coast the new fleet sits on.
fn validate_build(
    state: &GameState,
    power: PowerId,
    unit_kind: UnitKind,
    base: &str,
    coast: Option<&str>,
) -> Result<Option<String>, String> {
    let Some(territory) = state.map.get(base) else {
        return Err(format!("no territory {base}"));
    };
    if territory.home != Some(power) {
        return Err(format!("{base} is not a home center"));
    }
    if !state.power(power).supply_centers.contains(base) {
        return Err(format!("{base} is not owned"));
    }
    if state.unit_at(base).is_some() {
        return Err(format!("{base} is occupied"));
    }
    match unit_kind {
        UnitKind::Army => Ok(None),
        UnitKind::Fleet => {
            if territory.kind != TerritoryKind::Coastal {
                return Err(format!("cannot build a fleet at {base}"));
            }
            if territory.has_coasts() {
                match coast {
                    Some(c) if territory.coast(c).is_some() => Ok(Some(c.to_string())),
                    Some(c) => Err(format!("{base} has no coast {c}")),
                    None => Err(format!("fleet build at {base} must name a coast")),
                }
            } else {
                Ok(None)
            }
        }
    }
}

/// Picks the unit farthest by graph distance from any of its power's home
/// centers, ties broken by territory id.
fn farthest_from_home(power: &Power, map: &TerritoryMap) -> Option<String> {
    let homes: Vec<&str> = map
        .iter()
        .filter(|t| t.home == Some(power.id))
        .map(|t| t.id.as_str())
        .collect();
    power
        .units
        .iter()
        .map(|u| (min_distance(&u.territory, &homes, map), u.territory.clone()))
        .min_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)))
        .map(|(_, territory)| territory)
}

/// BFS over base-id adjacency, all unit kinds alike.
fn min_distance(from: &str, targets: &[&str], map: &TerritoryMap) -> u32 {
    if targets.contains(&from) {
        return 0;
    }
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();
    visited.insert(from.to_string());
    queue.push_back((from.to_string(), 0));
    while let Some((here, dist)) = queue.pop_front() {
        for neighbor in map.adjacency_from(&here, None) {
            let base = split_qualified(neighbor).0.to_string();
            if targets.contains(&base.as_str()) {
                return dist + 1;
            }
            if visited.insert(base.clone()) {
                queue.push_back((base, dist + 1));
            }
        }
    }
    u32::MAX
}
