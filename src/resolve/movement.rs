//! Orders-phase adjudication.
//!
//! One pass builds validated move intents, one credits supports, one
//! resolves destination conflicts, then an iterative fixpoint shrinks the
//! set of successful moves until nothing changes. Every order ends up
//! with exactly one entry in the resolution log.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::board::order::{Order, OrderKind, SubmittedOrder};
use crate::board::state::{DislodgedUnit, GameState, OrderResolution, TurnResult};
use crate::board::territory::{split_qualified, TerritoryKind};
use crate::board::unit::{PowerId, UnitKind};
use crate::resolve::normalize::normalize_orders;
use crate::resolve::phase;
use crate::resolve::validate::{is_valid_convoy_path, is_valid_move, landing_coast};
use crate::resolve::ResolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Succeeded,
    Bounced,
}

/// A validated attempt to move, tracked through the resolution passes.
#[derive(Debug)]
struct MoveIntent {
    order_idx: usize,
    power: PowerId,
    from: String,
    to: String,
    landing: Option<String>,
    via_convoy: bool,
    strength: u32,
    outcome: Outcome,
    reason: Option<String>,
}

impl MoveIntent {
    fn bounce(&mut self, reason: String) {
        self.outcome = Outcome::Bounced;
        self.reason = Some(reason);
    }
}

/// Resolves one movement phase.
///
/// Accepts orders for every power (missing powers simply hold), computes
/// the unique outcome, and returns it together with a successor state one
/// phase further on. After fall orders, supply centers change hands and
/// eliminations and victory are checked.
pub fn resolve(
    state: &GameState,
    orders_by_power: &BTreeMap<PowerId, Vec<Order>>,
) -> Result<TurnResult, ResolveError> {
    if state.finished {
        return Err(ResolveError::GameFinished);
    }
    if !state.phase.is_orders() {
        return Err(ResolveError::NotOrdersPhase(state.phase));
    }
    debug!("resolving {} {}", state.year, state.phase);

    let (orders, rejected) = normalize_orders(state, orders_by_power);
    let map = &state.map;

    // slot per accepted order: (succeeded, reason)
    let mut slots: Vec<Option<(bool, Option<String>)>> = vec![None; orders.len()];

    // Fleets in sea zones offering a convoy for a given (origin, dest) pair.
    let mut convoy_zones: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
    for order in &orders {
        if let OrderKind::Convoy { from, to } = &order.kind {
            let zone = map.get(&order.location);
            let at_sea = zone.is_some_and(|t| t.kind == TerritoryKind::Sea);
            if order.unit_kind == UnitKind::Fleet && at_sea {
                convoy_zones
                    .entry((
                        split_qualified(from).0.to_string(),
                        split_qualified(to).0.to_string(),
                    ))
                    .or_default()
                    .push(order.location.clone());
            }
        }
    }

    // Base defense of every occupied territory; hold supports add to it.
    let mut defenders: BTreeMap<String, u32> = BTreeMap::new();
    for power in state.powers.values() {
        for unit in &power.units {
            defenders.insert(unit.territory.clone(), 1);
        }
    }

    let mut intents: Vec<MoveIntent> = Vec::new();
    for (idx, order) in orders.iter().enumerate() {
        let OrderKind::Move {
            dest,
            dest_coast,
            via_convoy,
        } = &order.kind
        else {
            continue;
        };
        let unit = state
            .power(order.power)
            .unit_at(&order.location)
            .expect("normalized order has a unit");
        let (dest_base, dest_coast_inline) = split_qualified(dest);
        let dest_coast = dest_coast.as_deref().or(dest_coast_inline);

        let convoyed = *via_convoy && unit.kind == UnitKind::Army;
        if convoyed {
            let land = map
                .get(dest_base)
                .is_some_and(|t| t.kind != TerritoryKind::Sea);
            let zones = convoy_zones
                .get(&(order.location.clone(), dest_base.to_string()))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let zone_refs: Vec<&str> = zones.iter().map(String::as_str).collect();
            if !land || !is_valid_convoy_path(&order.location, dest_base, &zone_refs, map)
            {
                slots[idx] = Some((
                    false,
                    Some(format!(
                        "no valid convoy path from {} to {dest_base}",
                        order.location
                    )),
                ));
                continue;
            }
        } else if !is_valid_move(unit, dest_base, dest_coast, map) {
            slots[idx] = Some((
                false,
                Some(format!(
                    "cannot move from {} to {dest}",
                    order.location
                )),
            ));
            continue;
        }

        intents.push(MoveIntent {
            order_idx: idx,
            power: order.power,
            from: order.location.clone(),
            to: dest_base.to_string(),
            landing: if convoyed {
                None
            } else {
                landing_coast(unit, dest_base, dest_coast, map)
            },
            via_convoy: convoyed,
            strength: 1,
            outcome: Outcome::Succeeded,
            reason: None,
        });
    }

    apply_supports(state, &orders, &mut slots, &mut intents, &mut defenders);
    let mut standoff_vacated: BTreeSet<String> = BTreeSet::new();
    resolve_conflicts(state, &mut intents, &defenders, &mut standoff_vacated);
    revert_swaps(&mut intents);

    // Cascade: shrink the successful set until it is self-consistent.
    loop {
        let mut changed = false;

        for i in 0..intents.len() {
            if intents[i].outcome != Outcome::Succeeded {
                continue;
            }
            let blocked = intents.iter().any(|other| {
                other.outcome == Outcome::Bounced && other.from == intents[i].to
            });
            if blocked && intents[i].strength <= 1 {
                let to = intents[i].to.clone();
                intents[i].bounce(format!("unit at {to} failed to leave"));
                trace!("{} bounced, unit at {to} failed to leave", intents[i].from);
                changed = true;
            }
        }

        for i in 0..intents.len() {
            if intents[i].outcome != Outcome::Succeeded || !intents[i].via_convoy {
                continue;
            }
            let key = (intents[i].from.clone(), intents[i].to.clone());
            let zones = convoy_zones.get(&key).map(Vec::as_slice).unwrap_or(&[]);
            // A zone whose fleet is being dislodged no longer carries.
            let surviving: Vec<&str> = zones
                .iter()
                .filter(|z| {
                    !intents.iter().any(|other| {
                        other.outcome == Outcome::Succeeded && &other.to == *z
                    })
                })
                .map(String::as_str)
                .collect();
            if !is_valid_convoy_path(&intents[i].from, &intents[i].to, &surviving, map) {
                intents[i].bounce("convoyed army move failed".to_string());
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    // Dislodgements: a successful move into a territory whose occupant
    // did not itself successfully leave.
    let leavers: BTreeSet<&str> = intents
        .iter()
        .filter(|i| i.outcome == Outcome::Succeeded)
        .map(|i| i.from.as_str())
        .collect();
    let mut occupied_after: BTreeSet<String> = BTreeSet::new();
    for power in state.powers.values() {
        for unit in &power.units {
            if !leavers.contains(unit.territory.as_str()) {
                occupied_after.insert(unit.territory.clone());
            }
        }
    }
    for intent in &intents {
        if intent.outcome == Outcome::Succeeded {
            occupied_after.insert(intent.to.clone());
        }
    }

    let mut dislodged: Vec<DislodgedUnit> = Vec::new();
    for intent in &intents {
        if intent.outcome != Outcome::Succeeded {
            continue;
        }
        let Some(victim) = state.unit_at(&intent.to) else {
            continue;
        };
        if leavers.contains(intent.to.as_str()) {
            continue;
        }
        let retreat_options =
            retreat_options(state, victim, &intent.from, &occupied_after, &standoff_vacated);
        debug!(
            "{} {} dislodged from {} by attack from {}",
            victim.power, victim.kind.letter(), intent.to, intent.from
        );
        dislodged.push(DislodgedUnit {
            unit: victim.clone(),
            from: intent.to.clone(),
            attacker_from: intent.from.clone(),
            retreat_options,
        });
    }
    dislodged.sort_by(|a, b| a.from.cmp(&b.from));

    for intent in &intents {
        slots[intent.order_idx] = Some((
            intent.outcome == Outcome::Succeeded,
            intent.reason.clone(),
        ));
    }
    for d in &dislodged {
        if let Some(idx) = orders.iter().position(|o| o.location == d.from) {
            let reason = match orders[idx].kind {
                OrderKind::Convoy { .. } => "convoying fleet dislodged".to_string(),
                _ => format!("dislodged by attack from {}", d.attacker_from),
            };
            slots[idx] = Some((false, Some(reason)));
        }
    }

    let mut resolutions: Vec<OrderResolution> = orders
        .iter()
        .zip(slots)
        .map(|(order, slot)| {
            let (succeeded, reason) = slot.unwrap_or((true, None));
            OrderResolution {
                order: SubmittedOrder::Turn(order.clone()),
                succeeded,
                reason,
            }
        })
        .collect();
    resolutions.extend(rejected);

    // Build the successor state.
    let mut next = state.clone();
    for d in &dislodged {
        next.power_mut(d.unit.power).remove_unit_at(&d.from);
    }
    for intent in &intents {
        if intent.outcome != Outcome::Succeeded {
            continue;
        }
        let power = next.power_mut(intent.power);
        if let Some(unit) = power
            .units
            .iter_mut()
            .find(|u| u.territory == intent.from)
        {
            unit.territory = intent.to.clone();
            unit.coast = intent.landing.clone();
        }
    }
    next.dislodged = dislodged.clone();

    if state.phase == crate::board::Phase::FallOrders {
        phase::update_supply_centers(&mut next);
        phase::check_eliminations(&mut next);
        phase::check_victory(&mut next);
    }
    phase::advance(&mut next);

    Ok(TurnResult {
        orders: orders.into_iter().map(SubmittedOrder::Turn).collect(),
        resolutions,
        dislodged,
        state: next,
    })
}

/// Credits supports to intents and defenders, cutting where attacked.
fn apply_supports(
    state: &GameState,
    orders: &[Order],
    slots: &mut [Option<(bool, Option<String>)>],
    intents: &mut [MoveIntent],
    defenders: &mut BTreeMap<String, u32>,
) {
    for (idx, order) in orders.iter().enumerate() {
        let OrderKind::Support {
            target,
            target_dest,
        } = &order.kind
        else {
            continue;
        };
        let target_base = split_qualified(target).0.to_string();
        // Where the support is aimed: the move destination, or the
        // supported territory itself for a hold support.
        let effective_dest = target_dest
            .as_deref()
            .map(|d| split_qualified(d).0.to_string())
            .unwrap_or_else(|| target_base.clone());

        let cutter = intents
            .iter()
            .find(|i| i.to == order.location && i.from != effective_dest);
        if let Some(cutter) = cutter {
            trace!("support at {} cut from {}", order.location, cutter.from);
            slots[idx] = Some((
                false,
                Some(format!("cut by attack from {}", cutter.from)),
            ));
            continue;
        }

        match target_dest {
            Some(dest) => {
                let (dest_base, _) = split_qualified(dest);
                let supporter = state
                    .power(order.power)
                    .unit_at(&order.location)
                    .expect("normalized order has a unit");
                if !can_reach(supporter, dest_base, &state.map) {
                    slots[idx] = Some((
                        false,
                        Some(format!("supporting unit cannot reach {dest_base}")),
                    ));
                    continue;
                }
                let matched = intents
                    .iter_mut()
                    .find(|i| i.from == target_base && i.to == dest_base);
                match matched {
                    Some(intent) => {
                        intent.strength += 1;
                        slots[idx] = Some((true, None));
                    }
                    None => {
                        slots[idx] = Some((
                            false,
                            Some("no matching move to support".to_string()),
                        ));
                    }
                }
            }
            None => {
                if state.unit_at(&target_base).is_none() {
                    slots[idx] = Some((
                        false,
                        Some(format!("no unit at {target_base}")),
                    ));
                    continue;
                }
                *defenders.entry(target_base).or_insert(1) += 1;
                slots[idx] = Some((true, None));
            }
        }
    }
}

/// Terrain and adjacency reachability, ignoring coast ambiguity. A fleet
/// supporting into a split-coast territory need not name the coast.
fn can_reach(
    unit: &crate::board::Unit,
    dest: &str,
    map: &crate::board::TerritoryMap,
) -> bool {
    let Some(target) = map.get(dest) else {
        return false;
    };
    let terrain_ok = match unit.kind {
        UnitKind::Army => target.kind != TerritoryKind::Sea,
        UnitKind::Fleet => target.kind != TerritoryKind::Land,
    };
    terrain_ok
        && map
            .adjacency_from(&unit.territory, unit.coast.as_deref())
            .iter()
            .any(|n| split_qualified(n).0 == dest)
}

/// Groups intents by destination and settles each contest by strength.
fn resolve_conflicts(
    state: &GameState,
    intents: &mut [MoveIntent],
    defenders: &BTreeMap<String, u32>,
    standoff_vacated: &mut BTreeSet<String>,
) {
    let destinations: BTreeSet<String> = intents.iter().map(|i| i.to.clone()).collect();
    let movers: BTreeSet<String> = intents.iter().map(|i| i.from.clone()).collect();

    for dest in destinations {
        let occupant_leaving = movers.contains(&dest);
        let occupied = state.unit_at(&dest).is_some();
        let defense = if !occupied || occupant_leaving {
            0
        } else {
            defenders.get(&dest).copied().unwrap_or(1)
        };

        let group: Vec<usize> = intents
            .iter()
            .enumerate()
            .filter(|(_, i)| i.to == dest)
            .map(|(n, _)| n)
            .collect();
        let max = group.iter().map(|&n| intents[n].strength).max().unwrap();
        let winners: Vec<usize> = group
            .iter()
            .copied()
            .filter(|&n| intents[n].strength == max)
            .collect();

        if winners.len() == 1 && max > defense {
            for &n in &group {
                if n != winners[0] {
                    let s = intents[n].strength;
                    intents[n].bounce(format!("strength {s} vs winner strength {max}"));
                }
            }
            continue;
        }

        if winners.len() == 1 {
            // Top attacker loses to the garrison, the rest lose the contest.
            for &n in &group {
                if n == winners[0] {
                    intents[n]
                        .bounce(format!("defender holds with strength {defense}"));
                } else {
                    let s = intents[n].strength;
                    intents[n].bounce(format!("strength {s} vs winner strength {max}"));
                }
            }
            continue;
        }

        // Tied leaders stand each other off.
        for &n in &group {
            if intents[n].strength == max {
                intents[n].bounce(format!("standoff at {dest}"));
            } else {
                let s = intents[n].strength;
                intents[n].bounce(format!("strength {s} vs winner strength {max}"));
            }
        }
        if !occupied || occupant_leaving {
            standoff_vacated.insert(dest);
        }
    }
}

/// Two units exchanging places head-on both bounce, unless both travel by
/// convoy.
fn revert_swaps(intents: &mut [MoveIntent]) {
    for a in 0..intents.len() {
        for b in (a + 1)..intents.len() {
            let swap = intents[a].outcome == Outcome::Succeeded
                && intents[b].outcome == Outcome::Succeeded
                && intents[a].from == intents[b].to
                && intents[a].to == intents[b].from;
            if swap && !(intents[a].via_convoy && intents[b].via_convoy) {
                let (a_from, b_from) = (intents[a].from.clone(), intents[b].from.clone());
                intents[a].bounce(format!("bounced by swap with {b_from}"));
                intents[b].bounce(format!("bounced by swap with {a_from}"));
            }
        }
    }
}

/// Legal retreat destinations for a dislodged unit: adjacent, terrain
/// compatible, not the attacker's origin, not occupied after movement,
/// not left vacant by a standoff.
fn retreat_options(
    state: &GameState,
    unit: &crate::board::Unit,
    attacker_from: &str,
    occupied_after: &BTreeSet<String>,
    standoff_vacated: &BTreeSet<String>,
) -> Vec<String> {
    let map = &state.map;
    let mut options: Vec<String> = Vec::new();
    for neighbor in map.adjacency_from(&unit.territory, unit.coast.as_deref()) {
        let (base, _) = split_qualified(neighbor);
        let Some(target) = map.get(base) else {
            continue;
        };
        let terrain_ok = match unit.kind {
            UnitKind::Army => target.kind != TerritoryKind::Sea,
            UnitKind::Fleet => target.kind != TerritoryKind::Land,
        };
        if !terrain_ok
            || base == attacker_from
            || occupied_after.contains(base)
            || standoff_vacated.contains(base)
        {
            continue;
        }
        let entry = match unit.kind {
            UnitKind::Army => base.to_string(),
            UnitKind::Fleet => neighbor.clone(),
        };
        if !options.contains(&entry) {
            options.push(entry);
        }
    }
    options.sort();
    options
}
