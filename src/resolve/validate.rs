//! Geometry checks: can this unit legally go there, and does a convoy
//! chain actually connect origin to destination.

use std::collections::BTreeSet;

use crate::board::territory::{split_qualified, TerritoryKind, TerritoryMap};
use crate::board::unit::{Unit, UnitKind};

/// Whether `unit` may move directly to `dest` under terrain and adjacency
/// rules. Convoyed moves are checked separately.
pub fn is_valid_move(
    unit: &Unit,
    dest: &str,
    dest_coast: Option<&str>,
    map: &TerritoryMap,
) -> bool {
    let Some(target) = map.get(dest) else {
        return false;
    };
    match unit.kind {
        UnitKind::Army => {
            if target.kind == TerritoryKind::Sea {
                return false;
            }
            map.adjacency_from(&unit.territory, None)
                .iter()
                .any(|n| split_qualified(n).0 == dest)
        }
        UnitKind::Fleet => {
            if target.kind == TerritoryKind::Land {
                return false;
            }
            let from_here = map.adjacency_from(&unit.territory, unit.coast.as_deref());
            if target.has_coasts() {
                match dest_coast {
                    Some(coast) => {
                        let qualified = format!("{dest}/{coast}");
                        from_here.iter().any(|n| n == &qualified)
                    }
                    // Without a named coast the move is only unambiguous
                    // when exactly one coast is reachable from here.
                    None => {
                        let reachable: BTreeSet<&str> = from_here
                            .iter()
                            .filter_map(|n| {
                                let (base, coast) = split_qualified(n);
                                (base == dest).then_some(coast).flatten()
                            })
                            .collect();
                        reachable.len() == 1
                    }
                }
            } else {
                from_here.iter().any(|n| split_qualified(n).0 == dest)
            }
        }
    }
}

/// The coast a fleet ends up on after a valid move to `dest`, either the
/// one it named or the single reachable one.
pub fn landing_coast(
    unit: &Unit,
    dest: &str,
    dest_coast: Option<&str>,
    map: &TerritoryMap,
) -> Option<String> {
    if unit.kind != UnitKind::Fleet {
        return None;
    }
    let target = map.get(dest)?;
    if !target.has_coasts() {
        return None;
    }
    if let Some(coast) = dest_coast {
        return Some(coast.to_string());
    }
    map.adjacency_from(&unit.territory, unit.coast.as_deref())
        .iter()
        .find_map(|n| {
            let (base, coast) = split_qualified(n);
            (base == dest).then(|| coast.map(str::to_string)).flatten()
        })
}

/// Whether the sea zones in `convoy_zones` form an unbroken chain from a
/// zone bordering `army_from` to one bordering `army_to`. Plain BFS over
/// the subgraph of participating zones.
pub fn is_valid_convoy_path(
    army_from: &str,
    army_to: &str,
    convoy_zones: &[&str],
    map: &TerritoryMap,
) -> bool {
    if convoy_zones.is_empty() || army_from == army_to {
        return false;
    }
    let mut queue: Vec<&str> = convoy_zones
        .iter()
        .copied()
        .filter(|z| map.touches(z, army_from))
        .collect();
    let mut visited: BTreeSet<&str> = queue.iter().copied().collect();

    while let Some(zone) = queue.pop() {
        if map.touches(zone, army_to) {
            return true;
        }
        for &next in convoy_zones {
            if !visited.contains(next) && map.touches(zone, next) {
                visited.insert(next);
                queue.push(next);
            }
        }
    }
    false
}
