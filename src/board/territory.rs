//! The territory graph: provinces, coasts, and adjacency lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Terrain classification of a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerritoryKind {
    /// Interior land, armies only.
    Land,
    /// Open water, fleets only.
    Sea,
    /// Land bordering water, both unit kinds.
    Coastal,
}

/// A named coast of a split-coast territory, with its own fleet adjacency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coast {
    pub id: String,
    pub adjacent: Vec<String>,
}

/// A single province on the board.
///
/// Entries in `adjacent` may be coast-qualified (`"spa/sc"`) when the move
/// is only legal onto that coast. Territories with named coasts additionally
/// carry per-coast adjacency in `coasts`; a fleet sitting on such a coast
/// uses the coast list, not the general one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub id: String,
    pub name: String,
    pub kind: TerritoryKind,
    pub supply_center: bool,
    pub home: Option<crate::board::PowerId>,
    pub adjacent: Vec<String>,
    pub coasts: Vec<Coast>,
}

impl Territory {
    pub fn has_coasts(&self) -> bool {
        !self.coasts.is_empty()
    }

    pub fn coast(&self, id: &str) -> Option<&Coast> {
        self.coasts.iter().find(|c| c.id == id)
    }
}

/// Splits a possibly coast-qualified id into (base, coast).
///
/// `"spa/sc"` becomes `("spa", Some("sc"))`, `"par"` becomes `("par", None)`.
pub fn split_qualified(id: &str) -> (&str, Option<&str>) {
    match id.split_once('/') {
        Some((base, coast)) => (base, Some(coast)),
        None => (id, None),
    }
}

/// The full board graph, keyed by base territory id.
///
/// Immutable once built; game states share one map by `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryMap {
    territories: BTreeMap<String, Territory>,
}

impl TerritoryMap {
    pub fn new(territories: Vec<Territory>) -> Self {
        TerritoryMap {
            territories: territories
                .into_iter()
                .map(|t| (t.id.clone(), t))
                .collect(),
        }
    }

    /// Looks up a territory by id; coast qualifiers are ignored.
    pub fn get(&self, id: &str) -> Option<&Territory> {
        let (base, _) = split_qualified(id);
        self.territories.get(base)
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.values()
    }

    /// Adjacency list seen by a unit standing in `territory`.
    ///
    /// A fleet on a named coast only reaches that coast's neighbors; every
    /// other unit uses the general list. Unknown ids yield an empty slice.
    pub fn adjacency_from(&self, territory: &str, coast: Option<&str>) -> &[String] {
        let Some(t) = self.get(territory) else {
            return &[];
        };
        if let Some(coast_id) = coast {
            if let Some(c) = t.coast(coast_id) {
                return &c.adjacent;
            }
        }
        &t.adjacent
    }

    /// Whether `a` borders `b`, comparing base ids only. Used for convoy
    /// path walking, where coast distinctions do not matter.
    pub fn touches(&self, a: &str, b: &str) -> bool {
        let (b_base, _) = split_qualified(b);
        self.adjacency_from(a, None)
            .iter()
            .any(|n| split_qualified(n).0 == b_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::standard_map;

    #[test]
    fn split_qualified_parses_coasts() {
        assert_eq!(split_qualified("spa/sc"), ("spa", Some("sc")));
        assert_eq!(split_qualified("par"), ("par", None));
    }

    #[test]
    fn lookup_ignores_coast_qualifier() {
        let map = standard_map();
        let spa = map.get("spa/sc").unwrap();
        assert_eq!(spa.id, "spa");
        assert!(spa.has_coasts());
    }

    #[test]
    fn coastal_adjacency_differs_from_general() {
        let map = standard_map();
        // Only the north coast reaches the Barents Sea.
        let north = map.adjacency_from("stp", Some("nc"));
        assert!(north.iter().any(|n| n == "bar"));
        assert!(!north.iter().any(|n| n == "fin"));
        let general = map.adjacency_from("stp", None);
        assert!(general.iter().any(|n| n == "fin"));
        assert!(!general.iter().any(|n| n == "bar"));
    }

    #[test]
    fn touches_compares_base_ids() {
        let map = standard_map();
        assert!(map.touches("mao", "spa"));
        assert!(map.touches("par", "bur"));
        assert!(!map.touches("par", "mun"));
    }

    #[test]
    fn unknown_territory_has_no_neighbors() {
        let map = standard_map();
        assert!(map.adjacency_from("xyz", None).is_empty());
        assert!(map.get("xyz").is_none());
    }
}
