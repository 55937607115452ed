//! Units and the powers that own them.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven great powers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PowerId {
    Austria,
    England,
    France,
    Germany,
    Italy,
    Russia,
    Turkey,
}

/// All seven powers in standard order.
pub const ALL_POWERS: [PowerId; 7] = [
    PowerId::Austria,
    PowerId::England,
    PowerId::France,
    PowerId::Germany,
    PowerId::Italy,
    PowerId::Russia,
    PowerId::Turkey,
];

impl PowerId {
    /// Returns the capitalized display name of this power.
    pub const fn name(self) -> &'static str {
        match self {
            PowerId::Austria => "Austria",
            PowerId::England => "England",
            PowerId::France => "France",
            PowerId::Germany => "Germany",
            PowerId::Italy => "Italy",
            PowerId::Russia => "Russia",
            PowerId::Turkey => "Turkey",
        }
    }
}

impl fmt::Display for PowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Army,
    Fleet,
}

impl UnitKind {
    /// Returns the single-letter abbreviation used in order notation.
    pub const fn letter(self) -> char {
        match self {
            UnitKind::Army => 'A',
            UnitKind::Fleet => 'F',
        }
    }
}

/// A military unit on the board.
///
/// `coast` is only meaningful for fleets on split-coast territories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub power: PowerId,
    pub territory: String,
    pub coast: Option<String>,
}

/// A power's holdings: supply centers, units, and elimination status.
///
/// Mutated only by the resolver and the build resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    pub id: PowerId,
    pub supply_centers: BTreeSet<String>,
    pub units: Vec<Unit>,
    pub eliminated: bool,
}

impl Power {
    /// Creates a power with no centers or units.
    pub fn new(id: PowerId) -> Self {
        Power {
            id,
            supply_centers: BTreeSet::new(),
            units: Vec::new(),
            eliminated: false,
        }
    }

    /// Returns this power's unit at the given base territory, if any.
    pub fn unit_at(&self, territory: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.territory == territory)
    }

    /// Removes and returns the first unit at the given base territory.
    pub fn remove_unit_at(&mut self, territory: &str) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.territory == territory)?;
        Some(self.units.remove(idx))
    }
}
