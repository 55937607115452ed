//! Game state, phases, and per-turn results.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::map_data::{standard_map, OPENING_UNITS};
use crate::board::order::SubmittedOrder;
use crate::board::territory::TerritoryMap;
use crate::board::unit::{Power, PowerId, Unit, ALL_POWERS};

/// Where the game stands in its fixed yearly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    SpringOrders,
    SpringRetreats,
    FallOrders,
    FallRetreats,
    WinterBuilds,
}

impl Phase {
    /// The phase that follows this one. Winter wraps to spring.
    pub const fn next(self) -> Phase {
        match self {
            Phase::SpringOrders => Phase::SpringRetreats,
            Phase::SpringRetreats => Phase::FallOrders,
            Phase::FallOrders => Phase::FallRetreats,
            Phase::FallRetreats => Phase::WinterBuilds,
            Phase::WinterBuilds => Phase::SpringOrders,
        }
    }

    pub const fn is_orders(self) -> bool {
        matches!(self, Phase::SpringOrders | Phase::FallOrders)
    }

    pub const fn is_retreats(self) -> bool {
        matches!(self, Phase::SpringRetreats | Phase::FallRetreats)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Phase::SpringOrders => "spring orders",
            Phase::SpringRetreats => "spring retreats",
            Phase::FallOrders => "fall orders",
            Phase::FallRetreats => "fall retreats",
            Phase::WinterBuilds => "winter builds",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit forced out of its territory, awaiting retreat or disband.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DislodgedUnit {
    pub unit: Unit,
    pub from: String,
    pub attacker_from: String,
    /// Legal retreat destinations, coast-qualified where required.
    pub retreat_options: Vec<String>,
}

/// The complete board position at one point in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub year: u16,
    pub phase: Phase,
    pub powers: BTreeMap<PowerId, Power>,
    pub map: Arc<TerritoryMap>,
    pub victory_centers: usize,
    pub finished: bool,
    pub winner: Option<PowerId>,
    /// Dislodgements carried from the last orders phase into retreats.
    pub dislodged: Vec<DislodgedUnit>,
}

impl GameState {
    /// The 1901 opening position: 22 units, home centers owned,
    /// 12 neutral centers unowned.
    pub fn standard() -> Self {
        let map = Arc::new(standard_map());
        let mut powers: BTreeMap<PowerId, Power> =
            ALL_POWERS.iter().map(|&p| (p, Power::new(p))).collect();

        for t in map.iter() {
            if let Some(home) = t.home {
                powers
                    .get_mut(&home)
                    .unwrap()
                    .supply_centers
                    .insert(t.id.clone());
            }
        }
        for &(power, kind, territory, coast) in OPENING_UNITS {
            powers.get_mut(&power).unwrap().units.push(Unit {
                kind,
                power,
                territory: territory.to_string(),
                coast: coast.map(str::to_string),
            });
        }

        GameState {
            year: 1901,
            phase: Phase::SpringOrders,
            powers,
            map,
            victory_centers: 18,
            finished: false,
            winner: None,
            dislodged: Vec::new(),
        }
    }

    pub fn power(&self, id: PowerId) -> &Power {
        &self.powers[&id]
    }

    pub fn power_mut(&mut self, id: PowerId) -> &mut Power {
        self.powers.get_mut(&id).unwrap()
    }

    /// The unit occupying the given base territory, if any.
    pub fn unit_at(&self, territory: &str) -> Option<&Unit> {
        self.powers.values().find_map(|p| p.unit_at(territory))
    }

    /// Total units on the board.
    pub fn unit_count(&self) -> usize {
        self.powers.values().map(|p| p.units.len()).sum()
    }
}

/// The recorded outcome of a single submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResolution {
    pub order: SubmittedOrder,
    pub succeeded: bool,
    pub reason: Option<String>,
}

/// Everything produced by resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub orders: Vec<SubmittedOrder>,
    pub resolutions: Vec<OrderResolution>,
    pub dislodged: Vec<DislodgedUnit>,
    pub state: GameState,
}
