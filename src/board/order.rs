//! Order types for the three kinds of resolution phases.

use serde::{Deserialize, Serialize};

use crate::board::unit::{PowerId, UnitKind};

/// An order for the movement phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub power: PowerId,
    pub unit_kind: UnitKind,
    /// Base territory id of the ordered unit.
    pub location: String,
    pub kind: OrderKind,
}

/// What a movement-phase order tells the unit to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Hold,
    Move {
        dest: String,
        dest_coast: Option<String>,
        via_convoy: bool,
    },
    /// Supports a hold when `target_dest` is absent, a move otherwise.
    Support {
        target: String,
        target_dest: Option<String>,
    },
    /// A fleet convoying an army from `from` to `to`.
    Convoy { from: String, to: String },
}

impl Order {
    pub fn hold(power: PowerId, unit_kind: UnitKind, location: &str) -> Self {
        Order {
            power,
            unit_kind,
            location: location.to_string(),
            kind: OrderKind::Hold,
        }
    }

    pub fn mov(power: PowerId, unit_kind: UnitKind, location: &str, dest: &str) -> Self {
        Order {
            power,
            unit_kind,
            location: location.to_string(),
            kind: OrderKind::Move {
                dest: dest.to_string(),
                dest_coast: None,
                via_convoy: false,
            },
        }
    }

    pub fn mov_coast(
        power: PowerId,
        unit_kind: UnitKind,
        location: &str,
        dest: &str,
        coast: &str,
    ) -> Self {
        Order {
            power,
            unit_kind,
            location: location.to_string(),
            kind: OrderKind::Move {
                dest: dest.to_string(),
                dest_coast: Some(coast.to_string()),
                via_convoy: false,
            },
        }
    }

    pub fn convoyed_move(
        power: PowerId,
        location: &str,
        dest: &str,
    ) -> Self {
        Order {
            power,
            unit_kind: UnitKind::Army,
            location: location.to_string(),
            kind: OrderKind::Move {
                dest: dest.to_string(),
                dest_coast: None,
                via_convoy: true,
            },
        }
    }

    pub fn support_hold(
        power: PowerId,
        unit_kind: UnitKind,
        location: &str,
        target: &str,
    ) -> Self {
        Order {
            power,
            unit_kind,
            location: location.to_string(),
            kind: OrderKind::Support {
                target: target.to_string(),
                target_dest: None,
            },
        }
    }

    pub fn support_move(
        power: PowerId,
        unit_kind: UnitKind,
        location: &str,
        target: &str,
        target_dest: &str,
    ) -> Self {
        Order {
            power,
            unit_kind,
            location: location.to_string(),
            kind: OrderKind::Support {
                target: target.to_string(),
                target_dest: Some(target_dest.to_string()),
            },
        }
    }

    pub fn convoy(power: PowerId, location: &str, from: &str, to: &str) -> Self {
        Order {
            power,
            unit_kind: UnitKind::Fleet,
            location: location.to_string(),
            kind: OrderKind::Convoy {
                from: from.to_string(),
                to: to.to_string(),
            },
        }
    }

    /// Destination of a move order, if this is one.
    pub fn move_dest(&self) -> Option<&str> {
        match &self.kind {
            OrderKind::Move { dest, .. } => Some(dest),
            _ => None,
        }
    }
}

/// A retreat-phase order. `dest: None` disbands the unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetreatOrder {
    pub power: PowerId,
    pub location: String,
    pub dest: Option<String>,
}

impl RetreatOrder {
    pub fn to(power: PowerId, location: &str, dest: &str) -> Self {
        RetreatOrder {
            power,
            location: location.to_string(),
            dest: Some(dest.to_string()),
        }
    }

    pub fn disband(power: PowerId, location: &str) -> Self {
        RetreatOrder {
            power,
            location: location.to_string(),
            dest: None,
        }
    }
}

/// A winter adjustment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOrder {
    pub power: PowerId,
    pub kind: BuildOrderKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOrderKind {
    Build {
        unit_kind: UnitKind,
        location: String,
        coast: Option<String>,
    },
    Disband { location: String },
}

impl BuildOrder {
    pub fn build(power: PowerId, unit_kind: UnitKind, location: &str) -> Self {
        BuildOrder {
            power,
            kind: BuildOrderKind::Build {
                unit_kind,
                location: location.to_string(),
                coast: None,
            },
        }
    }

    pub fn build_coast(power: PowerId, location: &str, coast: &str) -> Self {
        BuildOrder {
            power,
            kind: BuildOrderKind::Build {
                unit_kind: UnitKind::Fleet,
                location: location.to_string(),
                coast: Some(coast.to_string()),
            },
        }
    }

    pub fn disband(power: PowerId, location: &str) -> Self {
        BuildOrder {
            power,
            kind: BuildOrderKind::Disband {
                location: location.to_string(),
            },
        }
    }
}

/// Any order, as recorded in a resolution log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmittedOrder {
    Turn(Order),
    Retreat(RetreatOrder),
    Adjustment(BuildOrder),
}
