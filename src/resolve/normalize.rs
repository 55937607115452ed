//! Order intake: pair submitted orders with actual units and fill in
//! holds for anything left unordered.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::order::{Order, OrderKind, SubmittedOrder};
use crate::board::state::{GameState, OrderResolution};
use crate::board::territory::split_qualified;
use crate::board::unit::PowerId;

/// Cleans one round of submitted orders against the board.
///
/// Returns the accepted orders, exactly one per unit (holds synthesized
/// for unordered units), plus failure records for orders that named no
/// unit. Orders with an empty location or an empty move destination are
/// dropped without a record. The first order per unit wins.
pub fn normalize_orders(
    state: &GameState,
    orders_by_power: &BTreeMap<PowerId, Vec<Order>>,
) -> (Vec<Order>, Vec<OrderResolution>) {
    let mut accepted: Vec<Order> = Vec::new();
    let mut rejected: Vec<OrderResolution> = Vec::new();
    let mut ordered: BTreeSet<(PowerId, String)> = BTreeSet::new();

    for (&power, orders) in orders_by_power {
        for order in orders {
            if order.location.is_empty() {
                continue;
            }
            if matches!(&order.kind, OrderKind::Move { dest, .. } if dest.is_empty()) {
                continue;
            }
            let (base, _) = split_qualified(&order.location);
            let Some(unit) = state.power(power).unit_at(base) else {
                rejected.push(OrderResolution {
                    order: SubmittedOrder::Turn(order.clone()),
                    succeeded: false,
                    reason: Some(format!("no unit at {}", order.location)),
                });
                continue;
            };
            if !ordered.insert((power, base.to_string())) {
                continue;
            }
            let mut order = order.clone();
            order.power = power;
            order.location = base.to_string();
            // The board is authoritative on what kind of unit stands there.
            order.unit_kind = unit.kind;
            accepted.push(order);
        }
    }

    for power in state.powers.values() {
        for unit in &power.units {
            if !ordered.contains(&(power.id, unit.territory.clone())) {
                accepted.push(Order::hold(power.id, unit.kind, &unit.territory));
            }
        }
    }

    (accepted, rejected)
}
