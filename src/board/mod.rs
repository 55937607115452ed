//! Board representation and game-state types.
//!
//! Contains the territory graph, units, powers, orders, and the overall
//! game state consumed and produced by the resolver.

pub mod map_data;
pub mod order;
pub mod state;
pub mod territory;
pub mod unit;

pub use map_data::{standard_map, SUPPLY_CENTER_COUNT, TERRITORY_COUNT};
pub use order::{BuildOrder, BuildOrderKind, Order, OrderKind, RetreatOrder, SubmittedOrder};
pub use state::{DislodgedUnit, GameState, OrderResolution, Phase, TurnResult};
pub use territory::{split_qualified, Coast, Territory, TerritoryKind, TerritoryMap};
pub use unit::{Power, PowerId, Unit, UnitKind, ALL_POWERS};
