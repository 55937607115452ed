//! Entente adjudication library.
//!
//! Resolves one turn of a seven-power Diplomacy game: given a board state
//! and every power's submitted orders, computes the single consistent
//! outcome — which moves succeed, which units are dislodged, which supply
//! centers change hands, and what phase comes next. The resolution entry
//! points are pure: the input state is never mutated, and every rule
//! violation is reported through the resolution log rather than an error.

pub mod board;
pub mod resolve;

pub use board::{GameState, Order, Phase, PowerId, TurnResult, UnitKind};
pub use resolve::{resolve, resolve_builds, resolve_retreats, ResolveError};
