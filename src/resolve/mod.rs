//! Turn adjudication.
//!
//! Three entry points, one per phase family: [`resolve`] for the movement
//! phases, [`resolve_retreats`], and [`resolve_builds`]. Each takes the
//! prior state by reference and returns a fresh state inside a
//! [`TurnResult`](crate::board::TurnResult); the input is never mutated.
//! Rule violations never surface as errors, only as failed entries in the
//! resolution log. `ResolveError` is reserved for caller misuse.

pub mod build;
pub mod movement;
pub mod normalize;
pub mod phase;
pub mod retreat;
pub mod validate;

pub use build::{adjustment, available_build_locations, resolve_builds};
pub use movement::resolve;
pub use retreat::resolve_retreats;

use crate::board::Phase;

/// Calling a resolution entry point in the wrong phase.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("expected an orders phase, state is in {0}")]
    NotOrdersPhase(Phase),
    #[error("expected a retreat phase, state is in {0}")]
    NotRetreatPhase(Phase),
    #[error("expected the builds phase, state is in {0}")]
    NotBuildPhase(Phase),
    #[error("game is finished")]
    GameFinished,
}
