pub use actions::{V4Action, V4ActionPlan, V4ActionType};
pub use commands::{CommandType, PlannedCommand, RouterCommandPlan, UniversalRouterCommand};
pub use error::RouterCodecError;

mod actions;
mod commands;
mod error;
