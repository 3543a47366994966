pub use command_decoder::UniversalRouterDecoder;
pub use command_encoder::UniversalRouterEncoder;
pub use helpers::EncoderHelper;
pub use schema::{command_byte, lookup_action, lookup_command, COMMAND_TYPE_MASK, FLAG_ALLOW_REVERT};
pub use v4_actions_codec::{V4ActionsDecoder, V4ActionsEncoder};
pub use v4_path::V4PathEncoder;
pub use v4_swap_encoder::V4SwapPlanBuilder;

mod command_decoder;
mod command_encoder;
mod helpers;
mod schema;
mod v4_actions_codec;
mod v4_path;
mod v4_swap_encoder;
