pub use pool_key::{PoolId, PoolKeyHelper, TruncatedPoolId};
pub use position::{PositionInfo, EMPTY_POSITION_INFO};

pub mod pool_key;
pub mod position;
pub mod tick;
