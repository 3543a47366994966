pub use erc20::IERC20;
pub use universal_router::IUniversalRouter;

pub mod erc20;
pub mod errors;
pub mod permit2;
pub mod universal_router;
pub mod v4;
