use alloy_primitives::aliases::{U160, U48};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolInterface;

use router_abi::errors::IRouterErrors;
use router_abi::permit2::IAllowanceTransfer;
use router_abi::v4::IPositionManager;
use router_abi::IERC20;
use router_types::{UniversalRouterCommand, V4ActionPlan};

use crate::v4_actions_codec::V4ActionsEncoder;

pub struct EncoderHelper;

impl EncoderHelper {
    /// ERC-20 approval calldata, typically granting Permit2 a max allowance.
    pub fn encode_erc20_approve(spender: Address, amount: U256) -> Bytes {
        IERC20::IERC20Calls::approve(IERC20::approveCall { spender, amount }).abi_encode().into()
    }

    /// Permit2 on-chain allowance calldata for a spender such as the router.
    pub fn encode_permit2_approve(token: Address, spender: Address, amount: U160, expiration: U48) -> Bytes {
        IAllowanceTransfer::IAllowanceTransferCalls::approve(IAllowanceTransfer::approveCall {
            token,
            spender,
            amount,
            expiration,
        })
        .abi_encode()
        .into()
    }

    /// `modifyLiquidities` calldata for driving the position manager directly
    /// with a packed action batch.
    pub fn encode_modify_liquidities(actions: &V4ActionPlan, deadline: U256) -> Bytes {
        IPositionManager::IPositionManagerCalls::modifyLiquidities(IPositionManager::modifyLiquiditiesCall {
            unlockData: V4ActionsEncoder::pack_actions(actions),
            deadline,
        })
        .abi_encode()
        .into()
    }

    /// The V4_POSITION_MANAGER_CALL outer command for an action batch.
    pub fn position_manager_call_command(actions: &V4ActionPlan, deadline: U256) -> UniversalRouterCommand {
        UniversalRouterCommand::V4PositionManagerCall(Self::encode_modify_liquidities(actions, deadline))
    }

    /// Matches revert data against the router's custom error set.
    pub fn match_router_error(data: &[u8]) -> Option<IRouterErrors::IRouterErrorsErrors> {
        IRouterErrors::IRouterErrorsErrors::abi_decode(data, true).ok()
    }
}
