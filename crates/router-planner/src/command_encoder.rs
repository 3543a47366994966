use alloy_primitives::{Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use tracing::debug;

use router_abi::IUniversalRouter;
use router_types::{RouterCommandPlan, UniversalRouterCommand};

use crate::schema::command_byte;
use crate::v4_actions_codec::V4ActionsEncoder;

pub struct UniversalRouterEncoder;

impl UniversalRouterEncoder {
    /// ABI encoding of one command's input blob, fields in schema order.
    pub fn encode_input(command: &UniversalRouterCommand) -> Bytes {
        match command {
            UniversalRouterCommand::V3SwapExactIn(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::V3SwapExactOut(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::Permit2TransferFrom(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::Permit2PermitBatch(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::Sweep(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::Transfer(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::PayPortion(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::V2SwapExactIn(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::V2SwapExactOut(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::Permit2Permit(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::WrapEth(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::UnwrapWeth(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::Permit2TransferFromBatch(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::BalanceCheckErc20(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::V4Swap(plan) => V4ActionsEncoder::pack_actions(plan),
            UniversalRouterCommand::V4InitializePool(params) => params.abi_encode_params().into(),
            UniversalRouterCommand::V4PositionManagerCall(calldata) => calldata.clone(),
            UniversalRouterCommand::ExecuteSubPlan(sub_plan) => {
                let (commands, inputs) = Self::serialize(sub_plan);
                (commands, inputs).abi_encode_params().into()
            }
        }
    }

    /// Produces the parallel (commands, inputs) arrays the router executes.
    /// Non-destructive and idempotent; an empty plan yields two empty
    /// sequences, a legal no-op on submission.
    pub fn serialize(plan: &RouterCommandPlan) -> (Bytes, Vec<Bytes>) {
        let mut commands: Vec<u8> = Vec::with_capacity(plan.len());
        let mut inputs: Vec<Bytes> = Vec::with_capacity(plan.len());
        for planned in plan.commands_vec.iter() {
            commands.push(command_byte(planned.command.command_type(), planned.allow_revert));
            inputs.push(Self::encode_input(&planned.command));
        }
        (commands.into(), inputs)
    }

    /// Full `execute(commands, inputs, deadline)` calldata for the router.
    pub fn encode_execute(plan: &RouterCommandPlan, deadline: U256) -> Bytes {
        let (commands, inputs) = Self::serialize(plan);
        debug!("encode_execute: {} commands, deadline {}", plan.len(), deadline);
        IUniversalRouter::executeCall { commands, inputs, deadline }.abi_encode().into()
    }
}
