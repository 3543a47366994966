use std::collections::HashMap;

use alloy_primitives::Bytes;
use alloy_sol_types::SolValue;
use lazy_static::lazy_static;

use router_abi::universal_router::{
    BalanceCheckErc20Params, PayPortionParams, Permit2PermitBatchParams, Permit2PermitParams,
    Permit2TransferFromBatchParams, Permit2TransferFromParams, SweepTokenParams, TransferParams, UnwrapWethParams,
    V2SwapExactInParams, V2SwapExactOutParams, V3SwapExactInParams, V3SwapExactOutParams, V4InitializePoolParams,
    WrapEthParams,
};
use router_abi::v4::{
    BurnPositionParams, ClearOrTakeParams, CloseCurrencyParams, DecreaseLiquidityParams, ExactInputParams,
    ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams, IncreaseLiquidityParams, MintPositionParams,
    SettleAllParams, SettlePairParams, SettleParams, SweepParams, TakeAllParams, TakePairParams, TakeParams,
    TakePortionParams, UnwrapParams, WrapParams,
};
use router_types::{CommandType, RouterCodecError, UniversalRouterCommand, V4Action, V4ActionType};

use crate::command_decoder::UniversalRouterDecoder;
use crate::v4_actions_codec::V4ActionsDecoder;

/// Outer command byte layout: bits 0-6 select the variant, bit 7 tolerates a
/// revert of that command without aborting the batch.
pub const COMMAND_TYPE_MASK: u8 = 0x7f;
pub const FLAG_ALLOW_REVERT: u8 = 0x80;

/// The single place the revert bit is placed into a command byte.
pub fn command_byte(command_type: CommandType, allow_revert: bool) -> u8 {
    let code = command_type.code() & COMMAND_TYPE_MASK;
    if allow_revert {
        FLAG_ALLOW_REVERT | code
    } else {
        code
    }
}

/// Registry entry for one outer command variant: its code, display name and
/// the typed decoder for its input blob.
#[derive(Debug)]
pub struct CommandSchema {
    pub command_type: CommandType,
    pub name: &'static str,
    pub decode_input: fn(&[u8]) -> Result<UniversalRouterCommand, RouterCodecError>,
}

/// Registry entry for one inner pool-manager action variant.
#[derive(Debug)]
pub struct ActionSchema {
    pub action_type: V4ActionType,
    pub name: &'static str,
    pub decode_input: fn(&[u8]) -> Result<V4Action, RouterCodecError>,
}

lazy_static! {
    static ref COMMAND_SCHEMAS: HashMap<u8, CommandSchema> = build_command_schemas();
    static ref ACTION_SCHEMAS: HashMap<u8, ActionSchema> = build_action_schemas();
}

pub fn lookup_command(code: u8, position: usize) -> Result<&'static CommandSchema, RouterCodecError> {
    COMMAND_SCHEMAS.get(&code).ok_or(RouterCodecError::UnknownCommandCode { code, position })
}

pub fn lookup_action(code: u8, position: usize) -> Result<&'static ActionSchema, RouterCodecError> {
    ACTION_SCHEMAS.get(&code).ok_or(RouterCodecError::UnknownCommandCode { code, position })
}

fn register_command(
    schemas: &mut HashMap<u8, CommandSchema>,
    command_type: CommandType,
    name: &'static str,
    decode_input: fn(&[u8]) -> Result<UniversalRouterCommand, RouterCodecError>,
) {
    let previous = schemas.insert(command_type.code(), CommandSchema { command_type, name, decode_input });
    debug_assert!(previous.is_none(), "duplicate command code {:#04x}", command_type.code());
}

fn register_action(
    schemas: &mut HashMap<u8, ActionSchema>,
    action_type: V4ActionType,
    name: &'static str,
    decode_input: fn(&[u8]) -> Result<V4Action, RouterCodecError>,
) {
    let previous = schemas.insert(action_type.code(), ActionSchema { action_type, name, decode_input });
    debug_assert!(previous.is_none(), "duplicate action code {:#04x}", action_type.code());
}

fn build_command_schemas() -> HashMap<u8, CommandSchema> {
    let mut schemas = HashMap::new();

    register_command(&mut schemas, CommandType::V3SwapExactIn, "V3_SWAP_EXACT_IN", |data| {
        V3SwapExactInParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::V3SwapExactIn)
            .map_err(|e| RouterCodecError::field_decode("V3_SWAP_EXACT_IN", e))
    });
    register_command(&mut schemas, CommandType::V3SwapExactOut, "V3_SWAP_EXACT_OUT", |data| {
        V3SwapExactOutParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::V3SwapExactOut)
            .map_err(|e| RouterCodecError::field_decode("V3_SWAP_EXACT_OUT", e))
    });
    register_command(&mut schemas, CommandType::Permit2TransferFrom, "PERMIT2_TRANSFER_FROM", |data| {
        Permit2TransferFromParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::Permit2TransferFrom)
            .map_err(|e| RouterCodecError::field_decode("PERMIT2_TRANSFER_FROM", e))
    });
    register_command(&mut schemas, CommandType::Permit2PermitBatch, "PERMIT2_PERMIT_BATCH", |data| {
        Permit2PermitBatchParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::Permit2PermitBatch)
            .map_err(|e| RouterCodecError::field_decode("PERMIT2_PERMIT_BATCH", e))
    });
    register_command(&mut schemas, CommandType::Sweep, "SWEEP", |data| {
        SweepTokenParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::Sweep)
            .map_err(|e| RouterCodecError::field_decode("SWEEP", e))
    });
    register_command(&mut schemas, CommandType::Transfer, "TRANSFER", |data| {
        TransferParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::Transfer)
            .map_err(|e| RouterCodecError::field_decode("TRANSFER", e))
    });
    register_command(&mut schemas, CommandType::PayPortion, "PAY_PORTION", |data| {
        PayPortionParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::PayPortion)
            .map_err(|e| RouterCodecError::field_decode("PAY_PORTION", e))
    });
    register_command(&mut schemas, CommandType::V2SwapExactIn, "V2_SWAP_EXACT_IN", |data| {
        V2SwapExactInParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::V2SwapExactIn)
            .map_err(|e| RouterCodecError::field_decode("V2_SWAP_EXACT_IN", e))
    });
    register_command(&mut schemas, CommandType::V2SwapExactOut, "V2_SWAP_EXACT_OUT", |data| {
        V2SwapExactOutParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::V2SwapExactOut)
            .map_err(|e| RouterCodecError::field_decode("V2_SWAP_EXACT_OUT", e))
    });
    register_command(&mut schemas, CommandType::Permit2Permit, "PERMIT2_PERMIT", |data| {
        Permit2PermitParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::Permit2Permit)
            .map_err(|e| RouterCodecError::field_decode("PERMIT2_PERMIT", e))
    });
    register_command(&mut schemas, CommandType::WrapEth, "WRAP_ETH", |data| {
        WrapEthParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::WrapEth)
            .map_err(|e| RouterCodecError::field_decode("WRAP_ETH", e))
    });
    register_command(&mut schemas, CommandType::UnwrapWeth, "UNWRAP_WETH", |data| {
        UnwrapWethParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::UnwrapWeth)
            .map_err(|e| RouterCodecError::field_decode("UNWRAP_WETH", e))
    });
    register_command(&mut schemas, CommandType::Permit2TransferFromBatch, "PERMIT2_TRANSFER_FROM_BATCH", |data| {
        Permit2TransferFromBatchParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::Permit2TransferFromBatch)
            .map_err(|e| RouterCodecError::field_decode("PERMIT2_TRANSFER_FROM_BATCH", e))
    });
    register_command(&mut schemas, CommandType::BalanceCheckErc20, "BALANCE_CHECK_ERC20", |data| {
        BalanceCheckErc20Params::abi_decode_params(data, true)
            .map(UniversalRouterCommand::BalanceCheckErc20)
            .map_err(|e| RouterCodecError::field_decode("BALANCE_CHECK_ERC20", e))
    });
    register_command(&mut schemas, CommandType::V4Swap, "V4_SWAP", |data| {
        V4ActionsDecoder::unpack_actions(data).map(UniversalRouterCommand::V4Swap)
    });
    register_command(&mut schemas, CommandType::V4InitializePool, "V4_INITIALIZE_POOL", |data| {
        V4InitializePoolParams::abi_decode_params(data, true)
            .map(UniversalRouterCommand::V4InitializePool)
            .map_err(|e| RouterCodecError::field_decode("V4_INITIALIZE_POOL", e))
    });
    register_command(&mut schemas, CommandType::V4PositionManagerCall, "V4_POSITION_MANAGER_CALL", |data| {
        // raw calldata passthrough, selector-checked on-chain
        Ok(UniversalRouterCommand::V4PositionManagerCall(Bytes::from(data.to_vec())))
    });
    register_command(&mut schemas, CommandType::ExecuteSubPlan, "EXECUTE_SUB_PLAN", |data| {
        let (commands, inputs) = <(Bytes, Vec<Bytes>)>::abi_decode_params(data, true)
            .map_err(|e| RouterCodecError::field_decode("EXECUTE_SUB_PLAN", e))?;
        UniversalRouterDecoder::decode(&commands, &inputs).map(UniversalRouterCommand::ExecuteSubPlan)
    });

    schemas
}

fn build_action_schemas() -> HashMap<u8, ActionSchema> {
    let mut schemas = HashMap::new();

    register_action(&mut schemas, V4ActionType::IncreaseLiquidity, "INCREASE_LIQUIDITY", |data| {
        IncreaseLiquidityParams::abi_decode_params(data, true)
            .map(V4Action::IncreaseLiquidity)
            .map_err(|e| RouterCodecError::field_decode("INCREASE_LIQUIDITY", e))
    });
    register_action(&mut schemas, V4ActionType::DecreaseLiquidity, "DECREASE_LIQUIDITY", |data| {
        DecreaseLiquidityParams::abi_decode_params(data, true)
            .map(V4Action::DecreaseLiquidity)
            .map_err(|e| RouterCodecError::field_decode("DECREASE_LIQUIDITY", e))
    });
    register_action(&mut schemas, V4ActionType::MintPosition, "MINT_POSITION", |data| {
        MintPositionParams::abi_decode_params(data, true)
            .map(V4Action::MintPosition)
            .map_err(|e| RouterCodecError::field_decode("MINT_POSITION", e))
    });
    register_action(&mut schemas, V4ActionType::BurnPosition, "BURN_POSITION", |data| {
        BurnPositionParams::abi_decode_params(data, true)
            .map(V4Action::BurnPosition)
            .map_err(|e| RouterCodecError::field_decode("BURN_POSITION", e))
    });
    register_action(&mut schemas, V4ActionType::SwapExactInSingle, "SWAP_EXACT_IN_SINGLE", |data| {
        ExactInputSingleParams::abi_decode(data, true)
            .map(V4Action::SwapExactInSingle)
            .map_err(|e| RouterCodecError::field_decode("SWAP_EXACT_IN_SINGLE", e))
    });
    register_action(&mut schemas, V4ActionType::SwapExactIn, "SWAP_EXACT_IN", |data| {
        ExactInputParams::abi_decode(data, true)
            .map(V4Action::SwapExactIn)
            .map_err(|e| RouterCodecError::field_decode("SWAP_EXACT_IN", e))
    });
    register_action(&mut schemas, V4ActionType::SwapExactOutSingle, "SWAP_EXACT_OUT_SINGLE", |data| {
        ExactOutputSingleParams::abi_decode(data, true)
            .map(V4Action::SwapExactOutSingle)
            .map_err(|e| RouterCodecError::field_decode("SWAP_EXACT_OUT_SINGLE", e))
    });
    register_action(&mut schemas, V4ActionType::SwapExactOut, "SWAP_EXACT_OUT", |data| {
        ExactOutputParams::abi_decode(data, true)
            .map(V4Action::SwapExactOut)
            .map_err(|e| RouterCodecError::field_decode("SWAP_EXACT_OUT", e))
    });
    register_action(&mut schemas, V4ActionType::Settle, "SETTLE", |data| {
        SettleParams::abi_decode_params(data, true)
            .map(V4Action::Settle)
            .map_err(|e| RouterCodecError::field_decode("SETTLE", e))
    });
    register_action(&mut schemas, V4ActionType::SettleAll, "SETTLE_ALL", |data| {
        SettleAllParams::abi_decode_params(data, true)
            .map(V4Action::SettleAll)
            .map_err(|e| RouterCodecError::field_decode("SETTLE_ALL", e))
    });
    register_action(&mut schemas, V4ActionType::SettlePair, "SETTLE_PAIR", |data| {
        SettlePairParams::abi_decode_params(data, true)
            .map(V4Action::SettlePair)
            .map_err(|e| RouterCodecError::field_decode("SETTLE_PAIR", e))
    });
    register_action(&mut schemas, V4ActionType::Take, "TAKE", |data| {
        TakeParams::abi_decode_params(data, true)
            .map(V4Action::Take)
            .map_err(|e| RouterCodecError::field_decode("TAKE", e))
    });
    register_action(&mut schemas, V4ActionType::TakeAll, "TAKE_ALL", |data| {
        TakeAllParams::abi_decode_params(data, true)
            .map(V4Action::TakeAll)
            .map_err(|e| RouterCodecError::field_decode("TAKE_ALL", e))
    });
    register_action(&mut schemas, V4ActionType::TakePortion, "TAKE_PORTION", |data| {
        TakePortionParams::abi_decode_params(data, true)
            .map(V4Action::TakePortion)
            .map_err(|e| RouterCodecError::field_decode("TAKE_PORTION", e))
    });
    register_action(&mut schemas, V4ActionType::TakePair, "TAKE_PAIR", |data| {
        TakePairParams::abi_decode_params(data, true)
            .map(V4Action::TakePair)
            .map_err(|e| RouterCodecError::field_decode("TAKE_PAIR", e))
    });
    register_action(&mut schemas, V4ActionType::CloseCurrency, "CLOSE_CURRENCY", |data| {
        CloseCurrencyParams::abi_decode_params(data, true)
            .map(V4Action::CloseCurrency)
            .map_err(|e| RouterCodecError::field_decode("CLOSE_CURRENCY", e))
    });
    register_action(&mut schemas, V4ActionType::ClearOrTake, "CLEAR_OR_TAKE", |data| {
        ClearOrTakeParams::abi_decode_params(data, true)
            .map(V4Action::ClearOrTake)
            .map_err(|e| RouterCodecError::field_decode("CLEAR_OR_TAKE", e))
    });
    register_action(&mut schemas, V4ActionType::Sweep, "SWEEP", |data| {
        SweepParams::abi_decode_params(data, true)
            .map(V4Action::Sweep)
            .map_err(|e| RouterCodecError::field_decode("SWEEP", e))
    });
    register_action(&mut schemas, V4ActionType::Wrap, "WRAP", |data| {
        WrapParams::abi_decode_params(data, true)
            .map(V4Action::Wrap)
            .map_err(|e| RouterCodecError::field_decode("WRAP", e))
    });
    register_action(&mut schemas, V4ActionType::Unwrap, "UNWRAP", |data| {
        UnwrapParams::abi_decode_params(data, true)
            .map(V4Action::Unwrap)
            .map_err(|e| RouterCodecError::field_decode("UNWRAP", e))
    });

    schemas
}
