use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use router_abi::universal_router::{
    BalanceCheckErc20Params, PayPortionParams, Permit2PermitBatchParams, Permit2PermitParams,
    Permit2TransferFromBatchParams, Permit2TransferFromParams, SweepTokenParams, TransferParams, UnwrapWethParams,
    V2SwapExactInParams, V2SwapExactOutParams, V3SwapExactInParams, V3SwapExactOutParams, V4InitializePoolParams,
    WrapEthParams,
};

use crate::actions::V4ActionPlan;

/// Outer command selector. On the wire bits 0-6 carry the code and bit 7 the
/// allow-revert flag, so every code stays below 0x80.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[repr(u8)]
pub enum CommandType {
    V3SwapExactIn = 0x00,
    V3SwapExactOut = 0x01,
    Permit2TransferFrom = 0x02,
    Permit2PermitBatch = 0x03,
    Sweep = 0x04,
    Transfer = 0x05,
    PayPortion = 0x06,
    V2SwapExactIn = 0x08,
    V2SwapExactOut = 0x09,
    Permit2Permit = 0x0a,
    WrapEth = 0x0b,
    UnwrapWeth = 0x0c,
    Permit2TransferFromBatch = 0x0d,
    BalanceCheckErc20 = 0x0e,
    V4Swap = 0x10,
    V4InitializePool = 0x13,
    V4PositionManagerCall = 0x14,
    ExecuteSubPlan = 0x21,
}

impl CommandType {
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

/// One Universal Router command with its typed parameters.
///
/// The nested variants hold recursive plan data rather than pre-serialized
/// payload bytes: V4Swap owns the inner action batch and ExecuteSubPlan owns a
/// full sub-plan, so round-trips stay compositional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UniversalRouterCommand {
    V3SwapExactIn(V3SwapExactInParams),
    V3SwapExactOut(V3SwapExactOutParams),
    Permit2TransferFrom(Permit2TransferFromParams),
    Permit2PermitBatch(Permit2PermitBatchParams),
    Sweep(SweepTokenParams),
    Transfer(TransferParams),
    PayPortion(PayPortionParams),
    V2SwapExactIn(V2SwapExactInParams),
    V2SwapExactOut(V2SwapExactOutParams),
    Permit2Permit(Permit2PermitParams),
    WrapEth(WrapEthParams),
    UnwrapWeth(UnwrapWethParams),
    Permit2TransferFromBatch(Permit2TransferFromBatchParams),
    BalanceCheckErc20(BalanceCheckErc20Params),
    V4Swap(V4ActionPlan),
    V4InitializePool(V4InitializePoolParams),
    /// Raw `modifyLiquidities` calldata, passed through to the position
    /// manager byte-for-byte rather than tuple-encoded.
    V4PositionManagerCall(Bytes),
    ExecuteSubPlan(RouterCommandPlan),
}

impl UniversalRouterCommand {
    pub fn command_type(&self) -> CommandType {
        match self {
            UniversalRouterCommand::V3SwapExactIn(_) => CommandType::V3SwapExactIn,
            UniversalRouterCommand::V3SwapExactOut(_) => CommandType::V3SwapExactOut,
            UniversalRouterCommand::Permit2TransferFrom(_) => CommandType::Permit2TransferFrom,
            UniversalRouterCommand::Permit2PermitBatch(_) => CommandType::Permit2PermitBatch,
            UniversalRouterCommand::Sweep(_) => CommandType::Sweep,
            UniversalRouterCommand::Transfer(_) => CommandType::Transfer,
            UniversalRouterCommand::PayPortion(_) => CommandType::PayPortion,
            UniversalRouterCommand::V2SwapExactIn(_) => CommandType::V2SwapExactIn,
            UniversalRouterCommand::V2SwapExactOut(_) => CommandType::V2SwapExactOut,
            UniversalRouterCommand::Permit2Permit(_) => CommandType::Permit2Permit,
            UniversalRouterCommand::WrapEth(_) => CommandType::WrapEth,
            UniversalRouterCommand::UnwrapWeth(_) => CommandType::UnwrapWeth,
            UniversalRouterCommand::Permit2TransferFromBatch(_) => CommandType::Permit2TransferFromBatch,
            UniversalRouterCommand::BalanceCheckErc20(_) => CommandType::BalanceCheckErc20,
            UniversalRouterCommand::V4Swap(_) => CommandType::V4Swap,
            UniversalRouterCommand::V4InitializePool(_) => CommandType::V4InitializePool,
            UniversalRouterCommand::V4PositionManagerCall(_) => CommandType::V4PositionManagerCall,
            UniversalRouterCommand::ExecuteSubPlan(_) => CommandType::ExecuteSubPlan,
        }
    }
}

/// A command scheduled for execution plus its revert-tolerance flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedCommand {
    pub command: UniversalRouterCommand,
    pub allow_revert: bool,
}

impl PlannedCommand {
    pub fn new(command: UniversalRouterCommand) -> Self {
        Self { command, allow_revert: false }
    }

    pub fn new_allow_revert(command: UniversalRouterCommand) -> Self {
        Self { command, allow_revert: true }
    }
}

/// Ordered, append-only sequence of router commands. Order is on-chain
/// execution order; commands are never reordered once added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterCommandPlan {
    pub commands_vec: Vec<PlannedCommand>,
}

impl RouterCommandPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, command: PlannedCommand) -> &mut Self {
        self.commands_vec.push(command);
        self
    }

    pub fn get(&self, idx: usize) -> Option<&PlannedCommand> {
        self.commands_vec.get(idx)
    }

    pub fn len(&self) -> usize {
        self.commands_vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands_vec.is_empty()
    }
}
