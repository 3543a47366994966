use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use router_abi::v4::{
    BurnPositionParams, ClearOrTakeParams, CloseCurrencyParams, DecreaseLiquidityParams, ExactInputParams,
    ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams, IncreaseLiquidityParams, MintPositionParams,
    SettleAllParams, SettlePairParams, SettleParams, SweepParams, TakeAllParams, TakePairParams, TakeParams,
    TakePortionParams, UnwrapParams, WrapParams,
};

/// Pool-manager action selector. Inner-layer codes use the full 8 bits, there
/// is no revert-tolerance flag: a failed action aborts the whole nested batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[repr(u8)]
pub enum V4ActionType {
    IncreaseLiquidity = 0x00,
    DecreaseLiquidity = 0x01,
    MintPosition = 0x02,
    BurnPosition = 0x03,
    SwapExactInSingle = 0x06,
    SwapExactIn = 0x07,
    SwapExactOutSingle = 0x08,
    SwapExactOut = 0x09,
    Settle = 0x0b,
    SettleAll = 0x0c,
    SettlePair = 0x0d,
    Take = 0x0e,
    TakeAll = 0x0f,
    TakePortion = 0x10,
    TakePair = 0x11,
    CloseCurrency = 0x12,
    ClearOrTake = 0x13,
    Sweep = 0x14,
    Wrap = 0x15,
    Unwrap = 0x16,
}

impl V4ActionType {
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

/// One pool-manager action with its typed parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum V4Action {
    IncreaseLiquidity(IncreaseLiquidityParams),
    DecreaseLiquidity(DecreaseLiquidityParams),
    MintPosition(MintPositionParams),
    BurnPosition(BurnPositionParams),
    SwapExactInSingle(ExactInputSingleParams),
    SwapExactIn(ExactInputParams),
    SwapExactOutSingle(ExactOutputSingleParams),
    SwapExactOut(ExactOutputParams),
    Settle(SettleParams),
    SettleAll(SettleAllParams),
    SettlePair(SettlePairParams),
    Take(TakeParams),
    TakeAll(TakeAllParams),
    TakePortion(TakePortionParams),
    TakePair(TakePairParams),
    CloseCurrency(CloseCurrencyParams),
    ClearOrTake(ClearOrTakeParams),
    Sweep(SweepParams),
    Wrap(WrapParams),
    Unwrap(UnwrapParams),
}

impl V4Action {
    pub fn action_type(&self) -> V4ActionType {
        match self {
            V4Action::IncreaseLiquidity(_) => V4ActionType::IncreaseLiquidity,
            V4Action::DecreaseLiquidity(_) => V4ActionType::DecreaseLiquidity,
            V4Action::MintPosition(_) => V4ActionType::MintPosition,
            V4Action::BurnPosition(_) => V4ActionType::BurnPosition,
            V4Action::SwapExactInSingle(_) => V4ActionType::SwapExactInSingle,
            V4Action::SwapExactIn(_) => V4ActionType::SwapExactIn,
            V4Action::SwapExactOutSingle(_) => V4ActionType::SwapExactOutSingle,
            V4Action::SwapExactOut(_) => V4ActionType::SwapExactOut,
            V4Action::Settle(_) => V4ActionType::Settle,
            V4Action::SettleAll(_) => V4ActionType::SettleAll,
            V4Action::SettlePair(_) => V4ActionType::SettlePair,
            V4Action::Take(_) => V4ActionType::Take,
            V4Action::TakeAll(_) => V4ActionType::TakeAll,
            V4Action::TakePortion(_) => V4ActionType::TakePortion,
            V4Action::TakePair(_) => V4ActionType::TakePair,
            V4Action::CloseCurrency(_) => V4ActionType::CloseCurrency,
            V4Action::ClearOrTake(_) => V4ActionType::ClearOrTake,
            V4Action::Sweep(_) => V4ActionType::Sweep,
            V4Action::Wrap(_) => V4ActionType::Wrap,
            V4Action::Unwrap(_) => V4ActionType::Unwrap,
        }
    }
}

/// Ordered, append-only batch of pool-manager actions, executed atomically
/// inside the pool manager as the payload of one outer V4_SWAP command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct V4ActionPlan {
    pub actions_vec: Vec<V4Action>,
}

impl V4ActionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, action: V4Action) -> &mut Self {
        self.actions_vec.push(action);
        self
    }

    pub fn get(&self, idx: usize) -> Option<&V4Action> {
        self.actions_vec.get(idx)
    }

    pub fn len(&self) -> usize {
        self.actions_vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions_vec.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn action_codes_match_wire_numbering() {
        assert_eq!(V4ActionType::MintPosition.code(), 0x02);
        assert_eq!(V4ActionType::SwapExactInSingle.code(), 0x06);
        assert_eq!(V4ActionType::SettleAll.code(), 0x0c);
        assert_eq!(V4ActionType::TakeAll.code(), 0x0f);
        assert_eq!(V4ActionType::Unwrap.code(), 0x16);
    }

    #[test]
    fn action_codes_are_unique() {
        let codes: Vec<u8> = V4ActionType::iter().map(|a| a.code()).collect();
        let mut deduped = codes.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(codes.len(), deduped.len());
    }
}
