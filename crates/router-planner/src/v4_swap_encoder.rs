use alloy_primitives::{Address, Bytes, U256};
use eyre::{eyre, Result};
use tracing::debug;

use router_abi::v4::{
    ExactInputParams, ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams, PoolKey, SettleAllParams,
    TakeAllParams,
};
use router_entities::PoolKeyHelper;
use router_types::{PlannedCommand, RouterCommandPlan, UniversalRouterCommand, V4Action, V4ActionPlan};

use crate::v4_path::V4PathEncoder;

/// Assembles the canonical swap-settle-take action batches and wraps them
/// into a router plan holding a single V4_SWAP command. Cross-command checks
/// beyond pool membership stay with the caller and the contracts.
pub struct V4SwapPlanBuilder;

impl V4SwapPlanBuilder {
    pub fn exact_in_single(
        pool_key: &PoolKey,
        currency_in: Address,
        amount_in: u128,
        amount_out_minimum: u128,
    ) -> Result<RouterCommandPlan> {
        let currency_out = PoolKeyHelper::other_currency(pool_key, currency_in)
            .ok_or_else(|| eyre!("CURRENCY_NOT_IN_POOL {currency_in}"))?;

        let mut actions = V4ActionPlan::new();
        actions.add(V4Action::SwapExactInSingle(ExactInputSingleParams {
            poolKey: pool_key.clone(),
            zeroForOne: PoolKeyHelper::zero_for_one(pool_key, currency_in),
            amountIn: amount_in,
            amountOutMinimum: amount_out_minimum,
            hookData: Bytes::new(),
        }));

        Ok(Self::settle_and_wrap(actions, currency_in, U256::from(amount_in), currency_out, U256::from(amount_out_minimum)))
    }

    pub fn exact_in(
        pools: &[PoolKey],
        currency_in: Address,
        amount_in: u128,
        amount_out_minimum: u128,
    ) -> Result<RouterCommandPlan> {
        let path = V4PathEncoder::encode_multihop_exact_in_path(pools, currency_in)?;
        let currency_out = path.last().ok_or_else(|| eyre!("EMPTY_POOL_PATH"))?.intermediateCurrency;

        let mut actions = V4ActionPlan::new();
        actions.add(V4Action::SwapExactIn(ExactInputParams {
            currencyIn: currency_in,
            path,
            amountIn: amount_in,
            amountOutMinimum: amount_out_minimum,
        }));

        Ok(Self::settle_and_wrap(actions, currency_in, U256::from(amount_in), currency_out, U256::from(amount_out_minimum)))
    }

    pub fn exact_out_single(
        pool_key: &PoolKey,
        currency_in: Address,
        amount_out: u128,
        amount_in_maximum: u128,
    ) -> Result<RouterCommandPlan> {
        let currency_out = PoolKeyHelper::other_currency(pool_key, currency_in)
            .ok_or_else(|| eyre!("CURRENCY_NOT_IN_POOL {currency_in}"))?;

        let mut actions = V4ActionPlan::new();
        actions.add(V4Action::SwapExactOutSingle(ExactOutputSingleParams {
            poolKey: pool_key.clone(),
            zeroForOne: PoolKeyHelper::zero_for_one(pool_key, currency_in),
            amountOut: amount_out,
            amountInMaximum: amount_in_maximum,
            hookData: Bytes::new(),
        }));

        Ok(Self::settle_and_wrap(actions, currency_in, U256::from(amount_in_maximum), currency_out, U256::from(amount_out)))
    }

    pub fn exact_out(
        pools: &[PoolKey],
        currency_out: Address,
        amount_out: u128,
        amount_in_maximum: u128,
    ) -> Result<RouterCommandPlan> {
        let path = V4PathEncoder::encode_multihop_exact_out_path(pools, currency_out)?;
        let currency_in = path.first().ok_or_else(|| eyre!("EMPTY_POOL_PATH"))?.intermediateCurrency;

        let mut actions = V4ActionPlan::new();
        actions.add(V4Action::SwapExactOut(ExactOutputParams {
            currencyOut: currency_out,
            path,
            amountOut: amount_out,
            amountInMaximum: amount_in_maximum,
        }));

        Ok(Self::settle_and_wrap(actions, currency_in, U256::from(amount_in_maximum), currency_out, U256::from(amount_out)))
    }

    /// Settle the input side, take the output side, wrap into one V4_SWAP.
    fn settle_and_wrap(
        mut actions: V4ActionPlan,
        currency_in: Address,
        settle_amount: U256,
        currency_out: Address,
        take_minimum: U256,
    ) -> RouterCommandPlan {
        actions.add(V4Action::SettleAll(SettleAllParams { currency: currency_in, maxAmount: settle_amount }));
        actions.add(V4Action::TakeAll(TakeAllParams { currency: currency_out, minAmount: take_minimum }));
        debug!("v4 swap plan: {} actions, {currency_in} -> {currency_out}", actions.len());

        let mut plan = RouterCommandPlan::new();
        plan.add(PlannedCommand::new(UniversalRouterCommand::V4Swap(actions)));
        plan
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use router_types::{CommandType, V4ActionType};

    fn pool(a: Address, b: Address) -> PoolKey {
        PoolKeyHelper::normalized(a, b, 500, 10, Address::ZERO).unwrap()
    }

    #[test]
    fn exact_in_single_builds_swap_settle_take() {
        let eth = Address::ZERO;
        let usdc = Address::repeat_byte(0x11);
        let plan = V4SwapPlanBuilder::exact_in_single(&pool(eth, usdc), eth, 10_000, 9_500).unwrap();

        assert_eq!(plan.len(), 1);
        let planned = plan.get(0).unwrap();
        assert_eq!(planned.command.command_type(), CommandType::V4Swap);

        let actions = match &planned.command {
            UniversalRouterCommand::V4Swap(actions) => actions,
            other => panic!("expected V4_SWAP, got {other:?}"),
        };
        let kinds: Vec<V4ActionType> = actions.actions_vec.iter().map(|a| a.action_type()).collect();
        assert_eq!(kinds, vec![V4ActionType::SwapExactInSingle, V4ActionType::SettleAll, V4ActionType::TakeAll]);

        match actions.get(1).unwrap() {
            V4Action::SettleAll(params) => {
                assert_eq!(params.currency, eth);
                assert_eq!(params.maxAmount, U256::from(10_000u64));
            }
            other => panic!("expected SETTLE_ALL, got {other:?}"),
        }
        match actions.get(2).unwrap() {
            V4Action::TakeAll(params) => {
                assert_eq!(params.currency, usdc);
                assert_eq!(params.minAmount, U256::from(9_500u64));
            }
            other => panic!("expected TAKE_ALL, got {other:?}"),
        }
    }

    #[test]
    fn exact_in_multihop_takes_the_terminal_currency() {
        let a = Address::ZERO;
        let b = Address::repeat_byte(0x11);
        let c = Address::repeat_byte(0x22);

        let plan = V4SwapPlanBuilder::exact_in(&[pool(a, b), pool(b, c)], a, 10_000, 1).unwrap();
        let actions = match &plan.get(0).unwrap().command {
            UniversalRouterCommand::V4Swap(actions) => actions,
            other => panic!("expected V4_SWAP, got {other:?}"),
        };

        match actions.get(2).unwrap() {
            V4Action::TakeAll(params) => assert_eq!(params.currency, c),
            other => panic!("expected TAKE_ALL, got {other:?}"),
        }
    }

    #[test]
    fn exact_out_multihop_settles_the_origin_currency() {
        let a = Address::ZERO;
        let b = Address::repeat_byte(0x11);
        let c = Address::repeat_byte(0x22);

        let plan = V4SwapPlanBuilder::exact_out(&[pool(a, b), pool(b, c)], c, 10_000, 50_000).unwrap();
        let actions = match &plan.get(0).unwrap().command {
            UniversalRouterCommand::V4Swap(actions) => actions,
            other => panic!("expected V4_SWAP, got {other:?}"),
        };

        match actions.get(1).unwrap() {
            V4Action::SettleAll(params) => {
                assert_eq!(params.currency, a);
                assert_eq!(params.maxAmount, U256::from(50_000u64));
            }
            other => panic!("expected SETTLE_ALL, got {other:?}"),
        }
    }

    #[test]
    fn unrelated_input_currency_is_rejected() {
        let key = pool(Address::repeat_byte(0x11), Address::repeat_byte(0x22));
        assert!(V4SwapPlanBuilder::exact_in_single(&key, Address::repeat_byte(0x33), 1, 0).is_err());
    }
}
