use alloy_primitives::Bytes;
use alloy_sol_types::SolValue;

use router_types::{RouterCodecError, V4Action, V4ActionPlan};

use crate::schema::lookup_action;

pub struct V4ActionsEncoder;

impl V4ActionsEncoder {
    /// ABI encoding of one action's parameters. The swap actions carry a
    /// single offset-prefixed struct; every other variant spreads its fields
    /// as a parameter list. This split is part of the wire contract.
    pub fn encode_action(action: &V4Action) -> Bytes {
        match action {
            V4Action::IncreaseLiquidity(params) => params.abi_encode_params(),
            V4Action::DecreaseLiquidity(params) => params.abi_encode_params(),
            V4Action::MintPosition(params) => params.abi_encode_params(),
            V4Action::BurnPosition(params) => params.abi_encode_params(),
            V4Action::SwapExactInSingle(params) => params.abi_encode(),
            V4Action::SwapExactIn(params) => params.abi_encode(),
            V4Action::SwapExactOutSingle(params) => params.abi_encode(),
            V4Action::SwapExactOut(params) => params.abi_encode(),
            V4Action::Settle(params) => params.abi_encode_params(),
            V4Action::SettleAll(params) => params.abi_encode_params(),
            V4Action::SettlePair(params) => params.abi_encode_params(),
            V4Action::Take(params) => params.abi_encode_params(),
            V4Action::TakeAll(params) => params.abi_encode_params(),
            V4Action::TakePortion(params) => params.abi_encode_params(),
            V4Action::TakePair(params) => params.abi_encode_params(),
            V4Action::CloseCurrency(params) => params.abi_encode_params(),
            V4Action::ClearOrTake(params) => params.abi_encode_params(),
            V4Action::Sweep(params) => params.abi_encode_params(),
            V4Action::Wrap(params) => params.abi_encode_params(),
            V4Action::Unwrap(params) => params.abi_encode_params(),
        }
        .into()
    }

    /// One action byte per element plus the matching parameter blobs.
    /// Non-destructive; serializing twice yields identical output.
    pub fn serialize(plan: &V4ActionPlan) -> (Bytes, Vec<Bytes>) {
        let mut actions: Vec<u8> = Vec::with_capacity(plan.len());
        let mut params: Vec<Bytes> = Vec::with_capacity(plan.len());
        for action in plan.actions_vec.iter() {
            actions.push(action.action_type().code());
            params.push(Self::encode_action(action));
        }
        (actions.into(), params)
    }

    /// The opaque payload carried by the outer V4_SWAP command:
    /// `abi.encode(actions, params)` wrapped once more as a byte string.
    pub fn pack_actions(plan: &V4ActionPlan) -> Bytes {
        let (actions, params) = Self::serialize(plan);
        (actions, params).abi_encode_params().into()
    }
}

pub struct V4ActionsDecoder;

impl V4ActionsDecoder {
    pub fn decode(actions: &[u8], params: &[Bytes]) -> Result<V4ActionPlan, RouterCodecError> {
        if actions.len() != params.len() {
            return Err(RouterCodecError::LengthMismatch { commands: actions.len(), inputs: params.len() });
        }

        let mut plan = V4ActionPlan::new();
        for (position, (code, blob)) in actions.iter().zip(params.iter()).enumerate() {
            let schema = lookup_action(*code, position)?;
            plan.add((schema.decode_input)(blob)?);
        }
        Ok(plan)
    }

    pub fn unpack_actions(data: &[u8]) -> Result<V4ActionPlan, RouterCodecError> {
        let (actions, params) = <(Bytes, Vec<Bytes>)>::abi_decode_params(data, true)
            .map_err(|e| RouterCodecError::field_decode("V4_SWAP", e))?;
        Self::decode(&actions, &params)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::{Address, U256};
    use router_abi::v4::{ExactInputSingleParams, MintPositionParams, SettleAllParams, TakeAllParams};
    use router_entities::PoolKeyHelper;
    use router_types::V4ActionType;

    fn sample_swap() -> V4Action {
        let pool_key =
            PoolKeyHelper::normalized(Address::ZERO, Address::repeat_byte(0x11), 500, 10, Address::ZERO).unwrap();
        V4Action::SwapExactInSingle(ExactInputSingleParams {
            poolKey: pool_key,
            zeroForOne: true,
            amountIn: 10_000_000_000_000_000u128,
            amountOutMinimum: 1,
            hookData: Bytes::new(),
        })
    }

    #[test]
    fn empty_plan_packs_to_empty_sequences() {
        let plan = V4ActionPlan::new();
        let (actions, params) = V4ActionsEncoder::serialize(&plan);

        assert!(actions.is_empty());
        assert!(params.is_empty());

        let unpacked = V4ActionsDecoder::unpack_actions(&V4ActionsEncoder::pack_actions(&plan)).unwrap();
        assert!(unpacked.is_empty());
    }

    #[test]
    fn swap_settle_take_round_trips() {
        let mut plan = V4ActionPlan::new();
        plan.add(sample_swap());
        plan.add(V4Action::SettleAll(SettleAllParams {
            currency: Address::ZERO,
            maxAmount: U256::from(10_000_000_000_000_000u128),
        }));
        plan.add(V4Action::TakeAll(TakeAllParams { currency: Address::repeat_byte(0x11), minAmount: U256::from(1) }));

        let packed = V4ActionsEncoder::pack_actions(&plan);
        let decoded = V4ActionsDecoder::unpack_actions(&packed).unwrap();

        assert_eq!(decoded, plan);
    }

    #[test]
    fn action_bytes_use_the_full_code() {
        let mut plan = V4ActionPlan::new();
        plan.add(sample_swap());

        let (actions, _) = V4ActionsEncoder::serialize(&plan);
        assert_eq!(actions.as_ref(), &[V4ActionType::SwapExactInSingle.code()]);
    }

    #[test]
    fn single_struct_swap_params_are_offset_prefixed() {
        let blob = V4ActionsEncoder::encode_action(&sample_swap());

        assert_eq!(U256::from_be_slice(&blob[..32]), U256::from(0x20));
    }

    #[test]
    fn mint_position_spreads_its_fields() {
        let pool_key =
            PoolKeyHelper::normalized(Address::ZERO, Address::repeat_byte(0x11), 500, 10, Address::ZERO).unwrap();
        let action = V4Action::MintPosition(MintPositionParams {
            poolKey: pool_key.clone(),
            tickLower: pool_key.tickSpacing,
            tickUpper: pool_key.tickSpacing + pool_key.tickSpacing,
            liquidity: U256::from(1_000_000u64),
            amount0Max: u128::MAX,
            amount1Max: u128::MAX,
            owner: Address::repeat_byte(0x22),
            hookData: Bytes::new(),
        });

        // first word is currency0 of the inlined pool key, not an offset
        let blob = V4ActionsEncoder::encode_action(&action);
        assert_eq!(Address::from_slice(&blob[12..32]), pool_key.currency0);

        let mut plan = V4ActionPlan::new();
        plan.add(action);
        let decoded = V4ActionsDecoder::unpack_actions(&V4ActionsEncoder::pack_actions(&plan)).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn unknown_action_code_is_rejected() {
        let err = V4ActionsDecoder::decode(&[0xff], &[Bytes::new()]).unwrap_err();
        assert!(matches!(err, RouterCodecError::UnknownCommandCode { code: 0xff, position: 0 }));
    }

    #[test]
    fn length_mismatch_is_rejected_before_field_decode() {
        let err = V4ActionsDecoder::decode(&[0x0c, 0x0f], &[Bytes::new()]).unwrap_err();
        assert!(matches!(err, RouterCodecError::LengthMismatch { commands: 2, inputs: 1 }));
    }
}
