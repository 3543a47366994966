use alloy_primitives::Bytes;

use router_types::{PlannedCommand, RouterCommandPlan, RouterCodecError};

use crate::schema::{lookup_command, COMMAND_TYPE_MASK, FLAG_ALLOW_REVERT};

pub struct UniversalRouterDecoder;

impl UniversalRouterDecoder {
    /// Rebuilds the typed plan from the router's parallel wire arrays.
    ///
    /// Lengths are checked before any field decode. Each command byte is split
    /// into its revert flag and 7-bit code, the code resolved through the
    /// schema registry, and the input blob decoded against the variant's
    /// field schema. Nested payloads (V4_SWAP, EXECUTE_SUB_PLAN) are decoded
    /// recursively; a partially parsed plan is never returned.
    pub fn decode(commands: &[u8], inputs: &[Bytes]) -> Result<RouterCommandPlan, RouterCodecError> {
        if commands.len() != inputs.len() {
            return Err(RouterCodecError::LengthMismatch { commands: commands.len(), inputs: inputs.len() });
        }

        let mut plan = RouterCommandPlan::new();
        for (position, (byte, input)) in commands.iter().zip(inputs.iter()).enumerate() {
            let allow_revert = byte & FLAG_ALLOW_REVERT != 0;
            let code = byte & COMMAND_TYPE_MASK;
            let schema = lookup_command(code, position)?;
            let command = (schema.decode_input)(input)?;
            plan.add(PlannedCommand { command, allow_revert });
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::aliases::{U160, U48};
    use alloy_primitives::{address, Address, U256};

    use router_abi::permit2::{PermitDetails, PermitSingle};
    use router_abi::universal_router::{
        BalanceCheckErc20Params, Permit2PermitParams, SweepTokenParams, TransferParams, WrapEthParams,
    };
    use router_abi::v4::{SettleAllParams, TakeAllParams};
    use router_address_book::{TokenAddress, UniversalRouterAddress};
    use router_types::{CommandType, UniversalRouterCommand, V4Action, V4ActionPlan};

    use crate::command_encoder::UniversalRouterEncoder;

    const RECIPIENT: Address = address!("12890d2cce102216644c59dae5baed380d84830c");

    fn permit_command() -> UniversalRouterCommand {
        UniversalRouterCommand::Permit2Permit(Permit2PermitParams {
            permitSingle: PermitSingle {
                details: PermitDetails {
                    token: TokenAddress::SEPOLIA_WETH,
                    amount: U160::from(100000u64),
                    expiration: U48::ZERO,
                    nonce: U48::ZERO,
                },
                spender: UniversalRouterAddress::SEPOLIA,
                sigDeadline: U256::from(2_000_000_000u64),
            },
            signature: Bytes::from(vec![0x00]),
        })
    }

    fn wrap_command() -> UniversalRouterCommand {
        UniversalRouterCommand::WrapEth(WrapEthParams { recipient: RECIPIENT, amount: U256::from(100000u64) })
    }

    fn v4_swap_command() -> UniversalRouterCommand {
        let mut actions = V4ActionPlan::new();
        actions.add(V4Action::SettleAll(SettleAllParams { currency: Address::ZERO, maxAmount: U256::from(5u64) }));
        actions.add(V4Action::TakeAll(TakeAllParams { currency: Address::repeat_byte(0x33), minAmount: U256::ZERO }));
        UniversalRouterCommand::V4Swap(actions)
    }

    #[test]
    fn empty_plan_round_trips() {
        let plan = RouterCommandPlan::new();
        let (commands, inputs) = UniversalRouterEncoder::serialize(&plan);
        let decoded = UniversalRouterDecoder::decode(&commands, &inputs).unwrap();

        assert!(decoded.is_empty());
        assert_eq!(decoded, plan);
    }

    #[test]
    fn single_command_round_trips() {
        let mut plan = RouterCommandPlan::new();
        plan.add(PlannedCommand::new(wrap_command()));

        let (commands, inputs) = UniversalRouterEncoder::serialize(&plan);
        let decoded = UniversalRouterDecoder::decode(&commands, &inputs).unwrap();

        assert_eq!(decoded, plan);
    }

    #[test]
    fn permit_then_wrap_round_trips_with_revert_flags() {
        let mut plan = RouterCommandPlan::new();
        plan.add(PlannedCommand::new_allow_revert(permit_command()));
        plan.add(PlannedCommand::new(wrap_command()));

        let (commands, inputs) = UniversalRouterEncoder::serialize(&plan);
        assert_eq!(commands.as_ref(), &[0x8a, 0x0b]);

        let decoded = UniversalRouterDecoder::decode(&commands, &inputs).unwrap();
        assert_eq!(decoded.len(), 2);

        let decoded_permit = decoded.get(0).unwrap();
        assert!(decoded_permit.allow_revert);
        match &decoded_permit.command {
            UniversalRouterCommand::Permit2Permit(params) => {
                assert_eq!(params.permitSingle.details.token, TokenAddress::SEPOLIA_WETH);
                assert_eq!(params.permitSingle.details.amount, U160::from(100000u64));
                assert_eq!(params.permitSingle.details.expiration, U48::ZERO);
                assert_eq!(params.permitSingle.details.nonce, U48::ZERO);
                assert_eq!(params.permitSingle.spender, UniversalRouterAddress::SEPOLIA);
                assert_eq!(params.permitSingle.sigDeadline, U256::from(2_000_000_000u64));
                assert_eq!(params.signature, Bytes::from(vec![0x00]));
            }
            other => panic!("expected PERMIT2_PERMIT, got {other:?}"),
        }

        let decoded_wrap = decoded.get(1).unwrap();
        assert!(!decoded_wrap.allow_revert);
        match &decoded_wrap.command {
            UniversalRouterCommand::WrapEth(params) => {
                assert_eq!(params.recipient, RECIPIENT);
                assert_eq!(params.amount, U256::from(100000u64));
            }
            other => panic!("expected WRAP_ETH, got {other:?}"),
        }
    }

    #[test]
    fn fifty_command_plan_round_trips() {
        let mut plan = RouterCommandPlan::new();
        for i in 0..50u64 {
            let command = match i % 5 {
                0 => wrap_command(),
                1 => UniversalRouterCommand::Sweep(SweepTokenParams {
                    token: TokenAddress::SEPOLIA_WETH,
                    recipient: RECIPIENT,
                    amountMin: U256::from(i),
                }),
                2 => v4_swap_command(),
                3 => UniversalRouterCommand::Transfer(TransferParams {
                    token: TokenAddress::SEPOLIA_WETH,
                    recipient: RECIPIENT,
                    value: U256::from(i),
                }),
                _ => UniversalRouterCommand::BalanceCheckErc20(BalanceCheckErc20Params {
                    owner: RECIPIENT,
                    token: TokenAddress::SEPOLIA_WETH,
                    minBalance: U256::from(i),
                }),
            };
            plan.add(if i % 3 == 0 { PlannedCommand::new_allow_revert(command) } else { PlannedCommand::new(command) });
        }

        let (commands, inputs) = UniversalRouterEncoder::serialize(&plan);
        assert_eq!(commands.len(), 50);
        assert_eq!(inputs.len(), 50);

        let decoded = UniversalRouterDecoder::decode(&commands, &inputs).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn nested_sub_plan_round_trips() {
        let mut sub_plan = RouterCommandPlan::new();
        sub_plan.add(PlannedCommand::new(wrap_command()));
        sub_plan.add(PlannedCommand::new(v4_swap_command()));

        let mut plan = RouterCommandPlan::new();
        plan.add(PlannedCommand::new(UniversalRouterCommand::ExecuteSubPlan(sub_plan)));

        let (commands, inputs) = UniversalRouterEncoder::serialize(&plan);
        assert_eq!(commands.as_ref(), &[CommandType::ExecuteSubPlan.code()]);

        let decoded = UniversalRouterDecoder::decode(&commands, &inputs).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn unknown_command_code_is_rejected() {
        let err = UniversalRouterDecoder::decode(&[0xff], &[Bytes::from(vec![0xde, 0xad])]).unwrap_err();
        assert!(matches!(err, RouterCodecError::UnknownCommandCode { code: 0x7f, position: 0 }));
    }

    #[test]
    fn length_mismatch_is_rejected_before_any_field_decode() {
        let err = UniversalRouterDecoder::decode(&[0x01, 0x02], &[Bytes::new()]).unwrap_err();
        assert!(matches!(err, RouterCodecError::LengthMismatch { commands: 2, inputs: 1 }));
    }

    #[test]
    fn malformed_input_blob_is_a_field_decode_failure() {
        let err = UniversalRouterDecoder::decode(&[0x0b], &[Bytes::from(vec![0x01, 0x02, 0x03])]).unwrap_err();
        assert!(matches!(err, RouterCodecError::FieldDecodeFailure { command: "WRAP_ETH", .. }));
    }
}
