use alloy_primitives::aliases::{I24, U24};
use alloy_primitives::{keccak256, Address, Bytes, FixedBytes, B256};
use alloy_sol_types::SolValue;

use router_abi::v4::PoolKey;
use router_types::RouterCodecError;

use crate::tick::{is_valid_tick_spacing, DYNAMIC_FEE_FLAG, MAX_LP_FEE};

/// keccak256 of the plain ABI tuple encoding of the five pool key fields.
pub type PoolId = B256;

/// 25-byte prefix of the pool id, as stored in on-chain position metadata.
pub type TruncatedPoolId = FixedBytes<25>;

pub struct PoolKeyHelper;

impl PoolKeyHelper {
    /// Sorts two currencies ascending by 160-bit value. The native-asset
    /// sentinel (zero address) always sorts first.
    pub fn normalize_currencies(currency_a: Address, currency_b: Address) -> (Address, Address) {
        if currency_a <= currency_b {
            (currency_a, currency_b)
        } else {
            (currency_b, currency_a)
        }
    }

    /// Builds a normalized pool key from currencies in either order.
    pub fn normalized(
        currency_a: Address,
        currency_b: Address,
        fee: u32,
        tick_spacing: i32,
        hooks: Address,
    ) -> Result<PoolKey, RouterCodecError> {
        if !is_valid_tick_spacing(tick_spacing) {
            return Err(RouterCodecError::InvalidTickSpacing { tick_spacing });
        }
        if fee > MAX_LP_FEE && fee != DYNAMIC_FEE_FLAG {
            return Err(RouterCodecError::FeeOutOfRange { fee });
        }
        let tick_spacing =
            I24::try_from(tick_spacing).map_err(|_| RouterCodecError::InvalidTickSpacing { tick_spacing })?;

        let (currency0, currency1) = Self::normalize_currencies(currency_a, currency_b);

        Ok(PoolKey { currency0, currency1, fee: U24::from(fee), tickSpacing: tick_spacing, hooks })
    }

    /// Byte-for-byte the general ABI tuple encoding of
    /// (currency0, currency1, fee, tickSpacing, hooks).
    pub fn encode_pool_key(pool_key: &PoolKey) -> Bytes {
        pool_key.abi_encode().into()
    }

    pub fn pool_id(pool_key: &PoolKey) -> PoolId {
        keccak256(pool_key.abi_encode())
    }

    pub fn truncated_pool_id(pool_key: &PoolKey) -> TruncatedPoolId {
        TruncatedPoolId::from_slice(&Self::pool_id(pool_key)[..25])
    }

    /// Swap direction for a given input currency.
    pub fn zero_for_one(pool_key: &PoolKey, currency_in: Address) -> bool {
        pool_key.currency0 == currency_in
    }

    /// The pool currency paired with `currency`, if `currency` is in the pool.
    pub fn other_currency(pool_key: &PoolKey, currency: Address) -> Option<Address> {
        if pool_key.currency0 == currency {
            Some(pool_key.currency1)
        } else if pool_key.currency1 == currency {
            Some(pool_key.currency0)
        } else {
            None
        }
    }
}
