use alloy_primitives::{Address, Bytes};
use eyre::{eyre, Result};

use router_abi::v4::{PathKey, PoolKey};
use router_entities::PoolKeyHelper;

pub struct V4PathEncoder;

impl V4PathEncoder {
    /// Path keys for an exact-input multihop swap: one entry per pool, each
    /// naming the currency the hop swaps into, walking forward from
    /// `currency_in`.
    pub fn encode_multihop_exact_in_path(pools: &[PoolKey], currency_in: Address) -> Result<Vec<PathKey>> {
        let mut path = Vec::with_capacity(pools.len());
        let mut current = currency_in;
        for pool in pools.iter() {
            let next = PoolKeyHelper::other_currency(pool, current)
                .ok_or_else(|| eyre!("CURRENCY_NOT_IN_POOL {current}"))?;
            path.push(PathKey {
                intermediateCurrency: next,
                fee: pool.fee,
                tickSpacing: pool.tickSpacing,
                hooks: pool.hooks,
                hookData: Bytes::new(),
            });
            current = next;
        }
        Ok(path)
    }

    /// Path keys for an exact-output multihop swap: one entry per pool, each
    /// naming the input-side currency of its hop, derived by walking backward
    /// from `currency_out`.
    pub fn encode_multihop_exact_out_path(pools: &[PoolKey], currency_out: Address) -> Result<Vec<PathKey>> {
        let mut path = Vec::with_capacity(pools.len());
        let mut current = currency_out;
        for pool in pools.iter().rev() {
            let previous = PoolKeyHelper::other_currency(pool, current)
                .ok_or_else(|| eyre!("CURRENCY_NOT_IN_POOL {current}"))?;
            path.push(PathKey {
                intermediateCurrency: previous,
                fee: pool.fee,
                tickSpacing: pool.tickSpacing,
                hooks: pool.hooks,
                hookData: Bytes::new(),
            });
            current = previous;
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pool(a: Address, b: Address) -> PoolKey {
        PoolKeyHelper::normalized(a, b, 500, 10, Address::ZERO).unwrap()
    }

    #[test]
    fn exact_in_path_walks_forward() {
        let a = Address::ZERO;
        let b = Address::repeat_byte(0x11);
        let c = Address::repeat_byte(0x22);

        let path = V4PathEncoder::encode_multihop_exact_in_path(&[pool(a, b), pool(b, c)], a).unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path[0].intermediateCurrency, b);
        assert_eq!(path[1].intermediateCurrency, c);
    }

    #[test]
    fn exact_out_path_walks_backward() {
        let a = Address::ZERO;
        let b = Address::repeat_byte(0x11);
        let c = Address::repeat_byte(0x22);

        let path = V4PathEncoder::encode_multihop_exact_out_path(&[pool(a, b), pool(b, c)], c).unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path[0].intermediateCurrency, a);
        assert_eq!(path[1].intermediateCurrency, b);
    }

    #[test]
    fn foreign_currency_is_rejected() {
        let a = Address::repeat_byte(0x11);
        let b = Address::repeat_byte(0x22);
        let stranger = Address::repeat_byte(0x33);

        assert!(V4PathEncoder::encode_multihop_exact_in_path(&[pool(a, b)], stranger).is_err());
    }
}
