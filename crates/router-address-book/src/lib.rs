use alloy_primitives::{address, Address};

#[non_exhaustive]
pub struct UniversalRouterAddress;

impl UniversalRouterAddress {
    pub const MAINNET: Address = address!("66a9893cc07d91d95644aedd05d03f95e1dba8af");
    pub const BASE: Address = address!("6ff5693b99212da76ad316178a184ab56d299b43");
    pub const SEPOLIA: Address = address!("3a9d48ab9751398bbfa63ad67599bb04e4bdf98b");
}

#[non_exhaustive]
pub struct PoolManagerAddress;

impl PoolManagerAddress {
    pub const MAINNET: Address = address!("000000000004444c5dc75cb358380d2e3de08a90");
    pub const BASE: Address = address!("498581ff718922c3f8e6a244956af099b2652b2b");
    pub const SEPOLIA: Address = address!("e03a1074c86cfedd5c142c4f04f1a1536e203543");
}

#[non_exhaustive]
pub struct PositionManagerAddress;

impl PositionManagerAddress {
    pub const MAINNET: Address = address!("bd216513d74c8cf14cf4747e6aaa6420ff64ee9e");
    pub const BASE: Address = address!("7c5f5a4bbd8fd63184577525326123b519429bdc");
    pub const SEPOLIA: Address = address!("429ba70129df741b2ca2a85bc3a2a3328e5c09b4");
}

#[non_exhaustive]
pub struct QuoterAddress;

impl QuoterAddress {
    pub const MAINNET: Address = address!("52f0e24d1c21c8a0cb1e5a5dd6198556bd9e1203");
    pub const BASE: Address = address!("0d5e0f971ed27fbff6c2837bf31316121532048d");
    pub const SEPOLIA: Address = address!("61b3f2011a92d183c7dbadbda940a7555ccf9227");
}

#[non_exhaustive]
pub struct StateViewAddress;

impl StateViewAddress {
    pub const MAINNET: Address = address!("7ffe42c4a5deea5b0fec41c94c136cf115597227");
    pub const BASE: Address = address!("a3c0c9b65bad0b08107aa264b0f3db444b867a71");
    pub const SEPOLIA: Address = address!("e1dd9c3fa50edb962e442f60dfbc432e24537e4c");
}

#[non_exhaustive]
pub struct Permit2Address;

impl Permit2Address {
    // same create2 deployment on every chain
    pub const ANY_CHAIN: Address = address!("000000000022d473030f116ddee9f6b43ac78ba3");
}

#[non_exhaustive]
pub struct TokenAddress;

impl TokenAddress {
    pub const ETH_NATIVE: Address = Address::ZERO;
    pub const MAINNET_WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    pub const MAINNET_USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
    pub const MAINNET_USDT: Address = address!("dac17f958d2ee523a2206206994597c13d831ec7");
    pub const MAINNET_DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
    pub const BASE_WETH: Address = address!("4200000000000000000000000000000000000006");
    pub const BASE_USDC: Address = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");
    pub const SEPOLIA_WETH: Address = address!("fff9976782d46cc05630d1f6ebab18b2324d6b14");

    pub fn is_native(&address: &Address) -> bool {
        address.eq(&Self::ETH_NATIVE)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn native_sentinel_is_the_zero_address() {
        assert!(TokenAddress::is_native(&Address::ZERO));
        assert!(!TokenAddress::is_native(&TokenAddress::MAINNET_WETH));
    }
}
