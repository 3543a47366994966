use alloy_sol_types::sol;

sol! {
    /// Canonical V4 pool descriptor. currency0 < currency1 numerically, the
    /// native-asset sentinel (zero address) smallest.
    #[derive(Debug, Hash, PartialEq, Eq)]
    struct PoolKey {
        address currency0;
        address currency1;
        uint24 fee;
        int24 tickSpacing;
        address hooks;
    }

    /// One hop of a multihop path: the currency swapped into plus the pool
    /// parameters shared with the previous hop currency.
    #[derive(Debug, PartialEq, Eq)]
    struct PathKey {
        address intermediateCurrency;
        uint24 fee;
        int24 tickSpacing;
        address hooks;
        bytes hookData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ExactInputSingleParams {
        PoolKey poolKey;
        bool zeroForOne;
        uint128 amountIn;
        uint128 amountOutMinimum;
        bytes hookData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ExactInputParams {
        address currencyIn;
        PathKey[] path;
        uint128 amountIn;
        uint128 amountOutMinimum;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ExactOutputSingleParams {
        PoolKey poolKey;
        bool zeroForOne;
        uint128 amountOut;
        uint128 amountInMaximum;
        bytes hookData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ExactOutputParams {
        address currencyOut;
        PathKey[] path;
        uint128 amountOut;
        uint128 amountInMaximum;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct IncreaseLiquidityParams {
        uint256 tokenId;
        uint256 liquidity;
        uint128 amount0Max;
        uint128 amount1Max;
        bytes hookData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct DecreaseLiquidityParams {
        uint256 tokenId;
        uint256 liquidity;
        uint128 amount0Min;
        uint128 amount1Min;
        bytes hookData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MintPositionParams {
        PoolKey poolKey;
        int24 tickLower;
        int24 tickUpper;
        uint256 liquidity;
        uint128 amount0Max;
        uint128 amount1Max;
        address owner;
        bytes hookData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct BurnPositionParams {
        uint256 tokenId;
        uint128 amount0Min;
        uint128 amount1Min;
        bytes hookData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct SettleParams {
        address currency;
        uint256 amount;
        bool payerIsUser;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct SettleAllParams {
        address currency;
        uint256 maxAmount;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct SettlePairParams {
        address currency0;
        address currency1;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TakeParams {
        address currency;
        address recipient;
        uint256 amount;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TakeAllParams {
        address currency;
        uint256 minAmount;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TakePortionParams {
        address currency;
        address recipient;
        uint256 bips;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TakePairParams {
        address currency0;
        address currency1;
        address recipient;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct CloseCurrencyParams {
        address currency;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ClearOrTakeParams {
        address currency;
        uint256 amountMax;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct SweepParams {
        address currency;
        address to;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct WrapParams {
        uint256 amount;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct UnwrapParams {
        uint256 amount;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IPositionManager {
        function modifyLiquidities(bytes calldata unlockData, uint256 deadline) external payable;
        function nextTokenId() external view returns (uint256);
        function getPositionLiquidity(uint256 tokenId) external view returns (uint128 liquidity);
        function getPoolAndPositionInfo(uint256 tokenId) external view returns (PoolKey memory, uint256 info);
    }
}
