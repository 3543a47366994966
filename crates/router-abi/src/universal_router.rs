use alloy_sol_types::sol;

use crate::permit2::{AllowanceTransferDetails, PermitBatch, PermitSingle};
use crate::v4::PoolKey;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IUniversalRouter {
        function execute(bytes calldata commands, bytes[] calldata inputs, uint256 deadline) external payable;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct V3SwapExactInParams {
        address recipient;
        uint256 amountIn;
        uint256 amountOutMinimum;
        bytes path;
        bool payerIsUser;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct V3SwapExactOutParams {
        address recipient;
        uint256 amountOut;
        uint256 amountInMaximum;
        bytes path;
        bool payerIsUser;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Permit2TransferFromParams {
        address token;
        address recipient;
        uint160 amount;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Permit2PermitBatchParams {
        PermitBatch permitBatch;
        bytes signature;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct SweepTokenParams {
        address token;
        address recipient;
        uint256 amountMin;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TransferParams {
        address token;
        address recipient;
        uint256 value;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct PayPortionParams {
        address token;
        address recipient;
        uint256 bips;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct V2SwapExactInParams {
        address recipient;
        uint256 amountIn;
        uint256 amountOutMinimum;
        address[] path;
        bool payerIsUser;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct V2SwapExactOutParams {
        address recipient;
        uint256 amountOut;
        uint256 amountInMaximum;
        address[] path;
        bool payerIsUser;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Permit2PermitParams {
        PermitSingle permitSingle;
        bytes signature;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct WrapEthParams {
        address recipient;
        uint256 amount;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct UnwrapWethParams {
        address recipient;
        uint256 amountMin;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Permit2TransferFromBatchParams {
        AllowanceTransferDetails[] batchDetails;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct BalanceCheckErc20Params {
        address owner;
        address token;
        uint256 minBalance;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct V4InitializePoolParams {
        PoolKey poolKey;
        uint160 sqrtPriceX96;
    }
}
