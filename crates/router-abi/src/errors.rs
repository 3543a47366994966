use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IRouterErrors {
        error ExecutionFailed(uint256 commandIndex, bytes message);
        error TransactionDeadlinePassed();
        error ETHNotAccepted();
        error FromAddressIsNotOwner();
        error InsufficientToken();
        error InsufficientETH();
        error InvalidBips();
        error InvalidCommandType(uint256 commandType);
        error LengthMismatch();
        error BalanceTooLow();
        error InvalidReserves();
        error InvalidPath();
        error V2InvalidPath();
        error V2TooLittleReceived();
        error V2TooMuchRequested();
        error V3InvalidAmountOut();
        error V3InvalidCaller();
        error V3InvalidSwap();
        error V3TooLittleReceived();
        error V3TooMuchRequested();
        error V4TooLittleReceived(uint256 minAmountOutReceived, uint256 amountReceived);
        error V4TooMuchRequested(uint256 maxAmountInRequested, uint256 amountRequested);
        error UnsafeCast();
        error ContractLocked();
        error InvalidEthSender();
        error NotAuthorizedForToken(uint256 tokenId);
        error DeadlinePassed(uint256 deadline);
        error Error(string);
    }
}
