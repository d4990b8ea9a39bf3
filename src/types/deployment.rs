/*!
   The result of a successful contract deployment.
*/

use crate::types::wallet::WalletAddress;

/**
   Identifies one instantiated contract on the chain.

   The code hash and contract address together authenticate the contract
   binary to every subsequent call, so the pair is immutable for the life
   of a test run. The framework re-checks the on-chain hash for the
   address before each typed call and fails hard on a mismatch.
*/
#[derive(Debug, Clone)]
pub struct Deployment {
    /**
       Hex-encoded content hash of the uploaded bytecode, without a
       `0x` prefix.
    */
    pub code_hash: String,

    /**
       Bech32 address of the instantiated contract.
    */
    pub contract_address: String,

    /**
       Address of the wallet that uploaded and instantiated the contract.
       The contract records this address as its admin.
    */
    pub deployer: WalletAddress,
}
