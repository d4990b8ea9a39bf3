/*!
   Test configuration read once at the beginning of a test session.
*/

use std::path::PathBuf;

/**
   Configuration for a test run, built by
   [`init_test`](crate::init::init_test) from environment variables with
   devnet defaults.
*/
#[derive(Debug, Clone)]
pub struct TestConfig {
    /**
       The filesystem path to the chain CLI. Defaults to `secretd`.
    */
    pub chain_command_path: String,

    /**
       The ID of the devnet chain. Defaults to `secretdev-1`.
    */
    pub chain_id: String,

    /**
       The RPC address of the devnet node, in the `tcp://` form the CLI
       expects for its `--node` flag.
    */
    pub node_address: String,

    /**
       Base URL of the faucet service crediting test accounts.
    */
    pub faucet_address: String,

    /**
       The denomination used for balances and fees.
    */
    pub native_denom: String,

    /**
       Path to the compiled contract bytecode to deploy.
    */
    pub contract_wasm_path: PathBuf,

    /**
       Directory for per-run data such as wallet seed backups. A random
       subdirectory is created for every test session.
    */
    pub chain_store_dir: PathBuf,
}
