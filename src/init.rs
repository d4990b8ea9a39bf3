/*!
   Functions for initializing each test at the beginning of a Rust test
   session.
*/

use std::env;
use std::fs;
use std::sync::Once;

use tracing_subscriber::{
    self as ts,
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::Error;
use crate::types::config::TestConfig;
use crate::util::random::random_u32;

static INIT: Once = Once::new();

/**
   Initialize the test with a global logger and error handlers, read the
   environment variables and return a [`TestConfig`].

   Recognized environment variables, all optional:

   - `CHAIN_COMMAND_PATH`: path to the chain CLI (default `secretd`)
   - `CHAIN_ID`: chain ID of the devnet (default `secretdev-1`)
   - `NODE`: RPC address of the devnet node
     (default `tcp://localhost:26657`)
   - `FAUCET_URL`: base URL of the faucet service
     (default `http://localhost:5000`)
   - `DENOM`: native denomination (default `uscrt`)
   - `CONTRACT_WASM`: path to the contract bytecode
     (default `contract.wasm`)
   - `CHAIN_STORE_DIR`: base directory for per-run data (default `data`)
   - `NO_COLOR_LOG`: set to `1` to disable ANSI colors in log output
*/
pub fn init_test() -> Result<TestConfig, Error> {
    let no_color_log = env::var("NO_COLOR_LOG")
        .ok()
        .map(|val| val == "1")
        .unwrap_or(false);

    INIT.call_once(|| {
        if !no_color_log {
            let _ = color_eyre::install();
        }
        install_logger(!no_color_log);
    });

    let chain_command_path = env::var("CHAIN_COMMAND_PATH").unwrap_or_else(|_| "secretd".to_string());

    let chain_id = env::var("CHAIN_ID").unwrap_or_else(|_| "secretdev-1".to_string());

    let node_address = env::var("NODE").unwrap_or_else(|_| "tcp://localhost:26657".to_string());

    let faucet_address =
        env::var("FAUCET_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    let native_denom = env::var("DENOM").unwrap_or_else(|_| "uscrt".to_string());

    let contract_wasm_path = env::var("CONTRACT_WASM").unwrap_or_else(|_| "contract.wasm".to_string());

    let base_store_dir = env::var("CHAIN_STORE_DIR").unwrap_or_else(|_| "data".to_string());

    let chain_store_dir = format!("{}/test-{}", base_store_dir, random_u32());

    fs::create_dir_all(&chain_store_dir).map_err(crate::error::handle_generic_error)?;

    let chain_store_dir =
        fs::canonicalize(chain_store_dir).map_err(crate::error::handle_generic_error)?;

    Ok(TestConfig {
        chain_command_path,
        chain_id,
        node_address,
        faucet_address,
        native_denom,
        contract_wasm_path: contract_wasm_path.into(),
        chain_store_dir,
    })
}

/**
   Install the [`tracing_subscriber`] logger handlers so that logs will
   be displayed during test.
*/
pub fn install_logger(with_color: bool) {
    // Use log level INFO by default if RUST_LOG is not set.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let layer = ts::fmt::layer().with_ansi(with_color);

    let _ = ts::registry().with(env_filter).with(layer).try_init();
}
