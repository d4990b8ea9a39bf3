use core::time::Duration;
use std::path::Path;

use serde_json as json;

use crate::chain::cli::query::query_tx_hash;
use crate::chain::driver::ChainDriver;
use crate::error::{handle_generic_error, Error};
use crate::types::transaction::TxOutcome;
use crate::types::wallet::Wallet;
use crate::util::retry::assert_eventually_succeed;

/**
   Number of seconds to wait for a broadcast transaction to be committed
   and become visible to `query tx`. The devnet commits blocks within a
   few seconds, so this is generous.
*/
const WAIT_TX_ATTEMPTS: u16 = 30;

/**
   Submit a store-code transaction uploading the contract bytecode, and
   wait for the committed outcome.
*/
pub fn store_contract_code(
    driver: &ChainDriver,
    wallet: &Wallet,
    wasm_path: &Path,
    gas: u64,
) -> Result<TxOutcome, Error> {
    let wasm_path = wasm_path
        .to_str()
        .ok_or_else(|| Error::malformed_response("non-utf8 wasm path".to_string()))?;

    broadcast_tx(
        driver,
        wallet,
        &["tx", "compute", "store", wasm_path],
        gas,
    )
}

/**
   Submit an instantiate transaction for an uploaded code ID with the
   given JSON init message and label, and wait for the committed
   outcome. The label must be unique per chain; callers append a random
   suffix to keep repeated runs from colliding.
*/
pub fn instantiate_contract(
    driver: &ChainDriver,
    wallet: &Wallet,
    code_id: u64,
    init_msg: &str,
    label: &str,
    gas: u64,
) -> Result<TxOutcome, Error> {
    broadcast_tx(
        driver,
        wallet,
        &[
            "tx",
            "compute",
            "instantiate",
            &code_id.to_string(),
            init_msg,
            "--label",
            label,
        ],
        gas,
    )
}

/**
   Submit an execute transaction against an instantiated contract with
   the given JSON message and gas ceiling, and wait for the committed
   outcome.
*/
pub fn execute_contract(
    driver: &ChainDriver,
    wallet: &Wallet,
    contract_address: &str,
    msg: &str,
    gas: u64,
) -> Result<TxOutcome, Error> {
    broadcast_tx(
        driver,
        wallet,
        &["tx", "compute", "execute", contract_address, msg],
        gas,
    )
}

/**
   Broadcast a transaction in sync mode and poll for its committed
   outcome.

   The broadcast response only proves mempool admission; the effects and
   the emitted events are known once `query tx` finds the transaction in
   a block. A broadcast that is rejected outright (non-zero code in the
   broadcast response) never reaches a block, so its outcome is returned
   as-is for the caller to report.
*/
fn broadcast_tx(
    driver: &ChainDriver,
    wallet: &Wallet,
    tx_args: &[&str],
    gas: u64,
) -> Result<TxOutcome, Error> {
    let output = driver.exec_tx(wallet, tx_args, gas)?;

    let broadcast: json::Value =
        json::from_str(&output.stdout).map_err(handle_generic_error)?;

    let broadcast_outcome = TxOutcome::from_json(&broadcast)?;

    if !broadcast_outcome.is_success() {
        return Ok(broadcast_outcome);
    }

    wait_tx_committed(driver, &broadcast_outcome.txhash)
}

fn wait_tx_committed(driver: &ChainDriver, txhash: &str) -> Result<TxOutcome, Error> {
    assert_eventually_succeed(
        &format!("tx {} committed", txhash),
        WAIT_TX_ATTEMPTS,
        Duration::from_secs(1),
        || query_tx_hash(driver, txhash),
    )
}
