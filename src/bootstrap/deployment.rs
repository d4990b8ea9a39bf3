/*!
   The contract deployment pipeline: upload the bytecode, resolve the
   assigned code ID and its code hash, instantiate the contract, and
   extract its address.
*/

use std::path::Path;

use tracing::info;

use crate::chain::cli::compute::{instantiate_contract, store_contract_code};
use crate::chain::cli::query::query_code_hash_by_id;
use crate::chain::driver::ChainDriver;
use crate::contract::msg::InstantiateMsg;
use crate::error::{handle_generic_error, Error};
use crate::types::deployment::Deployment;
use crate::types::wallet::Wallet;
use crate::util::random::random_string;

const STORE_GAS: u64 = 5_000_000;

const INSTANTIATE_GAS: u64 = 1_000_000;

/**
   Upload and instantiate the contract, returning the immutable
   [`Deployment`] every subsequent call references.

   There is no rollback path: a failure at any step abandons the whole
   deployment and aborts the run. A failed instantiation leaves unused
   uploaded bytecode on the devnet, which is acceptable to orphan there.
*/
pub fn deploy_contract(
    driver: &ChainDriver,
    wallet: &Wallet,
    wasm_path: &Path,
    init_count: i32,
) -> Result<Deployment, Error> {
    info!("uploading contract code from {}", wasm_path.display());

    let upload = store_contract_code(driver, wallet, wasm_path, STORE_GAS)?;

    if !upload.is_success() {
        return Err(Error::upload_failed(upload.raw_log));
    }

    // The chain reports the assigned code ID in the first event of the
    // store-code transaction.
    let code_id: u64 = upload
        .first_event_attribute("code_id")
        .ok_or_else(|| {
            Error::malformed_response("no code_id attribute in store-code events".to_string())
        })?
        .parse()
        .map_err(handle_generic_error)?;

    info!("contract code uploaded with code id {}", code_id);

    let code_hash = query_code_hash_by_id(driver, code_id)?
        .ok_or_else(|| Error::code_hash_unavailable(code_id))?;

    info!("contract code hash: {}", code_hash);

    let init_msg = serde_json::to_string(&InstantiateMsg { count: init_count })
        .map_err(handle_generic_error)?;

    let label = instantiate_label();

    let instantiate = instantiate_contract(
        driver,
        wallet,
        code_id,
        &init_msg,
        &label,
        INSTANTIATE_GAS,
    )?;

    if !instantiate.is_success() {
        return Err(Error::instantiate_failed(instantiate.raw_log));
    }

    let contract_address = instantiate
        .event_attribute("message", "contract_address")
        .ok_or_else(|| {
            Error::malformed_response(
                "no contract_address attribute in instantiate events".to_string(),
            )
        })?
        .to_string();

    info!("contract instantiated at address {}", contract_address);

    Ok(Deployment {
        code_hash,
        contract_address,
        deployer: wallet.address.clone(),
    })
}

/**
   Contract labels are unique per chain, so a random suffix keeps
   repeated runs from colliding.
*/
fn instantiate_label() -> String {
    format!("counter-{}", random_string())
}
