use serde_json as json;
use tracing::info;

use crate::chain::driver::ChainDriver;
use crate::error::{handle_generic_error, Error};
use crate::types::wallet::Wallet;

/**
   Add a wallet with the given ID to the test keyring and return its
   address. The generated seed phrase is backed up in the driver's home
   directory so a failed run can still be inspected by hand.
*/
pub fn add_wallet(driver: &ChainDriver, wallet_id: &str) -> Result<Wallet, Error> {
    let output = driver.exec(&[
        "--home",
        &driver.home_str(),
        "keys",
        "add",
        wallet_id,
        "--keyring-backend",
        "test",
        "--output",
        "json",
    ])?;

    // secretd prints the key material to stderr on some versions
    let seed_content = if output.stdout.trim().is_empty() {
        output.stderr
    } else {
        output.stdout
    };

    let json_val: json::Value = json::from_str(&seed_content).map_err(handle_generic_error)?;

    let wallet_address = json_val
        .get("address")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::malformed_response("expected address field".to_string()))?
        .to_string();

    let seed_path = format!("{}_seed.json", wallet_id);
    driver.write_file(&seed_path, &seed_content)?;

    info!(
        "initialized wallet {} with address {}",
        wallet_id, wallet_address
    );

    Ok(Wallet::new(wallet_id.to_string(), wallet_address))
}
