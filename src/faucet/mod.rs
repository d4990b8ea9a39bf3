/*!
   Client for the devnet faucet service and the account funding loop.
*/

use core::time::Duration;
use std::thread::sleep;

use http::Uri;
use tracing::{info, warn};

use crate::chain::driver::ChainDriver;
use crate::error::{handle_generic_error, Error};
use crate::types::wallet::Wallet;

/**
   Number of funding rounds to attempt before giving up. Retrying
   forever would livelock the run if the faucet is permanently down, so
   exhaustion is surfaced as a distinct error instead.
*/
const MAX_FAUCET_ATTEMPTS: u16 = 90;

const FAUCET_INTERVAL: Duration = Duration::from_secs(1);

/**
   Request funds from the faucet for the given address once.
*/
pub async fn get_from_faucet(faucet_address: &str, address: &str) -> Result<(), Error> {
    let url = format!("{}/faucet?address={}", faucet_address, address)
        .parse::<Uri>()
        .map_err(handle_generic_error)?
        .to_string();

    reqwest::get(&url)
        .await
        .map_err(|e| Error::http_request(url.clone(), e))?
        .error_for_status()
        .map_err(|e| Error::http_request(url.clone(), e))?;

    Ok(())
}

/**
   Fund the wallet from the faucet until its balance reaches the target.

   The balance is read before every funding round; a balance-query
   failure is fatal and aborts the run, since it signals the node is
   unreachable or malformed rather than a transient funding issue. A
   failed faucet request is only logged and the round is retried, up to
   [`MAX_FAUCET_ATTEMPTS`] rounds.

   On normal return the wallet's balance is at least `target_balance`,
   and no faucet request was made after the target was reached.
*/
pub fn fill_up_from_faucet(
    driver: &ChainDriver,
    wallet: &Wallet,
    target_balance: u128,
) -> Result<(), Error> {
    for _ in 0..MAX_FAUCET_ATTEMPTS {
        let balance = driver.query_balance(&wallet.address)?;

        if balance >= target_balance {
            info!(
                "wallet {} funded with balance {}{}",
                wallet.address, balance, driver.native_denom
            );
            return Ok(());
        }

        if let Err(e) = driver
            .runtime
            .block_on(get_from_faucet(&driver.faucet_address, &wallet.address.0))
        {
            warn!("failed to get tokens from faucet: {}", e);
        }

        sleep(FAUCET_INTERVAL);
    }

    Err(Error::faucet_exhausted(
        wallet.address.0.clone(),
        MAX_FAUCET_ATTEMPTS,
    ))
}
