use crate::chain::cli::bootstrap::add_wallet;
use crate::chain::driver::ChainDriver;
use crate::error::Error;
use crate::types::config::TestConfig;
use crate::types::wallet::Wallet;
use crate::util::random::random_u32;

/**
   Builder for constructing a [`ChainDriver`] together with a fresh
   wallet for one test run.
*/
#[derive(Debug)]
pub struct ChainBuilder {
    pub config: TestConfig,
}

impl ChainBuilder {
    pub fn new_with_config(config: &TestConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /**
       Create a driver pointing at the configured devnet node, with its
       keyring isolated under the per-run store directory, and generate
       a random wallet in it. The wallet starts with zero balance and is
       funded from the faucet afterwards.
    */
    pub fn spawn(&self) -> Result<(ChainDriver, Wallet), Error> {
        let driver = ChainDriver::create(
            self.config.chain_command_path.clone(),
            self.config.chain_id.clone(),
            self.config.node_address.clone(),
            self.config.faucet_address.clone(),
            self.config.native_denom.clone(),
            self.config.chain_store_dir.clone(),
        )?;

        let wallet_id = format!("user-{:x}", random_u32());
        let wallet = add_wallet(&driver, &wallet_id)?;

        Ok((driver, wallet))
    }
}
