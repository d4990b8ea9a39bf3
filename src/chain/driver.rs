/*!
   Implementation of [`ChainDriver`].
*/

use std::path::PathBuf;
use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::debug;

use crate::chain::cli::query::query_balance;
use crate::error::{handle_generic_error, Error};
use crate::types::wallet::WalletAddress;

/**
   A driver for interacting with a devnet full node through its CLI.

   The CLI binary plays the role of the chain SDK: it owns the keyring,
   signs and broadcasts transactions, and talks RPC to the node. The
   driver only assembles arguments and parses the JSON output.

   Currently the driver is hardcoded to support a single local Secret
   Network node, which is all the contract test suite needs.
*/
#[derive(Debug, Clone)]
pub struct ChainDriver {
    /**
       The filesystem path to the chain CLI. Defaults to `secretd`.
    */
    pub command_path: String,

    /**
       The ID of the chain.
    */
    pub chain_id: String,

    /**
       The RPC address of the full node, in `tcp://` form.
    */
    pub node_address: String,

    /**
       Base URL of the faucet service.
    */
    pub faucet_address: String,

    /**
       The native denomination used for balances and fees.
    */
    pub native_denom: String,

    /**
       The home directory holding the per-run keyring and data files.
    */
    pub home_path: PathBuf,

    pub runtime: Arc<Runtime>,
}

impl ChainDriver {
    pub fn create(
        command_path: String,
        chain_id: String,
        node_address: String,
        faucet_address: String,
        native_denom: String,
        home_path: PathBuf,
    ) -> Result<Self, Error> {
        let runtime = Arc::new(Runtime::new().map_err(handle_generic_error)?);

        Ok(Self {
            command_path,
            chain_id,
            node_address,
            faucet_address,
            native_denom,
            home_path,
            runtime,
        })
    }

    /**
       The home directory as a string, for use as a CLI argument.
    */
    pub fn home_str(&self) -> String {
        format!("{}", self.home_path.display())
    }

    /**
       The gas price passed on every transaction, in the native
       denomination. The devnet accepts this flat price.
    */
    pub fn gas_prices(&self) -> String {
        format!("0.25{}", self.native_denom)
    }

    /**
       Query the balance of the given wallet address in the native
       denomination. A failure here is fatal to the run, since balance
       truth must be trustworthy before any funding decision.
    */
    pub fn query_balance(&self, address: &WalletAddress) -> Result<u128, Error> {
        query_balance(self, &address.0, &self.native_denom)
    }

    /**
       Write the string content to a file path relative to the driver's
       home directory. Used to keep a backup of generated wallet seeds.
    */
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<(), Error> {
        let full_path = self.home_path.join(file_path);
        let full_path_str = format!("{}", full_path.display());
        std::fs::write(full_path, content).map_err(handle_generic_error)?;
        debug!("created new file {:?}", full_path_str);
        Ok(())
    }
}
