/*!
   Execution of chain CLI commands on behalf of a [`ChainDriver`].

   All invocations of the CLI binary go through the methods here, so the
   common plumbing flags (home directory, chain ID, node address,
   keyring backend) are assembled in one place instead of at every call
   site.
*/

use std::process::Command;
use std::str;

use eyre::eyre;
use tracing::{debug, trace};

use crate::chain::driver::ChainDriver;
use crate::error::{handle_exec_error, handle_generic_error, Error};
use crate::types::wallet::Wallet;

pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ChainDriver {
    /**
       Run the chain CLI with the given arguments as-is.
    */
    pub fn exec(&self, args: &[&str]) -> Result<ExecOutput, Error> {
        debug!(
            "Executing command for {}: {} {}",
            self.chain_id,
            self.command_path,
            itertools::join(args, " ")
        );

        let output = Command::new(&self.command_path)
            .args(args)
            .output()
            .map_err(handle_exec_error(&self.command_path))?;

        if output.status.success() {
            let stdout = str::from_utf8(&output.stdout)
                .map_err(handle_generic_error)?
                .to_string();

            let stderr = str::from_utf8(&output.stderr)
                .map_err(handle_generic_error)?
                .to_string();

            trace!(
                "command executed successfully with stdout: {}, stderr: {}",
                stdout,
                stderr
            );

            Ok(ExecOutput { stdout, stderr })
        } else {
            let message = str::from_utf8(&output.stderr).map_err(handle_generic_error)?;

            Err(Error::generic(eyre!(
                "command exited with error status {:?} and message: {}",
                output.status.code(),
                message
            )))
        }
    }

    /**
       Run a query-style CLI command against the configured node.
    */
    pub fn exec_query(&self, query_args: &[&str]) -> Result<ExecOutput, Error> {
        let mut args: Vec<&str> = vec!["--node", &self.node_address];

        args.extend_from_slice(query_args);

        self.exec(&args)
    }

    /**
       Run a transaction-style CLI command signed by the given wallet
       with the given gas ceiling, wrapping the command in the plumbing
       flags every transaction needs.
    */
    pub fn exec_tx(
        &self,
        wallet: &Wallet,
        tx_args: &[&str],
        gas: u64,
    ) -> Result<ExecOutput, Error> {
        let args = self.tx_args(wallet, tx_args, gas);

        let args: Vec<&str> = args.iter().map(|arg| arg.as_str()).collect();

        self.exec(&args)
    }

    /**
       Assemble the full argument list for a transaction-style command:
       home directory, chain ID, node address and keyring backend in
       front, signer, gas ceiling, gas price, auto-confirmation and JSON
       output behind.
    */
    pub fn tx_args(&self, wallet: &Wallet, tx_args: &[&str], gas: u64) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "--home".to_string(),
            self.home_str(),
            "--chain-id".to_string(),
            self.chain_id.clone(),
            "--node".to_string(),
            self.node_address.clone(),
            "--keyring-backend".to_string(),
            "test".to_string(),
        ];

        args.extend(tx_args.iter().map(|arg| arg.to_string()));

        args.extend([
            "--from".to_string(),
            wallet.id.0.clone(),
            "--gas".to_string(),
            gas.to_string(),
            "--gas-prices".to_string(),
            self.gas_prices(),
            "--yes".to_string(),
            "--output".to_string(),
            "json".to_string(),
        ]);

        args
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::chain::driver::ChainDriver;
    use crate::types::wallet::Wallet;

    fn test_driver() -> ChainDriver {
        ChainDriver::create(
            "secretd".to_string(),
            "secretdev-1".to_string(),
            "tcp://localhost:26657".to_string(),
            "http://localhost:5000".to_string(),
            "uscrt".to_string(),
            PathBuf::from("/tmp/data"),
        )
        .unwrap()
    }

    #[test]
    fn tx_args_wrap_the_command_in_plumbing_and_signing_flags() {
        let driver = test_driver();
        let wallet = Wallet::new("user-1".to_string(), "secret1abcdef".to_string());

        let args = driver.tx_args(&wallet, &["tx", "compute", "execute"], 200_000);

        let expected: Vec<String> = [
            "--home",
            "/tmp/data",
            "--chain-id",
            "secretdev-1",
            "--node",
            "tcp://localhost:26657",
            "--keyring-backend",
            "test",
            "tx",
            "compute",
            "execute",
            "--from",
            "user-1",
            "--gas",
            "200000",
            "--gas-prices",
            "0.25uscrt",
            "--yes",
            "--output",
            "json",
        ]
        .iter()
        .map(|arg| arg.to_string())
        .collect();

        assert_eq!(args, expected);
    }
}
