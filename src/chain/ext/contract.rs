/*!
   Typed query and execute calls against a deployed contract.
*/

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json as json;
use tracing::info;

use crate::chain::cli::compute::execute_contract;
use crate::chain::cli::query::{query_contract_hash, query_contract_smart};
use crate::chain::driver::ChainDriver;
use crate::contract::msg::{ExecuteMsg, QueryMsg};
use crate::error::{handle_generic_error, Error};
use crate::types::deployment::Deployment;
use crate::types::transaction::TxOutcome;
use crate::types::wallet::Wallet;

pub trait ContractMethodsExt {
    /**
       Run a side-effect-free smart query against the deployed contract
       and deserialize the success payload into `R`.

       The response is checked for an explicit error marker before any
       attempt to interpret it as a success payload.
    */
    fn query_contract<R: DeserializeOwned>(
        &self,
        deployment: &Deployment,
        query: &QueryMsg,
    ) -> Result<R, Error>;

    /**
       Submit an execute transaction against the deployed contract with
       the given gas ceiling, returning the committed outcome with its
       gas consumption and emitted events.
    */
    fn execute_contract(
        &self,
        wallet: &Wallet,
        deployment: &Deployment,
        msg: &ExecuteMsg,
        gas_limit: u64,
    ) -> Result<TxOutcome, Error>;

    /**
       Check that the code hash bound on chain to the deployment's
       contract address still matches the hash resolved at upload time.
       A mismatch is a hard failure and is never retried.
    */
    fn verify_code_hash(&self, deployment: &Deployment) -> Result<(), Error>;
}

impl ContractMethodsExt for ChainDriver {
    fn query_contract<R: DeserializeOwned>(
        &self,
        deployment: &Deployment,
        query: &QueryMsg,
    ) -> Result<R, Error> {
        self.verify_code_hash(deployment)?;

        let query_str = to_json_string(query)?;

        let response = query_contract_smart(self, &deployment.contract_address, &query_str)?;

        // An error response must be recognized before the success shape
        // is assumed, since deserializing it as `R` would either fail
        // opaquely or, worse, succeed with garbage.
        if let Some(err) = response.get("error") {
            return Err(Error::query_failed(err.to_string()));
        }

        json::from_value(response).map_err(handle_generic_error)
    }

    fn execute_contract(
        &self,
        wallet: &Wallet,
        deployment: &Deployment,
        msg: &ExecuteMsg,
        gas_limit: u64,
    ) -> Result<TxOutcome, Error> {
        self.verify_code_hash(deployment)?;

        let msg_str = to_json_string(msg)?;

        let outcome = execute_contract(
            self,
            wallet,
            &deployment.contract_address,
            &msg_str,
            gas_limit,
        )?;

        if !outcome.is_success() {
            return Err(Error::execution_failed(outcome.raw_log));
        }

        info!(
            "execute tx {} used {} gas",
            outcome.txhash, outcome.gas_used
        );

        Ok(outcome)
    }

    fn verify_code_hash(&self, deployment: &Deployment) -> Result<(), Error> {
        let on_chain = query_contract_hash(self, &deployment.contract_address)?.ok_or_else(
            || {
                Error::malformed_response(format!(
                    "no code hash bound to contract address {}",
                    deployment.contract_address
                ))
            },
        )?;

        if on_chain.eq_ignore_ascii_case(&deployment.code_hash) {
            Ok(())
        } else {
            Err(Error::code_hash_mismatch(
                deployment.code_hash.clone(),
                on_chain,
            ))
        }
    }
}

fn to_json_string(msg: &impl Serialize) -> Result<String, Error> {
    json::to_string(msg).map_err(handle_generic_error)
}
