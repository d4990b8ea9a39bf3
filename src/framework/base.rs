/*!
   Base infrastructure for the test framework. Includes the bootstrap
   sequence shared by all contract tests and the fail-fast sequence
   runner.
*/

use tracing::info;

use crate::bootstrap::deployment::deploy_contract;
use crate::chain::builder::ChainBuilder;
use crate::chain::driver::ChainDriver;
use crate::error::Error;
use crate::faucet::fill_up_from_faucet;
use crate::init::init_test;
use crate::types::config::TestConfig;
use crate::types::deployment::Deployment;
use crate::types::wallet::Wallet;

/**
   Target balance the deployer wallet is funded to before deployment.
*/
pub const INITIAL_BALANCE: u128 = 100_000_000;

/**
   Counter value the contract is instantiated with.
*/
pub const INITIAL_COUNT: i32 = 4;

/**
   Runs a contract test case implementing [`ContractTest`] against its
   own fresh deployment.
*/
pub fn run_contract_test<Test: ContractTest>(test: &Test) -> Result<(), Error> {
    run_test_sequence(&[NamedTest {
        name: core::any::type_name::<Test>(),
        test,
    }])
}

/**
   A contract test is given the shared driver, the funded deployer
   wallet, and the deployment every call references.
*/
pub trait ContractTest {
    /// Test runner
    fn run(
        &self,
        config: &TestConfig,
        driver: &ChainDriver,
        wallet: &Wallet,
        deployment: &Deployment,
    ) -> Result<(), Error>;
}

/**
   A named procedure in an ordered test batch.
*/
pub struct NamedTest<'a> {
    pub name: &'a str,
    pub test: &'a dyn ContractTest,
}

/**
   Bootstrap one deployment and run the named procedures against it in
   order.

   Each procedure's success is logged before the next one starts. The
   first failure propagates immediately and halts the batch; there is no
   partial-success continuation and no retry of a whole run.
*/
pub fn run_test_sequence(tests: &[NamedTest<'_>]) -> Result<(), Error> {
    let config = init_test()?;

    let builder = ChainBuilder::new_with_config(&config);

    let (driver, wallet) = builder.spawn()?;

    fill_up_from_faucet(&driver, &wallet, INITIAL_BALANCE)?;

    let deployment = deploy_contract(
        &driver,
        &wallet,
        &config.contract_wasm_path,
        INITIAL_COUNT,
    )?;

    for named in tests {
        info!("running test {}", named.name);

        named.test.run(&config, &driver, &wallet, &deployment)?;

        info!("[SUCCESS] {}", named.name);
    }

    Ok(())
}
