/*!
   Test that the contract records the deploying account as its admin.
*/

use crate::prelude::*;

#[test]
fn test_admin_on_initialization() -> Result<(), Error> {
    run_contract_test(&AdminOnInitializationTest)
}

pub struct AdminOnInitializationTest;

impl ContractTest for AdminOnInitializationTest {
    fn run(
        &self,
        _config: &TestConfig,
        driver: &ChainDriver,
        wallet: &Wallet,
        deployment: &Deployment,
    ) -> Result<(), Error> {
        let admin: AdminResponse = driver.query_contract(deployment, &QueryMsg::GetAdmin {})?;

        assert_eq(
            "admin on initialization is the deployer",
            &admin.admin,
            &wallet.address.0,
        )
    }
}
