/*!
   Test registering a tag with fixed-length key material, and that the
   registration leaves the counter untouched.
*/

use crate::prelude::*;

use crate::tests::counter::EXECUTE_GAS;

pub const TAG_ID: u64 = 1370400024739904;

#[test]
fn test_register_tag() -> Result<(), Error> {
    run_contract_test(&RegisterTagTest)
}

pub struct RegisterTagTest;

impl ContractTest for RegisterTagTest {
    fn run(
        &self,
        _config: &TestConfig,
        driver: &ChainDriver,
        wallet: &Wallet,
        deployment: &Deployment,
    ) -> Result<(), Error> {
        let before: CountResponse = driver.query_contract(deployment, &QueryMsg::GetCount {})?;

        let msg = ExecuteMsg::Register {
            tag: NewTag::zeroed(TAG_ID),
        };

        let outcome = driver.execute_contract(wallet, deployment, &msg, EXECUTE_GAS)?;

        info!("register tag tx used {} gas", outcome.gas_used);

        let after: CountResponse = driver.query_contract(deployment, &QueryMsg::GetCount {})?;

        assert_eq(
            "registering a tag does not alter the counter",
            &after.count,
            &before.count,
        )
    }
}
