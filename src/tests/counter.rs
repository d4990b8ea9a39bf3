/*!
   Test that sequential increments are strictly additive: no lost or
   duplicated updates under sequential-only submission.
*/

use crate::prelude::*;

pub const EXECUTE_GAS: u64 = 200_000;

pub const STRESS_LOAD: i32 = 10;

#[test]
fn test_increment_stress() -> Result<(), Error> {
    run_contract_test(&IncrementStressTest)
}

pub struct IncrementStressTest;

impl ContractTest for IncrementStressTest {
    fn run(
        &self,
        _config: &TestConfig,
        driver: &ChainDriver,
        wallet: &Wallet,
        deployment: &Deployment,
    ) -> Result<(), Error> {
        let before: CountResponse = driver.query_contract(deployment, &QueryMsg::GetCount {})?;

        for _ in 0..STRESS_LOAD {
            driver.execute_contract(wallet, deployment, &ExecuteMsg::Increment {}, EXECUTE_GAS)?;
        }

        let after: CountResponse = driver.query_contract(deployment, &QueryMsg::GetCount {})?;

        assert_eq(
            "counter advanced by exactly the number of increments",
            &after.count,
            &(before.count + STRESS_LOAD),
        )
    }
}
