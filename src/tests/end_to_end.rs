/*!
   The full scenario against one shared deployment: instantiate with
   count 4, check the admin, run 10 increments, expect the counter at
   14, then register a tag.
*/

use crate::prelude::*;

use crate::tests::admin::AdminOnInitializationTest;
use crate::tests::counter::{IncrementStressTest, STRESS_LOAD};
use crate::tests::tag::RegisterTagTest;

#[test]
fn test_end_to_end() -> Result<(), Error> {
    run_test_sequence(&[
        NamedTest {
            name: "admin_on_initialization",
            test: &AdminOnInitializationTest,
        },
        NamedTest {
            name: "increment_stress",
            test: &IncrementStressTest,
        },
        NamedTest {
            name: "counter_reaches_initial_plus_stress_load",
            test: &CounterAbsoluteValueTest,
        },
        NamedTest {
            name: "register_tag",
            test: &RegisterTagTest,
        },
    ])
}

/**
   Only meaningful inside the shared sequence: no other procedure has
   mutated the counter, so its value is exactly the initial count plus
   the stress load.
*/
struct CounterAbsoluteValueTest;

impl ContractTest for CounterAbsoluteValueTest {
    fn run(
        &self,
        _config: &TestConfig,
        driver: &ChainDriver,
        _wallet: &Wallet,
        deployment: &Deployment,
    ) -> Result<(), Error> {
        let count: CountResponse = driver.query_contract(deployment, &QueryMsg::GetCount {})?;

        assert_eq(
            "counter holds the initial count plus the stress load",
            &count.count,
            &(INITIAL_COUNT + STRESS_LOAD),
        )
    }
}
