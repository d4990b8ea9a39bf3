/*!
   Test that the (code hash, contract address) pair is authenticated on
   every call: a wrong hash for a valid address must be rejected, never
   silently accepted.
*/

use crate::prelude::*;

#[test]
fn test_code_hash_mismatch_is_rejected() -> Result<(), Error> {
    run_contract_test(&CodeHashMismatchTest)
}

pub struct CodeHashMismatchTest;

impl ContractTest for CodeHashMismatchTest {
    fn run(
        &self,
        _config: &TestConfig,
        driver: &ChainDriver,
        _wallet: &Wallet,
        deployment: &Deployment,
    ) -> Result<(), Error> {
        let forged = Deployment {
            code_hash: flip_first_nibble(&deployment.code_hash),
            ..deployment.clone()
        };

        let res =
            driver.query_contract::<AdminResponse>(&forged, &QueryMsg::GetAdmin {});

        assert_err("query with a substituted code hash must fail", res)?;

        // The genuine pair keeps working afterwards.
        let admin: AdminResponse = driver.query_contract(deployment, &QueryMsg::GetAdmin {})?;

        assert_eq(
            "genuine deployment still answers",
            &admin.admin,
            &deployment.deployer.0,
        )
    }
}

fn flip_first_nibble(code_hash: &str) -> String {
    let replacement = if code_hash.starts_with('0') { "1" } else { "0" };

    let rest = code_hash.get(1..).unwrap_or("");

    format!("{}{}", replacement, rest)
}

#[cfg(test)]
mod unit_tests {
    use super::flip_first_nibble;

    #[test]
    fn forged_hash_differs_from_the_original() {
        assert_eq!(flip_first_nibble("abcd"), "0bcd");
        assert_eq!(flip_first_nibble("0bcd"), "1bcd");
    }

    #[test]
    fn empty_hash_still_yields_a_wrong_hash() {
        assert_eq!(flip_first_nibble(""), "0");
    }
}
