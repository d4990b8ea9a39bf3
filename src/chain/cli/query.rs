use serde_json as json;

use crate::chain::driver::ChainDriver;
use crate::error::{handle_generic_error, Error};
use crate::types::transaction::TxOutcome;

/**
   Query the balance for a given wallet address and denomination.

   A missing `amount` field in the response is a protocol-shape
   violation and fails the query, it is never treated as a zero balance.
*/
pub fn query_balance(driver: &ChainDriver, address: &str, denom: &str) -> Result<u128, Error> {
    let res = driver
        .exec_query(&[
            "query", "bank", "balances", address, "--denom", denom, "--output", "json",
        ])?
        .stdout;

    parse_balance(&res)
}

fn parse_balance(res: &str) -> Result<u128, Error> {
    let amount_str = json::from_str::<json::Value>(res)
        .map_err(handle_generic_error)?
        .get("amount")
        .ok_or_else(|| Error::malformed_response("expected amount field".to_string()))?
        .as_str()
        .ok_or_else(|| Error::malformed_response("expected amount to be a string".to_string()))?
        .to_string();

    let amount = amount_str.parse().map_err(handle_generic_error)?;

    Ok(amount)
}

/**
   Query a committed transaction by hash. Fails while the transaction
   has not been included in a block yet, so callers poll this with the
   bounded retry helper.
*/
pub fn query_tx_hash(driver: &ChainDriver, txhash: &str) -> Result<TxOutcome, Error> {
    let res = driver
        .exec_query(&["query", "tx", txhash, "--output", "json"])?
        .stdout;

    let tx = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    TxOutcome::from_json(&tx)
}

/**
   Query the code hash assigned to an uploaded code ID. Returns `None`
   when the chain reports no hash for the ID.
*/
pub fn query_code_hash_by_id(driver: &ChainDriver, code_id: u64) -> Result<Option<String>, Error> {
    let res = driver
        .exec_query(&["query", "compute", "contract-hash-by-id", &code_id.to_string()])?
        .stdout;

    Ok(normalize_code_hash(&res))
}

/**
   Query the code hash bound to an instantiated contract address.
*/
pub fn query_contract_hash(
    driver: &ChainDriver,
    contract_address: &str,
) -> Result<Option<String>, Error> {
    let res = driver
        .exec_query(&["query", "compute", "contract-hash", contract_address])?
        .stdout;

    Ok(normalize_code_hash(&res))
}

/**
   Run a smart query against a contract and return the raw JSON
   response. Interpretation of the response is left to the caller.
*/
pub fn query_contract_smart(
    driver: &ChainDriver,
    contract_address: &str,
    query: &str,
) -> Result<json::Value, Error> {
    let res = driver
        .exec_query(&["query", "compute", "query", contract_address, query])?
        .stdout;

    json::from_str(&res).map_err(handle_generic_error)
}

/**
   The CLI prints code hashes as a bare hex line, with a `0x` prefix on
   some versions. Normalize to lowercase hex without the prefix.
*/
fn normalize_code_hash(raw: &str) -> Option<String> {
    let hash = raw.trim().trim_start_matches("0x").to_lowercase();

    if hash.is_empty() {
        None
    } else {
        Some(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_code_hash, parse_balance};

    #[test]
    fn parses_balance_amount() {
        let res = r#"{ "denom": "uscrt", "amount": "100000000" }"#;

        assert_eq!(parse_balance(res).unwrap(), 100000000);
    }

    #[test]
    fn missing_amount_field_is_fatal() {
        let res = r#"{ "denom": "uscrt" }"#;

        assert!(parse_balance(res).is_err());
    }

    #[test]
    fn strips_prefix_and_whitespace() {
        assert_eq!(
            normalize_code_hash("0xABCD1234\n"),
            Some("abcd1234".to_string())
        );
        assert_eq!(
            normalize_code_hash("abcd1234"),
            Some("abcd1234".to_string())
        );
    }

    #[test]
    fn empty_output_means_no_hash() {
        assert_eq!(normalize_code_hash("\n"), None);
        assert_eq!(normalize_code_hash("0x"), None);
    }
}
