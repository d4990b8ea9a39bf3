/*!
   The committed result of a submitted transaction, parsed from the chain
   CLI's JSON output.
*/

use eyre::eyre;
use serde_json as json;

use crate::error::{handle_generic_error, Error};

/**
   A single key/value attribute of an emitted event.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxAttribute {
    pub key: String,
    pub value: String,
}

/**
   An event emitted by a committed transaction, with its ordered list of
   attributes.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxEvent {
    pub event_type: String,
    pub attributes: Vec<TxAttribute>,
}

/**
   The outcome of a committed transaction: the status code (0 means
   success), the gas consumed, the raw log for diagnosis, and the ordered
   list of emitted events.

   Outcomes are inspected immediately after submission and never stored.
*/
#[derive(Debug, Clone)]
pub struct TxOutcome {
    pub txhash: String,
    pub code: u32,
    pub gas_used: u64,
    pub raw_log: String,
    pub events: Vec<TxEvent>,
}

impl TxOutcome {
    /**
       Parse a transaction outcome from the JSON shape returned by
       `query tx <hash> --output json`.

       A missing `code` field means the transaction succeeded. The
       structured event log under `logs` is flattened into a single
       ordered event list, preserving the emission order.
    */
    pub fn from_json(value: &json::Value) -> Result<Self, Error> {
        let txhash = value
            .get("txhash")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::malformed_response("expected txhash field".to_string()))?
            .to_string();

        let code = value.get("code").and_then(|v| v.as_u64()).unwrap_or(0) as u32;

        let gas_used = parse_json_u64(value.get("gas_used"))?;

        let raw_log = value
            .get("raw_log")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let mut events = Vec::new();

        if let Some(logs) = value.get("logs").and_then(|v| v.as_array()) {
            for log in logs {
                if let Some(log_events) = log.get("events").and_then(|v| v.as_array()) {
                    for event in log_events {
                        events.push(parse_event(event)?);
                    }
                }
            }
        }

        Ok(Self {
            txhash,
            code,
            gas_used,
            raw_log,
            events,
        })
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /**
       Look up an attribute by key in the first emitted event. Used for
       the `code_id` assigned by a store-code transaction, which the
       chain reports in its first event.
    */
    pub fn first_event_attribute(&self, key: &str) -> Option<&str> {
        self.events
            .first()
            .and_then(|event| attribute_value(event, key))
    }

    /**
       Look up an attribute by event type and key across all emitted
       events, in emission order.
    */
    pub fn event_attribute(&self, event_type: &str, key: &str) -> Option<&str> {
        self.events
            .iter()
            .filter(|event| event.event_type == event_type)
            .find_map(|event| attribute_value(event, key))
    }
}

fn attribute_value<'a>(event: &'a TxEvent, key: &str) -> Option<&'a str> {
    event
        .attributes
        .iter()
        .find(|attribute| attribute.key == key)
        .map(|attribute| attribute.value.as_str())
}

fn parse_event(value: &json::Value) -> Result<TxEvent, Error> {
    let event_type = value
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::malformed_response("expected event type field".to_string()))?
        .to_string();

    let mut attributes = Vec::new();

    if let Some(raw_attributes) = value.get("attributes").and_then(|v| v.as_array()) {
        for attribute in raw_attributes {
            let key = attribute
                .get("key")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    Error::malformed_response("expected attribute key field".to_string())
                })?
                .to_string();

            let value = attribute
                .get("value")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();

            attributes.push(TxAttribute { key, value });
        }
    }

    Ok(TxEvent {
        event_type,
        attributes,
    })
}

/**
   The CLI reports numeric fields like `gas_used` as JSON strings, while
   older versions used plain numbers. Accept both, defaulting to zero
   when the field is absent.
*/
fn parse_json_u64(value: Option<&json::Value>) -> Result<u64, Error> {
    match value {
        None => Ok(0),
        Some(v) => {
            if let Some(n) = v.as_u64() {
                Ok(n)
            } else if let Some(s) = v.as_str() {
                s.parse().map_err(handle_generic_error)
            } else {
                Err(Error::generic(eyre!(
                    "expected numeric or string field, got: {}",
                    v
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::TxOutcome;

    fn store_code_tx() -> serde_json::Value {
        json!({
            "height": "102",
            "txhash": "3E2B9A6A0E8C6C8C3A3F2D8C9B2A1F0E",
            "code": 0,
            "raw_log": "[{\"events\":[]}]",
            "gas_wanted": "5000000",
            "gas_used": "1234567",
            "logs": [
                {
                    "msg_index": 0,
                    "log": "",
                    "events": [
                        {
                            "type": "message",
                            "attributes": [
                                { "key": "action", "value": "store-code" },
                                { "key": "code_id", "value": "42" }
                            ]
                        },
                        {
                            "type": "message",
                            "attributes": [
                                { "key": "contract_address", "value": "secret1abcdef" }
                            ]
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn parses_committed_transaction() {
        let outcome = TxOutcome::from_json(&store_code_tx()).unwrap();

        assert!(outcome.is_success());
        assert_eq!(outcome.gas_used, 1234567);
        assert_eq!(outcome.events.len(), 2);
    }

    #[test]
    fn finds_code_id_in_first_event() {
        let outcome = TxOutcome::from_json(&store_code_tx()).unwrap();

        assert_eq!(outcome.first_event_attribute("code_id"), Some("42"));
    }

    #[test]
    fn finds_contract_address_by_event_type_and_key() {
        let outcome = TxOutcome::from_json(&store_code_tx()).unwrap();

        assert_eq!(
            outcome.event_attribute("message", "contract_address"),
            Some("secret1abcdef")
        );
    }

    #[test]
    fn missing_code_means_success() {
        let tx = json!({ "txhash": "AA", "gas_used": "1" });
        let outcome = TxOutcome::from_json(&tx).unwrap();

        assert!(outcome.is_success());
    }

    #[test]
    fn failed_transaction_keeps_raw_log() {
        let tx = json!({
            "txhash": "AA",
            "code": 5,
            "raw_log": "out of gas",
            "gas_used": "200000"
        });

        let outcome = TxOutcome::from_json(&tx).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.raw_log, "out of gas");
    }

    #[test]
    fn rejects_transaction_without_hash() {
        let tx = json!({ "code": 0 });

        assert!(TxOutcome::from_json(&tx).is_err());
    }

    #[test]
    fn absent_attribute_returns_none() {
        let outcome = TxOutcome::from_json(&store_code_tx()).unwrap();

        assert_eq!(outcome.first_event_attribute("no_such_key"), None);
        assert_eq!(outcome.event_attribute("wasm", "code_id"), None);
    }
}
