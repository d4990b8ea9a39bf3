/*!
   JSON message shapes accepted and returned by the counter contract.

   These mirror the contract's own message definitions. The contract is
   the authority on acceptance; no validation happens on this side
   beyond the type shape.
*/

use serde::{Deserialize, Serialize};

/**
   Init message carried by the instantiate transaction. Sets the
   starting value of the counter.
*/
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct InstantiateMsg {
    pub count: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Increment the counter by one.
    Increment {},

    /// Register a new tag with its key material.
    Register { tag: NewTag },
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns the admin address recorded at instantiation.
    GetAdmin {},

    /// Returns the current counter value.
    GetCount {},
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct AdminResponse {
    pub admin: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct CountResponse {
    pub count: i32,
}

/**
   Fixed-length key material with a version counter, as the contract
   stores it per tag.
*/
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct TagKey {
    pub value: [u8; 16],
    pub version: u8,
}

/**
   A tag registration payload: a numeric tag identifier together with
   its change key and MAC read key.
*/
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct NewTag {
    pub id: u64,
    pub change_key: TagKey,
    pub mac_read_key: TagKey,
}

impl NewTag {
    /**
       A tag with all-zero key material at version 0, as used by the
       registration test.
    */
    pub fn zeroed(id: u64) -> Self {
        Self {
            id,
            change_key: TagKey {
                value: [0; 16],
                version: 0,
            },
            mac_read_key: TagKey {
                value: [0; 16],
                version: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ExecuteMsg, NewTag, QueryMsg};

    #[test]
    fn increment_serializes_to_empty_object() {
        let msg = serde_json::to_value(ExecuteMsg::Increment {}).unwrap();

        assert_eq!(msg, json!({ "increment": {} }));
    }

    #[test]
    fn queries_serialize_to_snake_case_objects() {
        let get_admin = serde_json::to_value(QueryMsg::GetAdmin {}).unwrap();
        let get_count = serde_json::to_value(QueryMsg::GetCount {}).unwrap();

        assert_eq!(get_admin, json!({ "get_admin": {} }));
        assert_eq!(get_count, json!({ "get_count": {} }));
    }

    #[test]
    fn register_carries_the_full_tag_payload() {
        let msg = ExecuteMsg::Register {
            tag: NewTag::zeroed(1370400024739904),
        };

        let value = serde_json::to_value(msg).unwrap();

        let zero_key = json!({ "value": vec![0; 16], "version": 0 });

        assert_eq!(
            value,
            json!({
                "register": {
                    "tag": {
                        "id": 1370400024739904u64,
                        "change_key": zero_key.clone(),
                        "mac_read_key": zero_key,
                    }
                }
            })
        );
    }
}
