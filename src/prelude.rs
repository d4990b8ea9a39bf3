/*!
   Re-exports the types and functions test writers commonly need.
*/

pub use eyre::eyre;
pub use tracing::{debug, info, warn};

pub use crate::bootstrap::deployment::deploy_contract;
pub use crate::chain::builder::ChainBuilder;
pub use crate::chain::driver::ChainDriver;
pub use crate::chain::ext::contract::ContractMethodsExt;
pub use crate::contract::msg::{
    AdminResponse, CountResponse, ExecuteMsg, InstantiateMsg, NewTag, QueryMsg, TagKey,
};
pub use crate::error::{handle_generic_error, Error};
pub use crate::faucet::fill_up_from_faucet;
pub use crate::framework::base::{
    run_contract_test, run_test_sequence, ContractTest, NamedTest, INITIAL_BALANCE, INITIAL_COUNT,
};
pub use crate::init::init_test;
pub use crate::types::config::TestConfig;
pub use crate::types::deployment::Deployment;
pub use crate::types::transaction::{TxAttribute, TxEvent, TxOutcome};
pub use crate::types::wallet::{Wallet, WalletAddress, WalletId};
pub use crate::util::assert::{assert_err, assert_eq, assert_not_eq};
pub use crate::util::retry::assert_eventually_succeed;
