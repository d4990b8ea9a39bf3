// #![deny(warnings)]
#![allow(clippy::too_many_arguments)]
#![doc = include_str!("../README.md")]

//!
//! ## Overview
//!
//! This crate provides a small end-to-end test framework for a confidential
//! CosmWasm counter contract running on a local Secret Network devnet. The
//! framework takes care of the full bootstrap pipeline for each test run:
//!
//! 1. Create a fresh wallet in the chain CLI's test keyring.
//! 2. Fund the wallet from the local faucet until it reaches a target
//!    balance.
//! 3. Upload the contract bytecode, resolve the assigned code ID and its
//!    code hash, instantiate the contract with an initial counter value,
//!    and extract the contract address from the committed transaction.
//! 4. Hand the resulting [`Deployment`](types::deployment::Deployment) to
//!    one or more test cases, which issue typed queries and executes
//!    against the live contract.
//!
//! All chain interactions go through the chain's own CLI binary (`secretd`
//! by default), which owns key management, transaction signing and RPC
//! transport. The framework shells out to the CLI and parses its JSON
//! output, so tests stay oblivious to signing and gas estimation details.
//!
//! ## Example Test
//!
//! ```rust,no_run
//! use secret_contract_test::prelude::*;
//!
//! struct QueryAdminTest;
//!
//! impl ContractTest for QueryAdminTest {
//!     fn run(
//!         &self,
//!         _config: &TestConfig,
//!         driver: &ChainDriver,
//!         wallet: &Wallet,
//!         deployment: &Deployment,
//!     ) -> Result<(), Error> {
//!         let admin: AdminResponse =
//!             driver.query_contract(deployment, &QueryMsg::GetAdmin {})?;
//!         assert_eq("admin is the deployer", &admin.admin, &wallet.address.0)
//!     }
//! }
//!
//! fn main() -> Result<(), Error> {
//!     run_contract_test(&QueryAdminTest)
//! }
//! ```
//!
//! ## Running Tests
//!
//! The live test suite in [`tests`] needs a running devnet and faucet, so it
//! is compiled only with the `devnet` feature:
//!
//! ```bash
//! RUST_LOG=info cargo test --features devnet -- --test-threads=1
//! ```
//!
//! The chain binary, node address, faucet URL and contract bytecode path can
//! be overridden through environment variables; see [`init::init_test`].

pub mod bootstrap;
pub mod chain;
pub mod contract;
pub mod error;
pub mod faucet;
pub mod framework;
pub mod init;
pub mod prelude;
pub mod types;
pub mod util;

#[cfg(any(doc, feature = "devnet"))]
pub mod tests;
