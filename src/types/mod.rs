/*!
   Types used throughout the test framework.
*/

pub mod config;
pub mod deployment;
pub mod transaction;
pub mod wallet;
