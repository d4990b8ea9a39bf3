/*!
   Modules for interacting with the devnet chain through its CLI.
*/

pub mod builder;
pub mod cli;
pub mod driver;
pub mod exec;
pub mod ext;
