/*!
   Wrappers around individual chain CLI commands.
*/

pub mod bootstrap;
pub mod compute;
pub mod query;
