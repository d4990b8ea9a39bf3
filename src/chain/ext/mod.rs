/*!
   Extension traits adding higher-level methods to
   [`ChainDriver`](crate::chain::driver::ChainDriver).
*/

pub mod contract;
