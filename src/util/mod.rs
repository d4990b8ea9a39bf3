/*!
   Utility functions used by the test framework.
*/

pub mod assert;
pub mod random;
pub mod retry;
