/*!
   Infrastructure for running test cases against one shared contract
   deployment.
*/

pub mod base;
