/*!
   Bootstrap routines turning a bare devnet connection into a live
   contract deployment.
*/

pub mod deployment;
