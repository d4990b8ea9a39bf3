/*!
   All test cases are placed within this module.

   The tests need a running devnet node, a faucet, and the compiled
   contract bytecode, so the module is compiled only with the `devnet`
   feature:

   ```bash
   RUST_LOG=info cargo test --features devnet -- --test-threads=1
   ```
*/

pub mod admin;
pub mod code_hash;
pub mod counter;
pub mod end_to_end;
pub mod tag;
