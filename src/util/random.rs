/*!
   Utilities for random value generation.
*/

use rand::Rng;

pub fn random_u32() -> u32 {
    let mut rng = rand::thread_rng();
    rng.gen()
}

pub fn random_u64() -> u64 {
    let mut rng = rand::thread_rng();
    rng.gen()
}

/**
   A short random hex string, used to keep contract labels and wallet IDs
   unique across repeated runs against the same devnet.
*/
pub fn random_string() -> String {
    format!("{:x}", random_u64())
}
