/*!
   Types for the wallet that signs every transaction in a test run.
*/

/**
   Newtype wrapper for the ID of a wallet in the chain CLI's test keyring.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletId(pub String);

/**
   Newtype wrapper for the bech32 address of a wallet.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAddress(pub String);

/**
   A wallet in the chain CLI's keyring. The signing key itself stays inside
   the keyring; the framework only ever needs the ID to sign with and the
   address to fund and compare against.
*/
#[derive(Debug, Clone)]
pub struct Wallet {
    pub id: WalletId,
    pub address: WalletAddress,
}

impl Wallet {
    pub fn new(id: String, address: String) -> Self {
        Self {
            id: WalletId(id),
            address: WalletAddress(address),
        }
    }
}

impl core::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
