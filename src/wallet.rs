use serde::{Deserialize, Serialize};

use crate::address::AddressDeriver;
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::keygen::{derive_keypair, KeyPair};

/// The complete result of one run: resolved config, derived keys, address.
/// Assembled exactly once; read-only afterwards.
pub struct WalletInfo {
    pub config: WalletConfig,
    pub keys: KeyPair,
    pub address: String,
}

/// Derives the key pair from the configured seed and asks the address
/// collaborator for the on-chain address. Performs no cryptography of its
/// own; any collaborator failure aborts the run with no partial output.
pub fn assemble(
    config: WalletConfig,
    deriver: &impl AddressDeriver,
) -> Result<WalletInfo, WalletError> {
    let keys = derive_keypair(&config.seed);
    let address = deriver.derive_address(keys.public_key(), config.version, config.subwallet_id)?;

    Ok(WalletInfo {
        config,
        keys,
        address,
    })
}

/// Machine-readable projection of a wallet, for `--json` output. This is the
/// explicit, clearly-labeled step that exposes the private key.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WalletReport {
    pub address: String,
    pub network: String,
    pub version: String,
    #[serde(rename = "subwalletId")]
    pub subwallet_id: u32,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[serde(rename = "privateKey")]
    pub private_key: String,
}

impl From<&WalletInfo> for WalletReport {
    fn from(info: &WalletInfo) -> Self {
        Self {
            address: info.address.clone(),
            network: info.config.network.name().to_string(),
            version: info.config.version.name().to_string(),
            subwallet_id: info.config.subwallet_id,
            public_key: hex::encode(info.keys.public_key()),
            private_key: hex::encode(info.keys.secret_key()),
        }
    }
}
