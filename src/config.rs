use rand::{CryptoRng, RngCore};

use crate::error::WalletError;
use crate::seed::{generate_seed, SeedPhrase};

pub const MAINNET_GLOBAL_ID: i32 = -239;
pub const TESTNET_GLOBAL_ID: i32 = -3;

/// Standard subwallet ID for V3/V4 contracts. V5 contracts default to 0.
pub const DEFAULT_SUBWALLET_ID: u32 = 698_983_191;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Accepts short and long forms, case-insensitive.
    pub fn parse(token: &str) -> Result<Self, WalletError> {
        match token.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(WalletError::InvalidNetwork(token.to_string())),
        }
    }

    pub fn global_id(self) -> i32 {
        match self {
            Network::Mainnet => MAINNET_GLOBAL_ID,
            Network::Testnet => TESTNET_GLOBAL_ID,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
        }
    }
}

/// Wallet contract variant. The V5 contracts encode network identity in
/// their version config, so those variants carry the resolved network's
/// global ID; V3/V4 do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletVersion {
    V3R1,
    V3R2,
    V4R1,
    V4R2,
    V5R1Beta { network_global_id: i32 },
    V5R1Final { network_global_id: i32 },
}

impl WalletVersion {
    /// Accepts the documented aliases, case-insensitive. The network must
    /// already be resolved because the V5 variants embed its global ID.
    pub fn parse(token: &str, network: Network) -> Result<Self, WalletError> {
        match token.to_lowercase().as_str() {
            "v3r1" => Ok(WalletVersion::V3R1),
            "v3r2" => Ok(WalletVersion::V3R2),
            "v4r1" => Ok(WalletVersion::V4R1),
            "v4r2" => Ok(WalletVersion::V4R2),
            "v5r1beta" | "v5beta" => Ok(WalletVersion::V5R1Beta {
                network_global_id: network.global_id(),
            }),
            "v5r1final" | "v5r1" | "v5" => Ok(WalletVersion::V5R1Final {
                network_global_id: network.global_id(),
            }),
            _ => Err(WalletError::InvalidVersion(token.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WalletVersion::V3R1 => "V3R1",
            WalletVersion::V3R2 => "V3R2",
            WalletVersion::V4R1 => "V4R1",
            WalletVersion::V4R2 => "V4R2",
            WalletVersion::V5R1Beta { .. } => "V5R1 Beta",
            WalletVersion::V5R1Final { .. } => "V5R1 Final",
        }
    }

    pub fn is_v5(self) -> bool {
        matches!(
            self,
            WalletVersion::V5R1Beta { .. } | WalletVersion::V5R1Final { .. }
        )
    }

    pub fn default_subwallet_id(self) -> u32 {
        if self.is_v5() {
            0
        } else {
            DEFAULT_SUBWALLET_ID
        }
    }

    pub fn network_global_id(self) -> Option<i32> {
        match self {
            WalletVersion::V5R1Beta { network_global_id }
            | WalletVersion::V5R1Final { network_global_id } => Some(network_global_id),
            _ => None,
        }
    }

    /// Stable identifier for the contract code, hashed into the address.
    pub(crate) fn code_tag(self) -> &'static [u8] {
        match self {
            WalletVersion::V3R1 => b"wallet.v3r1",
            WalletVersion::V3R2 => b"wallet.v3r2",
            WalletVersion::V4R1 => b"wallet.v4r1",
            WalletVersion::V4R2 => b"wallet.v4r2",
            WalletVersion::V5R1Beta { .. } => b"wallet.v5r1.beta",
            WalletVersion::V5R1Final { .. } => b"wallet.v5r1.final",
        }
    }
}

/// Where the seed phrase comes from.
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// Draw a fresh random phrase from the wordlist.
    Generate,
    /// Free-form text supplied by the caller, normalized during resolution.
    Text(String),
    /// An already-normalized phrase (interactive entry).
    Words(SeedPhrase),
}

/// Raw user selections, before validation and defaulting.
#[derive(Debug, Clone)]
pub struct Selection {
    pub seed: SeedSource,
    pub network: Option<String>,
    pub version: Option<String>,
    pub subwallet: Option<u32>,
}

/// Fully resolved, internally consistent wallet configuration.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    pub seed: SeedPhrase,
    pub network: Network,
    pub version: WalletVersion,
    pub subwallet_id: u32,
}

/// Reconciles raw selections into a validated config. The network is
/// resolved first (the V5 variants embed its global ID), then the version,
/// then the subwallet ID, whose default depends on the version family. An
/// explicit subwallet override always wins.
pub fn resolve<R: RngCore + CryptoRng>(
    selection: Selection,
    rng: &mut R,
) -> Result<WalletConfig, WalletError> {
    let seed = match selection.seed {
        SeedSource::Generate => generate_seed(rng),
        SeedSource::Text(text) => SeedPhrase::parse(&text)?,
        SeedSource::Words(phrase) => phrase,
    };

    let network = match selection.network.as_deref() {
        Some(token) => Network::parse(token)?,
        None => Network::Mainnet,
    };

    let version = match selection.version.as_deref() {
        Some(token) => WalletVersion::parse(token, network)?,
        None => WalletVersion::V4R2,
    };

    let subwallet_id = selection
        .subwallet
        .unwrap_or_else(|| version.default_subwallet_id());

    Ok(WalletConfig {
        seed,
        network,
        version,
        subwallet_id,
    })
}

/// Parses a textual subwallet override as an unsigned 32-bit integer.
pub fn parse_subwallet_id(text: &str) -> Result<u32, WalletError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| WalletError::InvalidSubwallet(trimmed.to_string()))
}
