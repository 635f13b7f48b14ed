use thiserror::Error;

/// Failure modes of wallet generation. Every variant carries enough context
/// (field name, offending value or count) for the caller to correct input.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Input stream ended before a required field was obtained.
    #[error("failed to read {0}")]
    InputRead(&'static str),

    #[error("seed phrase must contain exactly 24 words, got {0}")]
    WordCount(usize),

    #[error("invalid network: {0} (use mainnet or testnet)")]
    InvalidNetwork(String),

    #[error("invalid version: {0} (use v3r1, v3r2, v4r1, v4r2, v5r1beta or v5r1final)")]
    InvalidVersion(String),

    #[error("invalid subwallet ID: {0} (expected an unsigned 32-bit integer)")]
    InvalidSubwallet(String),

    #[error("either --generate or --seed must be provided")]
    MissingSeedSource,

    #[error("--generate and --seed are mutually exclusive")]
    ConflictingSeedSource,

    #[error("failed to create wallet address: {0}")]
    AddressDerivation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
