use clap::Parser;

use crate::config::{SeedSource, Selection};
use crate::error::WalletError;

#[derive(Parser, Debug)]
#[command(
    author,
    about = "Offline TON wallet generator",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Generate a new seed phrase
    #[arg(long)]
    pub generate: bool,

    /// Seed phrase (24 words; spaces, commas, tabs, semicolons, pipes and
    /// periods all work as separators)
    #[arg(long)]
    pub seed: Option<String>,

    /// Network: mainnet or testnet (default: mainnet)
    #[arg(long)]
    pub network: Option<String>,

    /// Wallet version: v3r1, v3r2, v4r1, v4r2, v5r1beta, v5r1final (default: v4r2)
    #[arg(long)]
    pub version: Option<String>,

    /// Subwallet ID (default: 698983191 for v3/v4, 0 for v5)
    #[arg(long)]
    pub subwallet: Option<u32>,

    /// Simple output mode (only show address)
    #[arg(long)]
    pub simple: bool,

    /// Emit the wallet report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Any flag at all switches from interactive to direct mode.
    pub fn direct_mode(&self) -> bool {
        self.generate
            || self.seed.is_some()
            || self.network.is_some()
            || self.version.is_some()
            || self.subwallet.is_some()
            || self.simple
            || self.json
    }

    /// Turns the flag bundle into a raw selection. Exactly one seed source
    /// must be chosen in direct mode.
    pub fn selection(&self) -> Result<Selection, WalletError> {
        let seed = match (self.generate, &self.seed) {
            (true, Some(_)) => return Err(WalletError::ConflictingSeedSource),
            (true, None) => SeedSource::Generate,
            (false, Some(text)) => SeedSource::Text(text.clone()),
            (false, None) => return Err(WalletError::MissingSeedSource),
        };

        Ok(Selection {
            seed,
            network: self.network.clone(),
            version: self.version.clone(),
            subwallet: self.subwallet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ton-wallet-manager").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_flags_means_interactive_mode() {
        assert!(!args(&[]).direct_mode());
    }

    #[test]
    fn any_flag_switches_to_direct_mode() {
        assert!(args(&["--generate"]).direct_mode());
        assert!(args(&["--network", "testnet"]).direct_mode());
        assert!(args(&["--simple"]).direct_mode());
    }

    #[test]
    fn seed_source_must_be_exactly_one() {
        assert!(matches!(
            args(&["--generate", "--seed", "a b c"]).selection(),
            Err(WalletError::ConflictingSeedSource)
        ));
        assert!(matches!(
            args(&["--network", "testnet"]).selection(),
            Err(WalletError::MissingSeedSource)
        ));
        assert!(matches!(
            args(&["--generate"]).selection().unwrap().seed,
            SeedSource::Generate
        ));
    }
}
