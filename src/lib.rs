pub mod address;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod interactive;
pub mod keygen;
pub mod seed;
pub mod wallet;

pub use address::{AddressDeriver, StateInitDeriver};
pub use cli::Args;
pub use config::{resolve, Network, SeedSource, Selection, WalletConfig, WalletVersion};
pub use error::WalletError;
pub use keygen::{derive_keypair, KeyPair};
pub use seed::{generate_seed, read_phrase, SeedPhrase};
pub use wallet::{assemble, WalletInfo, WalletReport};
