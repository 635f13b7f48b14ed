use crate::wallet::WalletInfo;

pub fn print_header() {
    println!("\n╔════════════════════════════════════╗");
    println!("║     TON Wallet Manager v1.0        ║");
    println!("║     Offline Wallet Generator       ║");
    println!("╚════════════════════════════════════╝");
    println!();
}

/// Full interactive-mode output, security reminders included.
pub fn print_wallet(info: &WalletInfo) {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║            Wallet Created Successfully!                    ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Network:      {}", info.config.network.name());
    println!("  Version:      {}", info.config.version.name());
    println!("  Subwallet ID: {}", info.config.subwallet_id);
    println!();
    println!("  Address:      {}", info.address);
    println!();
    println!("  Public Key:   {}", hex::encode(info.keys.public_key()));
    println!("  Private Key:  {}", hex::encode(info.keys.secret_key()));
    println!();
    println!("════════════════════════════════════════════════════════════");
    println!();
    println!("  ⚠️  SECURITY REMINDERS:");
    println!("  • Store your seed phrase securely offline");
    println!("  • Never share your private key or seed phrase");
    println!("  • This generator works completely offline");
    println!();
}

/// Field-per-line output for direct mode, easy to pipe.
pub fn print_wallet_cli(info: &WalletInfo) {
    println!("Address: {}", info.address);
    println!("Network: {}", info.config.network.name());
    println!("Version: {}", info.config.version.name());
    println!("Subwallet: {}", info.config.subwallet_id);
    println!("PublicKey: {}", hex::encode(info.keys.public_key()));
    println!("PrivateKey: {}", hex::encode(info.keys.secret_key()));
}
