use anyhow::Context;
use wallet_vault_core::{Network, VaultConfig};

fn main() -> anyhow::Result<()> {
    wallet_vault_core::init();
    let config = VaultConfig::from_env().context("Failed to load vault configuration")?;

    println!("Wallet Vault Configuration:\n");
    println!("  Data Directory: {}", config.data_dir.display());
    println!("  Wallets File: {}", config.wallets_file().display());
    println!(
        "  Provider URL: {}",
        config.provider_url.as_deref().unwrap_or("(not set, manual wallets only)")
    );
    println!("  Provider Timeout: {} ms", config.provider_timeout.as_millis());
    println!("  Cipher: {}", config.cipher.tag());
    println!("  Version: {} {}", wallet_vault_core::NAME, wallet_vault_core::VERSION);

    println!("\nSupported Networks:\n");
    for network in Network::ALL {
        println!("  {:<12} {} ({})", network.id(), network.name(), network.native_currency());
    }
    Ok(())
}
