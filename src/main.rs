//! Wallet Gateway CLI
//!
//! Drives the gateway against a wallet reachable over JSON-RPC.
//!
//! ```text
//! wallet-gateway --rpc-url http://127.0.0.1:8545 connect
//! wallet-gateway --config gateway.toml switch cronos
//! wallet-gateway balance 0xabc... bsc
//! ```

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;

use wallet_gateway::config::{apply_overrides, load_config, GatewayConfig};
use wallet_gateway::observability::logging::init_logging;
use wallet_gateway::{WalletAddress, WalletGateway};

#[derive(Parser)]
#[command(name = "wallet-gateway")]
#[command(about = "Wallet connection, network switching and bridge/airdrop stand-ins", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wallet JSON-RPC endpoint (overrides the config file).
    #[arg(short, long)]
    rpc_url: Option<String>,

    /// Log level (overrides the config file; RUST_LOG wins over both).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request account access and print the first account
    Connect,
    /// Forget the session (wallets cannot be disconnected remotely)
    Disconnect,
    /// Print the active account, if any
    Account,
    /// List supported networks
    Networks,
    /// Switch the wallet to a network, adding it if unknown
    Switch { network: String },
    /// Print the token balance of an address on a network
    Balance { address: String, network: String },
    /// Bridge tokens from one network to another
    Bridge {
        amount: String,
        from: String,
        to: String,
        address: String,
    },
    /// Claim an airdrop
    Airdrop { address: String, amount: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    let config = apply_overrides(config, cli.rpc_url, cli.log_level)?;

    init_logging(&config.observability.log_level)?;

    tracing::info!(
        provider = config.provider.rpc_url.as_deref().unwrap_or("none"),
        "wallet-gateway v0.1.0 starting"
    );

    let gateway = WalletGateway::from_config(&config)?;

    let output = match cli.command {
        Commands::Connect => {
            let address = gateway.connect().await?;
            json!({ "address": address })
        }
        Commands::Disconnect => {
            gateway.disconnect().await;
            json!({ "disconnected": true })
        }
        Commands::Account => {
            let address = gateway.active_account().await;
            json!({ "address": address })
        }
        Commands::Networks => networks_json(&gateway),
        Commands::Switch { network } => {
            gateway.switch_network(&network).await?;
            json!({ "network": network })
        }
        Commands::Balance { address, network } => {
            let balance = gateway
                .token_balance(&WalletAddress::new(address), &network)
                .await;
            json!({ "network": network, "balance": balance })
        }
        Commands::Bridge {
            amount,
            from,
            to,
            address,
        } => {
            let handle = gateway
                .execute_bridge(&amount, &from, &to, &WalletAddress::new(address))
                .await?;
            json!({ "transaction": handle })
        }
        Commands::Airdrop { address, amount } => {
            let handle = gateway
                .claim_airdrop(&WalletAddress::new(address), &amount)
                .await?;
            json!({ "transaction": handle })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn networks_json(gateway: &WalletGateway) -> Value {
    gateway
        .networks()
        .iter()
        .map(|(key, network)| {
            json!({
                "key": key,
                "chainId": network.chain_id,
                "chainIdDecimal": network.chain_id_u64(),
                "chainName": network.chain_name,
                "symbol": network.native_currency.symbol,
            })
        })
        .collect()
}
