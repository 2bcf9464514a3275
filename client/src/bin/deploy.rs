//! One-shot deployment of the social profile contract.
//!
//! Wraps `stellar contract deploy`: pushes the built wasm to the selected
//! network and prints the resulting contract address. No retry, no
//! post-deploy verification.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::process::Command;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Deploy the social profile contract and print its address.
#[derive(Parser, Debug)]
#[command(name = "deploy")]
#[command(about = "One-shot deployment for the social profile contract")]
struct Args {
    /// Path to the built contract wasm
    #[arg(
        long,
        env = "CONTRACT_WASM",
        default_value = "target/wasm32-unknown-unknown/release/soroban_social_profile.wasm"
    )]
    wasm: PathBuf,

    /// Network to deploy to
    #[arg(long, env = "STELLAR_NETWORK", default_value = "testnet")]
    network: String,

    /// Source account (identity name or secret key) funding the deployment
    #[arg(long, env = "STELLAR_SOURCE", default_value = "default")]
    source: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("deploy={},info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(wasm = %args.wasm.display(), network = %args.network, "deploying social profile contract");

    let output = Command::new("stellar")
        .arg("contract")
        .arg("deploy")
        .arg("--wasm")
        .arg(&args.wasm)
        .arg("--source-account")
        .arg(&args.source)
        .arg("--network")
        .arg(&args.network)
        .output()
        .await
        .context("failed to run the stellar CLI")?;

    if !output.status.success() {
        bail!(
            "stellar contract deploy failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let contract_id = String::from_utf8_lossy(&output.stdout).trim().to_string();
    println!("Social profile contract deployed to: {contract_id}");
    Ok(())
}
