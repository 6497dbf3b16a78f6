//! Reprocessa uma transação assinada contra um node RPC e imprime a decisão.
//!
//! ```bash
//! cargo run -p liquidity-sniper --example replay_tx -- <RPC_ENDPOINT> <SETTINGS_JSON> <RAW_TX_HEX>
//! ```

use std::env;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethereum_types::U256;
use liquidity_sniper::{LiquiditySniper, SniperSettings};
use sniper_core::traits::SnipeExecutor;
use sniper_core::{RawTransaction, RequestContext};
use sniper_rpc::{RpcConfig, SniperRpcClient};
use tracing_subscriber::EnvFilter;

/// Executor que apenas registra o disparo
struct DryRunExecutor;

#[async_trait]
impl SnipeExecutor for DryRunExecutor {
    async fn snipe(&self, _ctx: &RequestContext, priority_gas_price: U256) -> sniper_core::error::Result<()> {
        tracing::info!(gas_price = %priority_gas_price, "snipe simulado");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Uso: {} <RPC_ENDPOINT> <SETTINGS_JSON> <RAW_TX_HEX>", args[0]);
        eprintln!("Exemplo: {} https://bsc-dataseed.binance.org settings.json 0xf86c...", args[0]);
        std::process::exit(1);
    }

    let settings = SniperSettings::from_json(&fs::read_to_string(&args[2])?)?;
    let raw = hex::decode(args[3].trim_start_matches("0x"))?;
    let tx = RawTransaction::decode_legacy(&raw)?;

    let provider = Arc::new(
        SniperRpcClient::new(RpcConfig {
            endpoint: args[1].clone(),
            ..Default::default()
        })
        .await?,
    );
    let sniper = LiquiditySniper::connect(provider, Arc::new(DryRunExecutor), &settings).await?;

    let ctx = RequestContext::with_timeout(Duration::from_secs(10));
    let outcome = sniper.process(&ctx, &tx).await?;

    println!("Tx: {:?}", tx.hash);
    println!("Chain id: {}", sniper.config().chain_id);
    println!("Decisão: {}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
