use clap::Parser;
use dotenv::dotenv;
use log::error;
use seyeon_coinmarketcap::{BASE_URL, CoinMarketCapClient};
use std::io::BufRead;
use std::path::Path;
mod exporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exit right after writing the file instead of waiting for enter
    #[arg(long)]
    no_wait: bool,

    /// CoinMarketCap API host
    #[arg(long, env = "COINMARKETCAP_BASE_URL", default_value = BASE_URL)]
    base_url: String,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();
}

fn wait_for_enter() -> std::io::Result<()> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

async fn run(args: &Args) -> anyhow::Result<usize> {
    let client = CoinMarketCapClient::with_base_url(&args.base_url)?;

    exporter::export_listing(&client, Path::new(exporter::OUTPUT_PATH)).await
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Args::parse();
    init_logging();

    let rt = tokio::runtime::Runtime::new()?;

    if let Err(e) = rt.block_on(run(&args)) {
        error!("Export failed: {e:#}");
        return Err(e);
    }

    if !args.no_wait {
        println!("Press the enter key to exit.");
        wait_for_enter()?;
    }

    Ok(())
}
