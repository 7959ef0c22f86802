use anyhow::Context;
use log::{debug, info, warn};
use seyeon_coinmarketcap::listing::{Listing, ListingParams, ListingResponse};
use seyeon_coinmarketcap::{CoinMarketCapClient, Error};
use seyeon_export::{Accounting, build_rows, export_csv};
use std::path::Path;

pub const OUTPUT_PATH: &str = "./export.csv";

pub async fn fetch_listing(client: &CoinMarketCapClient) -> anyhow::Result<Vec<u8>> {
    match client.fetch::<Listing>(&ListingParams::default()).await {
        Ok(body) => Ok(body),
        Err(Error::Transport(e)) if e.is_body() || e.is_decode() => {
            Err(e).context("Failed to read response.")
        }
        Err(e) => Err(e).context("Error fetching endpoint."),
    }
}

pub fn decode_listing(body: &[u8]) -> anyhow::Result<ListingResponse> {
    let response = CoinMarketCapClient::decode::<Listing>(body)?;

    let status = &response.status;
    debug!(
        "Listing status: timestamp={} elapsed={}ms credits={} total_count={}",
        status.timestamp, status.elapsed, status.credit_count, response.data.total_count
    );

    Ok(response)
}

/// Decode `body` and write the USD rows to `path`. Nothing is created when
/// decoding fails.
pub fn export_body(body: &[u8], path: &Path) -> anyhow::Result<usize> {
    let response = decode_listing(body)?;

    let items = &response.data.crypto_currency_list;
    let accounting = Accounting::default();
    let rows = build_rows(items, &accounting);

    let skipped = items.len() - rows.len();
    if skipped > 0 {
        warn!("{skipped} assets have no USD quote and were left out");
    }

    println!("Saving to {}...", file_name(path));
    export_csv(&rows, path)?;
    info!("Exported {} assets to {}", rows.len(), path.display());

    Ok(rows.len())
}

pub async fn export_listing(client: &CoinMarketCapClient, path: &Path) -> anyhow::Result<usize> {
    println!("Fetching API response...");
    let body = fetch_listing(client).await?;

    export_body(&body, path)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
