use seyeon_coinmarketcap::CoinMarketCapClient;
use seyeon_coinmarketcap::listing::Listing;
use seyeon_export::{Accounting, build_rows, export_csv, write_csv};
use temp_dir::TempDir;

const HEADER_LINE: &str = "Name,Symbol,Price,24H%,7D%,Market Cap,Volume (24H),Circulating Supply";

const TWO_ASSETS: &[u8] = br#"{
  "data": {
    "cryptoCurrencyList": [
      {
        "id": 1,
        "name": "A",
        "symbol": "SYMBOL",
        "circulatingSupply": 2000000,
        "quotes": [
          {
            "name": "USD",
            "price": 100,
            "percentChange24h": 1.5,
            "percentChange7d": -2.25,
            "marketCap": 5000000,
            "volume24h": 1000
          }
        ]
      },
      {
        "id": 2,
        "name": "B",
        "symbol": "BEE",
        "circulatingSupply": 10,
        "quotes": [
          { "name": "BTC", "price": 0.5, "marketCap": 5 }
        ]
      }
    ],
    "totalCount": "2"
  },
  "status": { "error_code": "0", "error_message": "SUCCESS", "elapsed": "3", "credit_count": 0 }
}"#;

#[test]
fn exports_only_assets_with_a_usd_quote() {
    let response = CoinMarketCapClient::decode::<Listing>(TWO_ASSETS).expect("Failed to decode");
    let rows = build_rows(&response.data.crypto_currency_list, &Accounting::default());

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].fields(),
        [
            "A",
            "SYMBOL",
            "$100.00",
            "1.50%",
            "-2.25%",
            "$5,000,000.00",
            "$1,000.00",
            "2,000,000.000000",
        ]
    );

    let mut out = Vec::new();
    write_csv(&rows, &mut out).expect("Failed to write csv");
    let csv = String::from_utf8(out).unwrap();

    assert_eq!(
        csv,
        format!(
            "{HEADER_LINE}\nA,SYMBOL,$100.00,1.50%,-2.25%,\"$5,000,000.00\",\"$1,000.00\",\"2,000,000.000000\"\n"
        )
    );
    assert!(!csv.contains("BEE"));
}

#[test]
fn export_truncates_an_existing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.child("export.csv");
    std::fs::write(&path, "stale content that is longer than the header line itself\n".repeat(10))
        .unwrap();

    export_csv(&[], &path).expect("Failed to export");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, format!("{HEADER_LINE}\n"));
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.child("missing").join("export.csv");

    let err = export_csv(&[], &path).unwrap_err();
    assert!(matches!(err, seyeon_export::ExportError::Create(_)), "{err:?}");
}
