use log::debug;
use seyeon_coinmarketcap::listing::CryptoItem;

use crate::format::{Accounting, format_decimal, format_percent, format_price};

pub const HEADER: [&str; 8] = [
    "Name",
    "Symbol",
    "Price",
    "24H%",
    "7D%",
    "Market Cap",
    "Volume (24H)",
    "Circulating Supply",
];

pub const QUOTE_CURRENCY: &str = "USD";

/// One exported line, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change_24h: String,
    pub change_7d: String,
    pub market_cap: String,
    pub volume_24h: String,
    pub circulating_supply: String,
}

impl ListingRow {
    /// `None` when the asset carries no USD quote.
    pub fn from_item(item: &CryptoItem, accounting: &Accounting) -> Option<Self> {
        let quote = item.quote(QUOTE_CURRENCY)?;

        Some(Self {
            name: item.name.clone(),
            symbol: item.symbol.clone(),
            price: format_price(quote.price),
            change_24h: format_percent(quote.percent_change24h),
            change_7d: format_percent(quote.percent_change7d),
            market_cap: accounting.format_money(quote.market_cap),
            volume_24h: accounting.format_money(quote.volume24h),
            circulating_supply: format_decimal(item.circulating_supply),
        })
    }

    /// Fields in `HEADER` order.
    pub fn fields(&self) -> [&str; 8] {
        [
            self.name.as_str(),
            self.symbol.as_str(),
            self.price.as_str(),
            self.change_24h.as_str(),
            self.change_7d.as_str(),
            self.market_cap.as_str(),
            self.volume_24h.as_str(),
            self.circulating_supply.as_str(),
        ]
    }
}

/// Rows for every asset with a USD quote, in listing order.
pub fn build_rows(items: &[CryptoItem], accounting: &Accounting) -> Vec<ListingRow> {
    let rows: Vec<ListingRow> = items
        .iter()
        .filter_map(|item| {
            let row = ListingRow::from_item(item, accounting);
            if row.is_none() {
                debug!("Skipping {} ({}): no {QUOTE_CURRENCY} quote", item.name, item.symbol);
            }
            row
        })
        .collect();

    debug!("{} of {} assets have a {QUOTE_CURRENCY} quote", rows.len(), items.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use seyeon_coinmarketcap::listing::Quote;

    fn item(name: &str, quotes: Vec<Quote>) -> CryptoItem {
        CryptoItem {
            name: name.to_string(),
            symbol: name.to_uppercase(),
            circulating_supply: 1500.0,
            quotes,
            ..Default::default()
        }
    }

    fn quote(currency: &str, price: f64) -> Quote {
        Quote {
            name: currency.to_string(),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn formats_every_field_from_the_usd_quote() {
        let asset = item(
            "Bitcoin",
            vec![
                quote("BTC", 1.0),
                Quote {
                    name: "USD".into(),
                    price: 1234.5,
                    percent_change24h: -3.456,
                    percent_change7d: 12.0,
                    market_cap: 1234567.891,
                    volume24h: 98765.4321,
                    ..Default::default()
                },
            ],
        );

        let row = ListingRow::from_item(&asset, &Accounting::default()).unwrap();

        assert_eq!(
            row.fields(),
            [
                "Bitcoin",
                "BITCOIN",
                "$1234.50",
                "-3.46%",
                "12.00%",
                "$1,234,567.89",
                "$98,765.43",
                "1,500.000000",
            ]
        );
    }

    #[test]
    fn skips_assets_without_usd_and_keeps_order() {
        let items = vec![
            item("a", vec![quote("USD", 3.0)]),
            item("b", vec![quote("BTC", 1.0), quote("ETH", 2.0)]),
            item("c", vec![]),
            item("d", vec![quote("ETH", 1.0), quote("USD", 1.0)]),
        ];

        let rows = build_rows(&items, &Accounting::default());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["a", "d"]);
    }

    #[test]
    fn all_zero_usd_quote_is_still_exported() {
        let asset = item("zero", vec![quote("USD", 0.0)]);

        let row = ListingRow::from_item(&asset, &Accounting::default()).unwrap();

        assert_eq!(row.price, "$0.00");
        assert_eq!(row.market_cap, "$0.00");
        assert_eq!(row.change_24h, "0.00%");
    }

    #[test]
    fn currency_match_is_exact() {
        let asset = item("lower", vec![quote("usd", 1.0), quote("USDT", 1.0)]);

        assert!(ListingRow::from_item(&asset, &Accounting::default()).is_none());
    }

    #[test]
    fn empty_listing_yields_no_rows() {
        assert!(build_rows(&[], &Accounting::default()).is_empty());
    }
}
