use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::de::{i64_or_string, null_as_default};
use crate::error::Error;
use crate::method::Method;

pub const AUX_FIELDS: &str = "ath,atl,high24h,low24h,num_market_pairs,cmc_rank,date_added,\
max_supply,circulating_supply,total_supply,volume_7d,volume_30d,\
self_reported_circulating_supply,self_reported_market_cap";

/// Query of the listing endpoint. Defaults select the first 1000 assets by
/// market cap with USD, BTC and ETH quotes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct ListingParams {
    #[builder(default = 1)]
    pub start: u32,
    #[builder(default = 1000)]
    pub limit: u32,
    #[builder(default = String::from("market_cap"))]
    pub sort_by: String,
    #[builder(default = String::from("desc"))]
    pub sort_type: String,
    #[builder(default = String::from("USD,BTC,ETH"))]
    pub convert: String,
    #[builder(default = String::from("all"))]
    pub crypto_type: String,
    #[builder(default = String::from("all"))]
    pub tag_type: String,
    #[builder(default)]
    pub audited: bool,
    #[builder(default = String::from(AUX_FIELDS))]
    pub aux: String,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: ListingData,
    #[serde(default)]
    pub status: Status,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub crypto_currency_list: Vec<CryptoItem>,
    #[serde(default, deserialize_with = "i64_or_string")]
    pub total_count: i64,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Status {
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "i64_or_string")]
    pub error_code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_message: String,
    #[serde(default, deserialize_with = "i64_or_string")]
    pub elapsed: i64,
    #[serde(default, deserialize_with = "i64_or_string")]
    pub credit_count: i64,
}

impl Status {
    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CryptoItem {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub cmc_rank: i64,
    pub market_pair_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub circulating_supply: f64,
    pub self_reported_circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub atl: Option<f64>,
    pub high24h: Option<f64>,
    pub low24h: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_added: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quotes: Vec<Quote>,
}

impl CryptoItem {
    /// Quote denominated in `currency`. The last entry wins when the API
    /// repeats a currency.
    pub fn quote(&self, currency: &str) -> Option<&Quote> {
        self.quotes.iter().rev().find(|q| q.name == currency)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume7d: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume30d: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub self_reported_market_cap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change1h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change7d: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change30d: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change60d: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percent_change90d: f64,
    // The API spells it this way.
    #[serde(rename = "fullyDilluttedMarketCap", deserialize_with = "null_as_default")]
    pub fully_diluted_market_cap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap_by_total_supply: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub dominance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub turnover: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ytd_price_change_percentage: f64,
}

pub struct Listing;

impl Method for Listing {
    const PATH: &'static str = "/data-api/v3/cryptocurrency/listing";

    type Response = ListingResponse;
    type Params = ListingParams;

    fn check(response: &ListingResponse) -> Result<(), Error> {
        if response.status.is_error() {
            return Err(Error::Api {
                code: response.status.error_code,
                message: response.status.error_message.clone(),
            });
        }
        Ok(())
    }
}
