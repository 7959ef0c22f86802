use serde::Serialize;

use crate::error::Error;

/// An endpoint of the CoinMarketCap data API.
///
/// `PATH` is relative to the client's base URL.
pub trait Method {
    const PATH: &'static str;

    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;

    /// Rejects a decoded response whose payload must not be used.
    fn check(_response: &Self::Response) -> Result<(), Error> {
        Ok(())
    }
}
