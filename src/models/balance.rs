//! Entity balance models.

use serde::{Deserialize, Serialize};

use super::common::{impl_api_response, HttpMetadata, Links};

/// Query parameters for [`BalancesService::retrieve_entity_balances`].
///
/// [`BalancesService::retrieve_entity_balances`]: crate::api::BalancesService::retrieve_entity_balances
///
/// # Example
///
/// ```
/// use checkout_sdk::models::BalancesQuery;
///
/// let query = BalancesQuery::new().currency("GBP");
/// assert_eq!(query.query.as_deref(), Some("currency:GBP"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalancesQuery {
    /// Filter expression, e.g. `currency:GBP`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Include the currency account id of each balance
    #[serde(rename = "withCurrencyAccountId", skip_serializing_if = "Option::is_none")]
    pub with_currency_account_id: Option<bool>,
}

impl BalancesQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to a single holding currency.
    pub fn currency(mut self, currency: impl AsRef<str>) -> Self {
        self.query = Some(format!("currency:{}", currency.as_ref()));
        self
    }

    /// Ask for currency account ids in the response.
    pub fn with_currency_account_id(mut self, enabled: bool) -> Self {
        self.with_currency_account_id = Some(enabled);
        self
    }
}

/// Amounts held in a currency account, in minor units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    /// Funds not yet available
    #[serde(default)]
    pub pending: i64,
    /// Funds available for payout
    #[serde(default)]
    pub available: i64,
    /// Funds owed to the platform
    #[serde(default)]
    pub payable: i64,
    /// Funds held as collateral
    #[serde(default)]
    pub collateral: i64,
}

/// Balance of one currency account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account descriptor
    #[serde(default)]
    pub descriptor: String,
    /// ISO 4217 currency the funds are held in
    #[serde(default)]
    pub holding_currency: String,
    /// Currency account id, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_account_id: Option<String>,
    /// Amounts
    #[serde(default)]
    pub balances: Balances,
}

/// Balances of an entity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BalancesResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// One entry per currency account
    #[serde(default)]
    pub data: Vec<AccountBalance>,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl_api_response!(BalancesResponse);
