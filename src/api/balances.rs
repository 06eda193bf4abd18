//! Balances service.

use std::sync::Arc;

use crate::auth::AuthorizationType;
use crate::client::{ClientInner, Host};
use crate::models::{BalancesQuery, BalancesResponse};
use crate::Result;

/// Service for entity balance operations.
///
/// Accepts either a secret key or an OAuth token.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: checkout_sdk::CheckoutClient) -> checkout_sdk::Result<()> {
/// use checkout_sdk::models::BalancesQuery;
///
/// let balances = client
///     .balances()
///     .retrieve_entity_balances("ent_kidtcgc3ge5unf4a5i6enhnr5m", &BalancesQuery::new())
///     .await?;
/// println!("{} currency accounts", balances.data.len());
/// # Ok(())
/// # }
/// ```
pub struct BalancesService {
    inner: Arc<ClientInner>,
}

impl BalancesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the balances of every currency account of an entity.
    pub async fn retrieve_entity_balances(
        &self,
        entity_id: &str,
        query: &BalancesQuery,
    ) -> Result<BalancesResponse> {
        self.inner
            .get_with_query(
                Host::Balances,
                &["balances", entity_id],
                AuthorizationType::SecretKeyOrOAuth,
                query,
            )
            .await
    }
}
