//! Instruments service for stored payment instruments.

use std::sync::Arc;

use crate::auth::AuthorizationType;
use crate::client::{ClientInner, Host};
use crate::models::{
    BankAccountFieldFormattingResponse, BankAccountFieldQuery, CreateInstrumentRequest,
    EmptyResponse, InstrumentResponse, UpdateInstrumentRequest, UpdateInstrumentResponse,
};
use crate::Result;

/// Service for instrument operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: checkout_sdk::CheckoutClient) -> checkout_sdk::Result<()> {
/// use checkout_sdk::models::{CreateInstrumentRequest, TokenInstrument};
///
/// let created = client
///     .instruments()
///     .create(&CreateInstrumentRequest::Token(TokenInstrument {
///         token: "tok_asoto22g2sfu3v2ut6v7ldqobe".into(),
///         ..Default::default()
///     }))
///     .await?;
///
/// let instrument = client.instruments().get(&created.id).await?;
/// # Ok(())
/// # }
/// ```
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Store a new instrument.
    pub async fn create(&self, request: &CreateInstrumentRequest) -> Result<InstrumentResponse> {
        self.inner
            .post(&["instruments"], AuthorizationType::SecretKey, request)
            .await
    }

    /// Get a stored instrument.
    pub async fn get(&self, instrument_id: &str) -> Result<InstrumentResponse> {
        self.inner
            .get(&["instruments", instrument_id], AuthorizationType::SecretKey)
            .await
    }

    /// Update a stored instrument. Only the fields set in `request` change.
    pub async fn update(
        &self,
        instrument_id: &str,
        request: &UpdateInstrumentRequest,
    ) -> Result<UpdateInstrumentResponse> {
        self.inner
            .patch(
                &["instruments", instrument_id],
                AuthorizationType::SecretKey,
                request,
            )
            .await
    }

    /// Delete a stored instrument.
    pub async fn delete(&self, instrument_id: &str) -> Result<EmptyResponse> {
        self.inner
            .delete(&["instruments", instrument_id], AuthorizationType::SecretKey)
            .await
    }

    /// Get the fields needed to store a bank account for a country and
    /// currency. Requires an OAuth token.
    ///
    /// # Arguments
    ///
    /// * `country` - ISO 3166-1 alpha-2 code, e.g. `"GB"`
    /// * `currency` - ISO 4217 code, e.g. `"GBP"`
    pub async fn bank_account_field_formatting(
        &self,
        country: &str,
        currency: &str,
        query: &BankAccountFieldQuery,
    ) -> Result<BankAccountFieldFormattingResponse> {
        self.inner
            .get_with_query(
                Host::Api,
                &["validation", "bank-accounts", country, currency],
                AuthorizationType::OAuth,
                query,
            )
            .await
    }
}
