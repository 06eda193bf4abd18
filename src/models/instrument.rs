//! Stored payment instrument models.
//!
//! Requests compose optional sub-objects (`account_holder`, `customer`,
//! `bank`) by name. The instrument kind is carried in the `type` tag.

use serde::{Deserialize, Serialize};

use super::common::{impl_api_response, HttpMetadata, Links};

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First address line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second address line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// International dialing code, e.g. `+44`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Number without the dialing code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// Whether the account holder is a person or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountHolderType {
    /// Natural person
    Individual,
    /// Registered company
    Corporate,
    /// Government body
    Government,
}

/// Owner of an instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountHolder {
    /// Holder kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub holder_type: Option<AccountHolderType>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Billing address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

/// Customer to link the instrument to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentCustomer {
    /// Existing customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Customer email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Customer phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Make this the customer's default instrument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Bank holding an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// Bank name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Branch name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Bank address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Store a card or wallet token as an instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenInstrument {
    /// Token id, `tok_...`
    pub token: String,
    /// Holder details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<AccountHolder>,
    /// Customer link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<InstrumentCustomer>,
}

/// Store a bank account as an instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankAccountInstrument {
    /// `savings`, `current`, `cash`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank code (sort code, routing number, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Branch code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    /// IBAN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// BBAN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bban: Option<String>,
    /// SWIFT / BIC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_bic: Option<String>,
    /// ISO 4217 currency of the account
    pub currency: String,
    /// ISO 3166-1 alpha-2 country of the account
    pub country: String,
    /// Processing channel the instrument belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_channel_id: Option<String>,
    /// Holder details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<AccountHolder>,
    /// Bank details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankDetails>,
    /// Customer link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<InstrumentCustomer>,
}

/// Body of [`InstrumentsService::create`].
///
/// [`InstrumentsService::create`]: crate::api::InstrumentsService::create
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CreateInstrumentRequest {
    /// From a token
    Token(TokenInstrument),
    /// From bank account details
    BankAccount(BankAccountInstrument),
}

/// Card fields that can be changed on a stored card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardUpdate {
    /// New expiry month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<u8>,
    /// New expiry year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<u16>,
    /// Cardholder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Holder details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<AccountHolder>,
    /// Customer link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<InstrumentCustomer>,
}

/// Body of [`InstrumentsService::update`].
///
/// [`InstrumentsService::update`]: crate::api::InstrumentsService::update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UpdateInstrumentRequest {
    /// Update card details
    Card(CardUpdate),
    /// Replace the underlying card with a new token
    Token(TokenInstrument),
    /// Update bank account details
    BankAccount(BankAccountInstrument),
}

/// Customer an instrument is linked to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    /// Customer id
    #[serde(default)]
    pub id: String,
    /// Customer email
    #[serde(default)]
    pub email: Option<String>,
    /// Customer name
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this is the customer's default instrument
    #[serde(default)]
    pub default: Option<bool>,
}

/// A stored instrument, as returned by create and get.
///
/// Card fields are set for `card` instruments and bank fields for
/// `bank_account` instruments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// `card` or `bank_account`
    #[serde(rename = "type", default)]
    pub instrument_type: String,
    /// Instrument id, `src_...`
    #[serde(default)]
    pub id: String,
    /// Fingerprint shared by instruments with the same details
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Linked customer
    #[serde(default)]
    pub customer: Option<CustomerResponse>,
    /// Holder details
    #[serde(default)]
    pub account_holder: Option<AccountHolder>,

    /// Card expiry month
    #[serde(default)]
    pub expiry_month: Option<u8>,
    /// Card expiry year
    #[serde(default)]
    pub expiry_year: Option<u16>,
    /// Cardholder name
    #[serde(default)]
    pub name: Option<String>,
    /// Card scheme
    #[serde(default)]
    pub scheme: Option<String>,
    /// Last four digits
    #[serde(default)]
    pub last4: Option<String>,
    /// Bank identification number
    #[serde(default)]
    pub bin: Option<String>,
    /// `credit`, `debit`, ...
    #[serde(default)]
    pub card_type: Option<String>,
    /// `consumer` or `commercial`
    #[serde(default)]
    pub card_category: Option<String>,
    /// Issuing bank
    #[serde(default)]
    pub issuer: Option<String>,
    /// Issuer country
    #[serde(default)]
    pub issuer_country: Option<String>,

    /// Bank account type
    #[serde(default)]
    pub account_type: Option<String>,
    /// Bank account number
    #[serde(default)]
    pub account_number: Option<String>,
    /// Bank code
    #[serde(default)]
    pub bank_code: Option<String>,
    /// IBAN
    #[serde(default)]
    pub iban: Option<String>,
    /// SWIFT / BIC
    #[serde(default)]
    pub swift_bic: Option<String>,
    /// Account currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Account country
    #[serde(default)]
    pub country: Option<String>,
    /// Bank details
    #[serde(default)]
    pub bank: Option<BankDetails>,

    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Result of an instrument update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInstrumentResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Instrument kind
    #[serde(rename = "type", default)]
    pub instrument_type: String,
    /// Fingerprint after the update
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Related links
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Payment network a bank payout is routed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentNetwork {
    /// Local clearing
    Local,
    /// SEPA credit transfer
    Sepa,
    /// UK Faster Payments
    Fps,
    /// US ACH
    Ach,
    /// US Fedwire
    Fedwire,
    /// SWIFT wire
    Swift,
}

/// Filters for bank account field formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BankAccountFieldQuery {
    /// Holder kind the fields are for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<AccountHolderType>,
    /// Network the payout will use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_network: Option<PaymentNetwork>,
}

/// An allowed value of a select field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedOption {
    /// Value to submit
    #[serde(default)]
    pub id: String,
    /// Label to display
    #[serde(default)]
    pub display: String,
}

/// A bank account field and its validation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountField {
    /// Field name to submit, e.g. `iban`
    #[serde(default)]
    pub id: String,
    /// Section the field belongs to
    #[serde(default)]
    pub section: Option<String>,
    /// Label to display
    #[serde(default)]
    pub display: Option<String>,
    /// Help text
    #[serde(default)]
    pub help_text: Option<String>,
    /// `string`, `select`, ...
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    /// Whether a value is required
    #[serde(default)]
    pub required: bool,
    /// Regex the value must match
    #[serde(default)]
    pub validation_regex: Option<String>,
    /// Minimum length
    #[serde(default)]
    pub min_length: Option<u32>,
    /// Maximum length
    #[serde(default)]
    pub max_length: Option<u32>,
    /// Allowed values for select fields
    #[serde(default)]
    pub allowed_options: Vec<AllowedOption>,
}

/// A named group of bank account fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountFieldSection {
    /// Section name
    #[serde(default)]
    pub name: String,
    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<BankAccountField>,
}

/// Fields required to store a bank account for a country and currency.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankAccountFieldFormattingResponse {
    /// Response metadata
    #[serde(skip)]
    pub http_metadata: HttpMetadata,
    /// Field sections
    #[serde(default)]
    pub sections: Vec<BankAccountFieldSection>,
}

impl_api_response!(
    InstrumentResponse,
    UpdateInstrumentResponse,
    BankAccountFieldFormattingResponse,
);
