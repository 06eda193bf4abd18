//! HTTP client implementation for the Checkout API.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{instrument, Span};

use crate::api::{
    BalancesService, EventsService, FilesService, InstrumentsService, ReportsService,
    WebhooksService,
};
use crate::auth::{AuthorizationType, Credentials, OAuthToken};
use crate::models::{ApiResponse, ContentResponse, HttpMetadata};
use crate::{Environment, Error, Result};

use super::config::ClientConfig;

/// Environment variable holding the secret API key.
pub const ENV_SECRET_KEY: &str = "CHECKOUT_SECRET_KEY";
/// Environment variable holding a pre-issued OAuth access token.
pub const ENV_OAUTH_ACCESS_TOKEN: &str = "CHECKOUT_OAUTH_ACCESS_TOKEN";
/// Environment variable selecting the environment (`sandbox`, `production` or a URI).
pub const ENV_ENVIRONMENT: &str = "CHECKOUT_ENVIRONMENT";

/// The main client for interacting with the Checkout API.
///
/// The client owns the HTTP transport, the credentials and the
/// configuration. None of them change after construction, so the client can
/// be cloned cheaply and shared across tasks.
///
/// # Example
///
/// ```no_run
/// use checkout_sdk::{CheckoutClient, Environment};
/// use checkout_sdk::models::BalancesQuery;
///
/// # async fn example() -> checkout_sdk::Result<()> {
/// let client = CheckoutClient::from_secret_key("sk_sbox_xxx", Environment::Sandbox)?;
///
/// let balances = client
///     .balances()
///     .retrieve_entity_balances("ent_kidtcgc3ge5unf4a5i6enhnr5m", &BalancesQuery::new().currency("EUR"))
///     .await?;
/// for account in &balances.data {
///     println!("{}: {}", account.descriptor, account.balances.available);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CheckoutClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
    pub(crate) oauth_token: Option<OAuthToken>,
}

/// Which base URI of the environment a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Host {
    Api,
    Balances,
}

impl CheckoutClient {
    /// Create a client from credentials and configuration.
    ///
    /// The HTTP transport is built with the configured timeouts.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self::with_http_client(http, credentials, config))
    }

    /// Create a client over a caller-supplied HTTP transport.
    ///
    /// The transport's own timeouts apply; `config.timeout` and
    /// `config.connect_timeout` are not used.
    pub fn with_http_client(
        http: reqwest::Client,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                config,
                oauth_token: None,
            }),
        }
    }

    /// Create a client authenticated with a secret API key.
    pub fn from_secret_key(secret_key: impl Into<String>, environment: Environment) -> Result<Self> {
        Self::new(
            Credentials::new().with_secret_key(secret_key),
            ClientConfig::default().with_environment(environment),
        )
    }

    /// Create a client with an OAuth access token obtained from client
    /// credentials.
    ///
    /// The token is requested once. Rebuild the client once
    /// [`OAuthToken::is_expired`] reports `true`.
    pub async fn from_oauth(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scopes: &[&str],
        environment: Environment,
    ) -> Result<Self> {
        Self::from_oauth_with_config(
            client_id,
            client_secret,
            scopes,
            ClientConfig::default().with_environment(environment),
        )
        .await
    }

    /// Like [`from_oauth`](Self::from_oauth), with custom configuration.
    pub async fn from_oauth_with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scopes: &[&str],
        config: ClientConfig,
    ) -> Result<Self> {
        let client = Self::new(Credentials::new(), config)?;
        let client_id: String = client_id.into();
        let client_secret = secrecy::SecretString::from(client_secret.into());

        let token = crate::auth::request_token(
            &client.inner.http,
            client.inner.config.environment.authorization_uri(),
            &client_id,
            &client_secret,
            scopes,
        )
        .await?;

        let credentials = Credentials::new().with_oauth_token(token.access_token().expose_secret());
        let inner = ClientInner {
            http: client.inner.http.clone(),
            credentials,
            config: client.inner.config.clone(),
            oauth_token: Some(token),
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Create a client from environment variables.
    ///
    /// Reads [`ENV_SECRET_KEY`], [`ENV_OAUTH_ACCESS_TOKEN`] and
    /// [`ENV_ENVIRONMENT`]. At least one credential must be set.
    pub fn from_env() -> Result<Self> {
        let (credentials, config) = config_from_lookup(|name| std::env::var(name).ok())?;
        Self::new(credentials, config)
    }

    /// Get the balances service.
    pub fn balances(&self) -> BalancesService {
        BalancesService::new(self.inner.clone())
    }

    /// Get the events service.
    pub fn events(&self) -> EventsService {
        EventsService::new(self.inner.clone())
    }

    /// Get the files service.
    pub fn files(&self) -> FilesService {
        FilesService::new(self.inner.clone())
    }

    /// Get the instruments service.
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.inner.clone())
    }

    /// Get the reports service.
    pub fn reports(&self) -> ReportsService {
        ReportsService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// Get the current environment.
    pub fn environment(&self) -> &Environment {
        &self.inner.config.environment
    }

    /// Get the configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Get the OAuth token, for clients built with [`from_oauth`](Self::from_oauth).
    pub fn oauth_token(&self) -> Option<&OAuthToken> {
        self.inner.oauth_token.as_ref()
    }
}

fn config_from_lookup<F>(lookup: F) -> Result<(Credentials, ClientConfig)>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let mut credentials = Credentials::new();
    if let Some(secret_key) = lookup(ENV_SECRET_KEY) {
        credentials = credentials.with_secret_key(secret_key.trim());
    }
    if let Some(token) = lookup(ENV_OAUTH_ACCESS_TOKEN) {
        credentials = credentials.with_oauth_token(token.trim());
    }
    if credentials.is_empty() {
        return Err(Error::Config(format!(
            "Neither {} nor {} is set",
            ENV_SECRET_KEY, ENV_OAUTH_ACCESS_TOKEN
        )));
    }

    let environment = match lookup(ENV_ENVIRONMENT) {
        Some(value) => value.parse()?,
        None => Environment::default(),
    };

    Ok((credentials, ClientConfig::default().with_environment(environment)))
}

/// Join path segments with `/`, percent-encoding each one.
pub(crate) fn build_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| urlencoding::encode(segment))
        .collect::<Vec<_>>()
        .join("/")
}

/// A successful response before decoding.
struct RawResponse {
    http_metadata: HttpMetadata,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl ClientInner {
    fn base_uri(&self, host: Host) -> &str {
        match host {
            Host::Api => self.config.environment.base_uri(),
            Host::Balances => self.config.environment.balances_uri(),
        }
    }

    /// Build the full URL for a path under a host.
    pub(crate) fn url(&self, host: Host, segments: &[&str]) -> String {
        format!(
            "{}/{}",
            self.base_uri(host).trim_end_matches('/'),
            build_path(segments)
        )
    }

    /// Start a request with authorization and User-Agent attached.
    ///
    /// Fails before any I/O when no credential satisfies `auth`.
    fn request(
        &self,
        method: Method,
        host: Host,
        segments: &[&str],
        auth: AuthorizationType,
    ) -> Result<RequestBuilder> {
        let authorization = self.credentials.authorization_for(auth)?;
        tracing::debug!(
            required = %auth,
            resolved = %authorization.authorization_type(),
            "resolved authorization"
        );

        let user_agent = HeaderValue::from_str(&self.config.user_agent)
            .map_err(|_| Error::Config("Invalid User-Agent".to_string()))?;

        Ok(self
            .http
            .request(method, self.url(host, segments))
            .header(AUTHORIZATION, authorization.header_value()?)
            .header(USER_AGENT, user_agent))
    }

    fn json_request(
        &self,
        method: Method,
        host: Host,
        segments: &[&str],
        auth: AuthorizationType,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(method, host, segments, auth)?
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json")))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: ApiResponse>(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
    ) -> Result<T> {
        let request = self.json_request(Method::GET, Host::Api, segments, auth)?;
        self.send(request).await
    }

    /// Make a GET request with query parameters. `None` fields of the
    /// query are left out of the URL.
    pub(crate) async fn get_with_query<T: ApiResponse, Q: Serialize + ?Sized>(
        &self,
        host: Host,
        segments: &[&str],
        auth: AuthorizationType,
        query: &Q,
    ) -> Result<T> {
        let request = self
            .json_request(Method::GET, host, segments, auth)?
            .query(query);
        self.send(request).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: ApiResponse, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
        body: &B,
    ) -> Result<T> {
        let request = self
            .json_request(Method::POST, Host::Api, segments, auth)?
            .json(body);
        self.send(request).await
    }

    /// Make a POST request without a body.
    pub(crate) async fn post_empty<T: ApiResponse>(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
    ) -> Result<T> {
        let request = self.json_request(Method::POST, Host::Api, segments, auth)?;
        self.send(request).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: ApiResponse, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
        body: &B,
    ) -> Result<T> {
        let request = self
            .json_request(Method::PUT, Host::Api, segments, auth)?
            .json(body);
        self.send(request).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T: ApiResponse, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
        body: &B,
    ) -> Result<T> {
        let request = self
            .json_request(Method::PATCH, Host::Api, segments, auth)?
            .json(body);
        self.send(request).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: ApiResponse>(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
    ) -> Result<T> {
        let request = self.json_request(Method::DELETE, Host::Api, segments, auth)?;
        self.send(request).await
    }

    /// Make a multipart POST request. The multipart builder sets the
    /// `Content-Type` with its generated boundary.
    pub(crate) async fn upload<T: ApiResponse>(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let request = self
            .request(Method::POST, Host::Api, segments, auth)?
            .multipart(form);
        self.send(request).await
    }

    /// Make a GET request and return the raw body.
    pub(crate) async fn get_content(
        &self,
        segments: &[&str],
        auth: AuthorizationType,
    ) -> Result<ContentResponse> {
        let request = self.request(Method::GET, Host::Api, segments, auth)?;
        let raw = self.execute(request).await?;

        Ok(ContentResponse {
            http_metadata: raw.http_metadata,
            content_type: raw.content_type,
            content: raw.body,
        })
    }

    /// Send a request and decode a JSON response.
    async fn send<T: ApiResponse>(&self, request: RequestBuilder) -> Result<T> {
        let raw = self.execute(request).await?;

        let mut value = if raw.body.iter().all(u8::is_ascii_whitespace) {
            T::default()
        } else {
            serde_json::from_slice::<T>(&raw.body)?
        };
        value.set_http_metadata(raw.http_metadata);
        Ok(value)
    }

    /// Send a request; statuses of 400 and above become [`Error::Api`].
    ///
    /// Redirects that reqwest does not follow, such as `304 Not Modified`,
    /// are returned as-is and decode like any other non-error response.
    #[instrument(
        name = "checkout_request",
        skip(self, request),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn execute(&self, request: RequestBuilder) -> Result<RawResponse> {
        let request = request.build()?;
        Span::current().record("http.method", request.method().as_str());
        Span::current().record("http.url", request.url().as_str());

        let response = self.http.execute(request).await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        let http_metadata = HttpMetadata::from_parts(status, response.headers());
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.bytes().await?.to_vec();

        if status.is_client_error() || status.is_server_error() {
            return Err(Error::from_api_response(http_metadata, &body));
        }

        Ok(RawResponse {
            http_metadata,
            content_type,
            body,
        })
    }
}

impl Clone for CheckoutClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for CheckoutClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutClient")
            .field("config", &self.inner.config)
            .field("credentials", &self.inner.credentials)
            .finish()
    }
}
