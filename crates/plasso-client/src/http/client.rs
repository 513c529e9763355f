/*
[INPUT]:  HTTP configuration (base URLs, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{PlassoError, Result};

/// Base URLs for the Plasso API
const REST_BASE_URL: &str = "https://plasso.com";
const GRAPHQL_URL: &str = "https://api.plasso.com/graphql";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout for flexkit REST calls
    pub rest_timeout: Duration,
    /// Timeout for GraphQL member lookups
    pub graphql_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rest_timeout: Duration::from_secs(5),
            graphql_timeout: Duration::from_secs(1),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Plasso API
#[derive(Debug, Clone)]
pub struct PlassoClient {
    http_client: Client,
    rest_base_url: Url,
    graphql_url: Url,
    config: ClientConfig,
}

impl PlassoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(config, REST_BASE_URL, GRAPHQL_URL)
    }

    /// Create a client pointed at explicit endpoints (staging, mock servers)
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        rest_base_url: &str,
        graphql_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            rest_base_url: Url::parse(rest_base_url)?,
            graphql_url: Url::parse(graphql_url)?,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build full URL for REST endpoints
    fn rest_url(&self, endpoint: &str) -> std::result::Result<Url, url::ParseError> {
        self.rest_base_url.join(endpoint)
    }

    /// Build a JSON request against a REST endpoint
    pub(crate) fn rest_request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let url = self.rest_url(endpoint)?;
        let builder = self
            .http_client
            .request(method, url)
            .timeout(self.config.rest_timeout);
        json_body(builder, body)
    }

    /// Build a JSON POST against the GraphQL endpoint
    pub(crate) fn graphql_request<B>(&self, body: &B) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let builder = self
            .http_client
            .post(self.graphql_url.clone())
            .timeout(self.config.graphql_timeout);
        json_body(builder, body)
    }

    /// Execute a request and return the raw body of a 2xx response
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<String> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();

        tracing::debug!(%method, %url, "sending plasso request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "plasso request rejected");
            return Err(PlassoError::status_error(method, status, url, body));
        }

        Ok(body)
    }

    /// Execute a request and decode the 2xx body as JSON
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.send(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn json_body<B>(builder: RequestBuilder, body: &B) -> Result<RequestBuilder>
where
    B: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(body)?;
    Ok(builder
        .header(CONTENT_TYPE, "application/json")
        .body(payload))
}
