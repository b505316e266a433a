use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Url};

use crate::config::Config;
use crate::error::Error;
use crate::gemini::{GenerateContentRequest, GenerateContentResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs a JSON document and returns the complete response body, undecoded.
    async fn post_json(&self, url: &Url, body: String) -> Result<Vec<u8>, Error>;
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &Url, body: String) -> Result<Vec<u8>, Error> {
        let res = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::transport(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(Error::transport(format!("{status} - {text}")));
        }

        res.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| Error::transport(e.without_url()))
    }
}

pub struct GeminiClient<T = HttpTransport> {
    transport: T,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiClient<HttpTransport> {
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, HttpTransport::default())
    }
}

impl<T: Transport> GeminiClient<T> {
    pub fn with_transport(config: &Config, transport: T) -> Self {
        Self {
            transport,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn summarize(&self, text: &str) -> Result<String, Error> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingCredential)?;
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let url = Url::parse_with_params(&self.endpoint, [("key", api_key)])
            .map_err(Error::transport)?;
        let body = serde_json::to_string(&GenerateContentRequest::new(text))
            .map_err(Error::Parse)?;

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "sending generateContent");
        let raw = self.transport.post_json(&url, body).await?;
        tracing::debug!(bytes = raw.len(), "received response");

        GenerateContentResponse::parse(&raw)?.into_text()
    }
}
