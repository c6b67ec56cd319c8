//! HTTP/JSON record store

use std::fmt::Display;
use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tillview_lib::DataSource;
use tillview_lib::ListRecord;
use tillview_lib::RecordStore;
use tillview_lib::SourceError;

/// A data source backed by a backend collection endpoint.
///
/// Speaks the backend's plain JSON REST shape: `GET` the collection for the
/// full set, `POST` to create, `PUT /{key}` to replace, `DELETE /{key}` to
/// remove. Fetch failures surface as [`SourceError`] to the caller; they
/// never reach the browsing engine, which keeps its last-known-good view.
///
/// # Example
///
/// ```ignore
/// let source: HttpSource<Branch> =
///     HttpSource::new("https://backend.example.com", "api/branches")
///         .with_bearer_token(token)
///         .with_timeout(Duration::from_secs(10));
///
/// let mut session = BrowseSession::new(branch_browser(), source);
/// session.refresh().await?;
/// ```
pub struct HttpSource<R> {
    base_url: String,
    path: String,
    client: Client,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
    _record: PhantomData<fn() -> R>,
}

impl<R> HttpSource<R> {
    /// Creates a source for a collection endpoint under a base URL.
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            client: Client::new(),
            bearer_token: None,
            timeout: None,
            _record: PhantomData,
        }
    }

    /// Sets the bearer token attached to every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// URL of the whole collection.
    fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_matches('/')
        )
    }

    /// URL of a single record.
    fn record_url(&self, key: impl Display) -> String {
        format!("{}/{}", self.collection_url(), key)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, SourceError> {
        let response = request
            .send()
            .await
            .map_err(|err| SourceError::unavailable(err.to_string()))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            if status == 404 {
                Err(SourceError::not_found(message))
            } else {
                Err(SourceError::http(status, message))
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
        response
            .json::<T>()
            .await
            .map_err(|err| SourceError::parse(err.to_string()))
    }
}

#[async_trait]
impl<R> DataSource<R> for HttpSource<R>
where
    R: DeserializeOwned + Send + Sync + 'static,
{
    async fn fetch_all(&self) -> Result<Vec<R>, SourceError> {
        let url = self.collection_url();
        log::debug!("GET {url}");
        let response = self.send(self.request(Method::GET, &url)).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl<R> RecordStore<R> for HttpSource<R>
where
    R: ListRecord + Serialize + DeserializeOwned + Send + Sync + 'static,
    R::Key: Display + Send + Sync,
{
    async fn create(&self, record: R) -> Result<R, SourceError> {
        let url = self.collection_url();
        log::debug!("POST {url}");
        let response = self
            .send(self.request(Method::POST, &url).json(&record))
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, key: R::Key, record: R) -> Result<R, SourceError> {
        let url = self.record_url(&key);
        log::debug!("PUT {url}");
        let response = self
            .send(self.request(Method::PUT, &url).json(&record))
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, key: R::Key) -> Result<(), SourceError> {
        let url = self.record_url(&key);
        log::debug!("DELETE {url}");
        self.send(self.request(Method::DELETE, &url)).await?;
        Ok(())
    }
}
