use fathom_types::errors::connector::{ConnectorError, FetchError};
use fathom_types::tracing::info;
use std::time::Duration;

/// Issues one GET and returns the response body.
pub trait HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: HttpFetcher + ?Sized> HttpFetcher for &T {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: HttpFetcher + ?Sized> HttpFetcher for Box<T> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking `reqwest` client. Must not be created or used from inside an
/// async runtime thread.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ConnectorError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConnectorError::InternalError(Box::new(e)))?;
        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: Box::new(e),
        })?;
        info!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
