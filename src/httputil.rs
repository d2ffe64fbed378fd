use crate::consts::USER_AGENT;
use crate::listing::{Listing, ParseListingError, RowLayout};
use reqwest::{ClientBuilder, StatusCode};
use thiserror::Error;
use url::Url;

/// A client for retrieving listing pages over HTTP
#[derive(Clone, Debug)]
pub struct ListingClient {
    inner: reqwest::Client,
}

impl ListingClient {
    /// Construct a new client instance
    ///
    /// # Errors
    ///
    /// Returns an error if construction of the inner `reqwest::Client` fails
    pub fn new() -> Result<Self, BuildClientError> {
        let inner = ClientBuilder::new().user_agent(USER_AGENT).build()?;
        Ok(ListingClient { inner })
    }

    /// Perform a `GET` request to `url` and return the response body
    ///
    /// # Errors
    ///
    /// Fails if the request could not be sent, the server returned a 4xx or
    /// 5xx status, or the body could not be read
    #[tracing::instrument(skip_all, fields(url = %url))]
    pub async fn fetch_html(&self, url: Url) -> Result<String, HttpError> {
        tracing::debug!("Fetching listing page");
        let r = self
            .inner
            .get(url.clone())
            .send()
            .await
            .map_err(|source| HttpError::Send {
                url: url.clone(),
                source,
            })?;
        if r.status() == StatusCode::NOT_FOUND {
            return Err(HttpError::NotFound { url });
        }
        let r = r.error_for_status().map_err(|source| HttpError::Status {
            url: url.clone(),
            source,
        })?;
        let body = r
            .text()
            .await
            .map_err(move |source| HttpError::Body { url, source })?;
        tracing::debug!(bytes = body.len(), "Fetched listing page");
        Ok(body)
    }

    /// Fetch the listing page at `url` and parse it
    ///
    /// # Errors
    ///
    /// Fails if the page cannot be fetched or cannot be parsed
    pub async fn get_listing(&self, url: Url, layout: &RowLayout) -> Result<Listing, ListingError> {
        let html = self.fetch_html(url).await?;
        Listing::from_html(&html, layout).map_err(Into::into)
    }

    /// Parse a listing from `document`, which is either the URL of a listing
    /// page or the HTML of a listing page itself.
    ///
    /// `document` is treated as a URL if it parses as an absolute URL with a
    /// host; anything else is parsed as HTML.
    ///
    /// # Errors
    ///
    /// Fails if the page cannot be fetched or cannot be parsed
    pub async fn load(&self, document: &str, layout: &RowLayout) -> Result<Listing, ListingError> {
        match remote_url(document) {
            Some(url) => self.get_listing(url, layout).await,
            None => Listing::from_html(document, layout).map_err(Into::into),
        }
    }
}

/// Return `document` as a URL if it is one that can be fetched
fn remote_url(document: &str) -> Option<Url> {
    let url = Url::parse(document.trim()).ok()?;
    url.host_str()
        .is_some_and(|host| !host.is_empty())
        .then_some(url)
}

#[derive(Debug, Error)]
#[error("failed to initialize HTTP client")]
pub struct BuildClientError(#[from] reqwest::Error);

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to make request to {url}")]
    Send { url: Url, source: reqwest::Error },
    #[error("no such resource: {url}")]
    NotFound { url: Url },
    #[error("request to {url} returned error")]
    Status { url: Url, source: reqwest::Error },
    #[error("failed to read response body from {url}")]
    Body { url: Url, source: reqwest::Error },
}

impl HttpError {
    /// The URL of the failed request
    pub fn url(&self) -> &Url {
        match self {
            HttpError::Send { url, .. }
            | HttpError::NotFound { url }
            | HttpError::Status { url, .. }
            | HttpError::Body { url, .. } => url,
        }
    }
}

/// Error returned when fetching & parsing a listing page fails
#[derive(Debug, Error)]
pub enum ListingError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("failed to parse listing page")]
    Parse(#[from] ParseListingError),
}
