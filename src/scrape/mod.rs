//! Headline extraction.
//!
//! Each [`HeadlineSource`] names a page and the CSS selectors that locate its
//! headline. [`HeadlineScraper`] fetches the page with a blocking HTTP client
//! and returns the trimmed text of the first match. A page that loads but has
//! no matching node yields an empty string, which is recorded as "not found".
//! So does a page that answers with an error status when a whole record is
//! collected.

use crate::constants::{
    HOME_HEADLINE_SELECTOR, SECTION_ARTICLE_SELECTOR, SECTION_HEADLINE_SELECTOR, USER_AGENT,
};
use crate::errors::{AppError, AppResult, ScrapeError};
use crate::journal::Record;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where to find one headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineSource {
    /// Field name the headline is stored under in the daily record
    pub field: String,
    /// Page to fetch
    pub url: String,
    /// Selector for the node holding the headline (or its container)
    pub container: String,
    /// Optional selector applied inside the first `container` match
    pub inner: Option<String>,
}

impl HeadlineSource {
    /// A source whose headline is the first `container` match itself.
    pub fn new(field: &str, url: impl Into<String>, container: &str) -> Self {
        Self {
            field: field.to_string(),
            url: url.into(),
            container: container.to_string(),
            inner: None,
        }
    }

    /// A source whose headline is the first `inner` match inside the first `container` match.
    pub fn nested(field: &str, url: impl Into<String>, container: &str, inner: &str) -> Self {
        Self {
            inner: Some(inner.to_string()),
            ..Self::new(field, url, container)
        }
    }
}

/// The home page and the four sports sections, rooted at `base_url`.
///
/// # Examples
///
/// ```
/// use daily_headlines::scrape::default_sources;
///
/// let sources = default_sources("https://www.thedp.com/");
/// assert_eq!(sources[0].field, "home_headline");
/// assert_eq!(sources[0].url, "https://www.thedp.com");
/// assert_eq!(sources[2].url, "https://www.thedp.com/section/mens_squash");
/// ```
pub fn default_sources(base_url: &str) -> Vec<HeadlineSource> {
    let base = base_url.trim_end_matches('/');
    let section = |field: &str, slug: &str| {
        HeadlineSource::nested(
            field,
            format!("{}/section/{}", base, slug),
            SECTION_ARTICLE_SELECTOR,
            SECTION_HEADLINE_SELECTOR,
        )
    };

    vec![
        HeadlineSource::new("home_headline", base, HOME_HEADLINE_SELECTOR),
        section("lacrosse_headline", "mens_lacrosse"),
        section("squash_headline", "mens_squash"),
        section("football_headline", "football"),
        section("soccer_headline", "m-soccer"),
    ]
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Returns the trimmed text of the headline node in `html`, or an empty
/// string if the page has no such node.
///
/// # Errors
///
/// Returns `ScrapeError::Selector` if either selector is invalid.
///
/// # Examples
///
/// ```
/// use daily_headlines::scrape::extract_headline;
///
/// let html = r#"<div class="row section-article"><h3 class="standard-link"> Quakers win </h3></div>"#;
/// let headline = extract_headline(html, "div.row.section-article", Some("h3.standard-link")).unwrap();
/// assert_eq!(headline, "Quakers win");
/// ```
pub fn extract_headline(
    html: &str,
    container: &str,
    inner: Option<&str>,
) -> Result<String, ScrapeError> {
    let container_selector = parse_selector(container)?;
    let inner_selector = inner.map(parse_selector).transpose()?;

    let document = Html::parse_document(html);
    let Some(node) = document.select(&container_selector).next() else {
        return Ok(String::new());
    };

    let target = match &inner_selector {
        Some(selector) => match node.select(selector).next() {
            Some(found) => found,
            None => return Ok(String::new()),
        },
        None => node,
    };

    Ok(target.text().collect::<String>().trim().to_string())
}

/// Blocking page fetcher for headline sources.
pub struct HeadlineScraper {
    client: Client,
}

impl HeadlineScraper {
    /// Creates a scraper whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the body.
    ///
    /// # Errors
    ///
    /// - `ScrapeError::Request` if the request or body read fails
    /// - `ScrapeError::Status` if the server answers with a non-success status
    pub fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let request_error = |source| ScrapeError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        info!("Request URL: {}", response.url());
        info!("Request status code: {}", status.as_u16());

        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(request_error)
    }

    /// Fetches the page behind `source` and extracts its headline.
    pub fn fetch_headline(&self, source: &HeadlineSource) -> Result<String, ScrapeError> {
        let body = self.fetch_page(&source.url)?;
        let headline = extract_headline(&body, &source.container, source.inner.as_deref())?;
        if headline.is_empty() {
            debug!("No headline node for {} at {}", source.field, source.url);
        }
        info!("Data point: {}", headline);
        Ok(headline)
    }

    /// Fetches every source in order and assembles one record.
    ///
    /// A source that answers with a non-success status is recorded as `""`,
    /// the same as a page with no headline node.
    ///
    /// # Errors
    ///
    /// Stops at the first `ScrapeError::Request` or `ScrapeError::Selector`.
    pub fn collect_record(&self, sources: &[HeadlineSource]) -> Result<Record, ScrapeError> {
        let mut record = Record::new();
        for source in sources {
            let headline = match self.fetch_headline(source) {
                Ok(headline) => headline,
                Err(e @ ScrapeError::Status { .. }) => {
                    warn!("No data point for {}: {}", source.field, e);
                    String::new()
                }
                Err(e) => return Err(e),
            };
            record.insert(source.field.clone(), headline);
        }
        Ok(record)
    }
}
