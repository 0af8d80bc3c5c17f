use std::future::Future;

use anyhow::{Context, Result};
use tracing::info;

use crate::calendar::CalendarDate;
use crate::error::{FetchError, FetchResult};
use crate::parser::{self, EventCollection};
use crate::settings::Settings;

/// Anything that can hand back the HTML of a page by URL.
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> impl Future<Output = FetchResult<String>> + Send;
}

/// Plain GET over `reqwest`. No retries; the client timeout is the only deadline.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.fetch_timeout())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> FetchResult<String> {
        info!("Visiting: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        if html.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        info!(bytes = html.len(), "Page visited: {}", url);
        Ok(html)
    }
}

/// Fetch the date page under `base_url` and extract its three event lists.
pub async fn fetch_events<S: PageSource>(
    source: &S,
    base_url: &str,
    date: CalendarDate,
) -> FetchResult<EventCollection> {
    let url = date.page_url(base_url);
    let html = source.fetch_page(&url).await?;
    let events = parser::extract_events(&html);
    info!(
        occurrences = events.occurrences.len(),
        births = events.births.len(),
        deaths = events.deaths.len(),
        "{} scraped",
        url
    );
    Ok(events)
}
