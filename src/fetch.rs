//! Page fetching using ureq (simple blocking HTTP)

use tracing::debug;
use ureq::ResponseExt;
use url::Url;

use crate::config::FetchConfig;
use crate::error::{Error, Result};

/// A downloaded HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub html: String,
    /// Final URL after redirects
    pub url: Url,
}

/// Turns a URL into a page
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Page>;
}

/// Only absolute http(s) URLs are fetched
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme `{scheme}`"),
        }),
    }
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(config.timeout))
                .user_agent(config.user_agent.as_str())
                .http_status_as_error(false)
                .build(),
        );
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        let requested = parse_url(url)?;

        let resp = self
            .agent
            .get(requested.as_str())
            .call()
            .map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(Error::Http {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let final_url = Url::parse(&resp.get_uri().to_string()).unwrap_or(requested);

        let html = resp
            .into_body()
            .read_to_string()
            .map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;

        debug!("fetched {} bytes from {}", html.len(), final_url);
        Ok(Page {
            html,
            url: final_url,
        })
    }
}
