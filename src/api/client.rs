use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::CONTENT_TYPE;

use super::types::{SearchRequest, SearchResponse};
use crate::error::SearchError;

const ANALYZE_PATH: &str = "/analyze/v2";

pub trait SearchClient: Send + Sync {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

pub struct HttpSearchClient {
    http: Client,
    endpoint: String,
}

impl HttpSearchClient {
    /// `timeout` of `None` leaves only the transport's own limits in place.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, SearchError> {
        Self::with_builder(Client::builder().timeout(timeout), base_url)
    }

    fn with_builder(builder: ClientBuilder, base_url: &str) -> Result<Self, SearchError> {
        let http = builder.build().map_err(SearchError::Transport)?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchClient for HttpSearchClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        log::debug!("POST {} pr={:?} repoName={:?}", self.endpoint, request.pr, request.repo_name);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("Analysis service returned {}: {}", status, body);
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<SearchResponse>().map_err(SearchError::Decode)
    }
}
