//! Data Service
//!
//! The remote analytics API. `DataService` is the seam the hub talks to;
//! `HttpDataService` is the production implementation over reqwest.

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;

use crate::constants::{LIST_PATH, OVERVIEW_PATH, PARTS_PATH};
use crate::domain::config::ApiConfig;
use crate::domain::part::PartCatalogData;
use crate::domain::query::{ListQuery, OverviewQuery};
use crate::domain::sale::{OverviewData, SaleRecord};
use crate::error::{Error, Result};
use response_body::decode;

/// Remote operations used by the sales screen.
///
/// Calls return owned futures so the hub can drive them on its runtime.
pub trait DataService: Send + Sync {
    fn fetch_overview(&self, query: OverviewQuery) -> BoxFuture<'static, Result<OverviewData>>;

    fn fetch_list(&self, query: ListQuery) -> BoxFuture<'static, Result<Vec<SaleRecord>>>;

    fn fetch_parts(&self) -> BoxFuture<'static, Result<PartCatalogData>>;
}

/// `DataService` over HTTP with JSON bodies
#[derive(Clone, Debug)]
pub struct HttpDataService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDataService {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|source| Error::Transport {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post<B, T>(&self, path: &str, body: B) -> BoxFuture<'static, Result<T>>
    where
        B: serde::Serialize + Send + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url(path);
        let request = self.client.post(&url).json(&body);
        Box::pin(async move {
            tracing::debug!("POST {}", url);
            let response = request.send().await.map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
            decode(url, response).await
        })
    }

    fn get<T>(&self, path: &str) -> BoxFuture<'static, Result<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url(path);
        let request = self
            .client
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        Box::pin(async move {
            tracing::debug!("GET {}", url);
            let response = request.send().await.map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;
            decode(url, response).await
        })
    }
}

impl DataService for HttpDataService {
    fn fetch_overview(&self, query: OverviewQuery) -> BoxFuture<'static, Result<OverviewData>> {
        self.post(OVERVIEW_PATH, query)
    }

    fn fetch_list(&self, query: ListQuery) -> BoxFuture<'static, Result<Vec<SaleRecord>>> {
        self.post(LIST_PATH, query)
    }

    fn fetch_parts(&self) -> BoxFuture<'static, Result<PartCatalogData>> {
        self.get(PARTS_PATH)
    }
}

mod response_body {
    use serde::de::DeserializeOwned;

    use crate::error::{Error, Result};

    /// Check the status, then decode a non-empty JSON body
    pub async fn decode<T: DeserializeOwned>(url: String, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;
        parse_body(&url, &body)
    }

    pub fn parse_body<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::MalformedResponse {
                url: url.to_string(),
                message: "empty body".to_string(),
            });
        }

        serde_json::from_slice(body).map_err(|e| Error::MalformedResponse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
