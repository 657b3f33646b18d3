use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const QUERY_PATH: &str = "/api/query";

/// One time-range query, built fresh per submission. The timestamps are
/// forwarded verbatim; the server owns their interpretation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub query_type: String,
}

impl QueryRequest {
    /// An unselected query type is sent as the empty string.
    pub fn new(
        start_timestamp: impl Into<String>,
        end_timestamp: impl Into<String>,
        query_type: Option<String>,
    ) -> Self {
        QueryRequest {
            start_timestamp: start_timestamp.into(),
            end_timestamp: end_timestamp.into(),
            query_type: query_type.unwrap_or_default(),
        }
    }
}

/// Response from the query endpoint. Only `data` is consumed; everything
/// else the server sends is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct QueryResponse {
    pub data: Option<Value>,
}

impl QueryResponse {
    /// String coercion of the `data` field: a JSON string renders as its
    /// contents, any other value as its compact JSON text.
    pub fn render(&self) -> Result<String, anyhow::Error> {
        match &self.data {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None => bail!("query response has no `data` field"),
        }
    }
}

pub struct QueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl QueryClient {
    pub fn new(query_host: impl Into<String>) -> Self {
        QueryClient {
            http: reqwest::Client::new(),
            base_url: query_host.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), QUERY_PATH)
    }

    pub async fn submit(&self, request: &QueryRequest) -> Result<QueryResponse, anyhow::Error> {
        let response = self
            .http
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .context("Failed to send query request")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Query endpoint returned {}", status);
        }

        let body: QueryResponse = response
            .json()
            .await
            .context("Failed to parse query response")?;

        Ok(body)
    }
}
