//! Remote operations on the pessoa resource.
//!
//! Five pass-through calls against a fixed base address and resource path.
//! Non-2xx responses are normalized into [`Error::Api`] before they reach
//! the caller; nothing here retries, coordinates, or notifies.

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::{ClientOptions, DEFAULT_RESOURCE_PATH};
use crate::error::{Error, Result};
use crate::model::Pessoa;

/// Client for the pessoa registration resource.
#[derive(Debug, Clone)]
pub struct PessoaClient {
    base_url: String,
    resource_path: String,
    http_client: Client,
    request_timeout: Option<Duration>,
}

impl PessoaClient {
    /// Create a new client against the given base URL, using the fixed
    /// `/cadastro/pessoa` resource path.
    pub fn new(base_url: &str, http_client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            http_client,
            request_timeout: None,
        }
    }

    /// Create a client from full options.
    pub fn from_options(options: &ClientOptions, http_client: Client) -> Self {
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            resource_path: options.resource_path.clone(),
            http_client,
            request_timeout: options.request_timeout,
        }
    }

    /// Override the resource path segment.
    pub fn with_resource_path(mut self, value: &str) -> Self {
        self.resource_path = value.to_string();
        self
    }

    /// Apply a per-request timeout to every operation.
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    fn resource_url(&self, suffix: &str) -> String {
        format!("{}{}{}", self.base_url, self.resource_path, suffix)
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        match self.request_timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Fetch the whole collection, in the order the backend returns it.
    pub async fn list(&self) -> Result<Vec<Pessoa>> {
        let url = self.resource_url("/listar");
        debug!("GET {url}");
        let response = self.prepare(self.http_client.get(&url)).send().await?;
        self.parse_json(response).await
    }

    /// Fetch one record by id; a missing record surfaces the backend's
    /// 404 message.
    pub async fn get_by_id(&self, id: i64) -> Result<Pessoa> {
        let url = self.resource_url(&format!("/{id}"));
        debug!("GET {url}");
        let response = self.prepare(self.http_client.get(&url)).send().await?;
        self.parse_json(response).await
    }

    /// Create a record. The submission goes out without id fields; the
    /// response carries the backend-assigned identifiers.
    pub async fn create(&self, pessoa: &Pessoa) -> Result<Pessoa> {
        let url = self.resource_url("");
        debug!("POST {url}");
        let response = self
            .prepare(self.http_client.post(&url))
            .json(pessoa)
            .send()
            .await?;
        self.parse_json(response).await
    }

    /// Replace the record with the given id.
    pub async fn update(&self, id: i64, pessoa: &Pessoa) -> Result<Pessoa> {
        let url = self.resource_url(&format!("/{id}"));
        debug!("PUT {url}");
        let response = self
            .prepare(self.http_client.put(&url))
            .json(pessoa)
            .send()
            .await?;
        self.parse_json(response).await
    }

    /// Delete the record with the given id. Success carries no payload.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        let url = self.resource_url(&format!("/{id}"));
        debug!("DELETE {url}");
        let response = self.prepare(self.http_client.delete(&url)).send().await?;
        if !response.status().is_success() {
            return Err(self.normalize(response).await);
        }
        Ok(())
    }

    async fn parse_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.normalize(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn normalize(&self, response: reqwest::Response) -> Error {
        let err = Error::from_response(response).await;
        warn!("pessoa request failed: {}", err.display_message());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_path_and_suffix() {
        let client = PessoaClient::new("http://localhost:8080/", Client::new());
        assert_eq!(
            client.resource_url("/listar"),
            "http://localhost:8080/cadastro/pessoa/listar"
        );
        assert_eq!(
            client.resource_url("/7"),
            "http://localhost:8080/cadastro/pessoa/7"
        );
        assert_eq!(client.resource_url(""), "http://localhost:8080/cadastro/pessoa");
    }

    #[test]
    fn resource_path_can_be_remounted() {
        let client =
            PessoaClient::new("http://localhost:8080", Client::new()).with_resource_path("/v2/pessoa");
        assert_eq!(client.resource_url("/listar"), "http://localhost:8080/v2/pessoa/listar");
    }
}
