//! HTTP client for the upstream employee service.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::models::employee::{
    CreateEmployeeRequest, DeleteEmployeeInput, DeleteResponse, EmployeeList, EmployeeResponse,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Upstream answered with a 4xx or 5xx status.
    #[error("employee service returned status {0}")]
    Status(u16),
    /// Upstream could not be reached (DNS, refused, timeout).
    #[error("failed to reach employee service: {0}")]
    Connect(String),
    #[error("employee service call failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ClientError::Status(status.as_u16())
        } else if err.is_connect() || err.is_timeout() {
            ClientError::Connect(err.to_string())
        } else {
            ClientError::Other(err.to_string())
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// One call per operation against the upstream employee service.
#[async_trait]
pub trait EmployeeClient: Send + Sync {
    async fn list_all(&self) -> ClientResult<EmployeeList>;

    async fn get_by_id(&self, id: &str) -> ClientResult<EmployeeResponse>;

    async fn create(&self, request: &CreateEmployeeRequest) -> ClientResult<EmployeeResponse>;

    async fn delete_by_name(&self, name: &str) -> ClientResult<DeleteResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeClient {
    /// `base_url` must be an http(s) URL, as checked by `Config::from_env`.
    pub fn new(mut base_url: Url) -> Self {
        if let Ok(mut segments) = base_url.path_segments_mut() {
            segments.pop_if_empty();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, segment: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Some(segment) = segment {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.push(segment);
            }
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl EmployeeClient for HttpEmployeeClient {
    async fn list_all(&self) -> ClientResult<EmployeeList> {
        let url = self.url(None);
        Self::send(self.request(Method::GET, url)).await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<EmployeeResponse> {
        let url = self.url(Some(id));
        Self::send(self.request(Method::GET, url)).await
    }

    async fn create(&self, request: &CreateEmployeeRequest) -> ClientResult<EmployeeResponse> {
        let url = self.url(None);
        Self::send(self.request(Method::POST, url).json(request)).await
    }

    async fn delete_by_name(&self, name: &str) -> ClientResult<DeleteResponse> {
        let url = self.url(None);
        let body = DeleteEmployeeInput { name: name.to_string() };
        Self::send(self.request(Method::DELETE, url).json(&body)).await
    }
}
