use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub is_palindrome: bool,
}

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    content: &'a str,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl ClientError {
    /// Status code of a non-success response, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }
}

pub struct MessagesClient {
    client: Client,
    base_url: String,
}

impl MessagesClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (pooling, timeouts, proxies).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn create(&self, content: &str) -> Result<Message, ClientError> {
        let resp = self.client
            .post(format!("{}/messages", self.base_url))
            .json(&MessageRequest { content })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Message, ClientError> {
        let resp = self.client
            .get(format!("{}/messages/{}", self.base_url, id))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn update(&self, id: &str, content: &str) -> Result<Message, ClientError> {
        let resp = self.client
            .put(format!("{}/messages/{}", self.base_url, id))
            .json(&MessageRequest { content })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.client
            .delete(format!("{}/messages/{}", self.base_url, id))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Message>, ClientError> {
        let resp = self.client
            .get(format!("{}/messages", self.base_url))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
