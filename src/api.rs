//! Network seam for the students endpoint.

use async_trait::async_trait;
use reqwest::{
  header::{ACCEPT, CONTENT_TYPE},
  Client,
};
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

const STUDENTS_PATH: &str = "/students";
const JSON_MIME: &str = "application/json";

/// Why a students fetch failed. Carried verbatim in the slice's `error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
  #[error("no API base URL configured (set REACT_APP_API_BASE_URL)")]
  MissingBaseUrl,
  #[error("request failed: {0}")]
  Transport(String),
  #[error("invalid JSON body: {0}")]
  Decode(String),
}

impl Serialize for FetchError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

#[async_trait]
pub trait StudentsApi: Send + Sync {
  /// `GET {base_url}/students`, body parsed as JSON. The status code is not inspected.
  async fn fetch_students(&self, base_url: Option<&str>) -> Result<Value, FetchError>;
}

pub struct HttpStudentsApi {
  client: Client,
}

impl HttpStudentsApi {
  pub fn new() -> reqwest::Result<Self> {
    let client = Client::builder().user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))).build()?;
    Ok(Self { client })
  }
}

#[async_trait]
impl StudentsApi for HttpStudentsApi {
  async fn fetch_students(&self, base_url: Option<&str>) -> Result<Value, FetchError> {
    let base_url = base_url.ok_or(FetchError::MissingBaseUrl)?;
    let url = format!("{base_url}{STUDENTS_PATH}");
    log::debug!("GET {url}");

    let response = self
      .client
      .get(&url)
      .header(ACCEPT, JSON_MIME)
      .header(CONTENT_TYPE, JSON_MIME)
      .send()
      .await
      .map_err(|e| FetchError::Transport(error_chain(&e)))?;
    let body = response.bytes().await.map_err(|e| FetchError::Transport(error_chain(&e)))?;

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
  }
}

/// `error` followed by each of its sources, joined with `": "`.
fn error_chain(error: &dyn std::error::Error) -> String {
  let mut message = error.to_string();
  let mut source = error.source();
  while let Some(cause) = source {
    message.push_str(": ");
    message.push_str(&cause.to_string());
    source = cause.source();
  }
  message
}
