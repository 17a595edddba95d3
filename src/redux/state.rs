use serde::Serialize;
use serde_json::Value;

use crate::api::FetchError;

#[derive(Default, Clone, PartialEq, Debug)]
pub struct State {
  pub api_base_url: Option<String>,
  pub students: StudentsSlice,
}

/// `data` and `error` are independent: a new fetch keeps a stale error, a
/// failed fetch keeps the last good data.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct StudentsSlice {
  pub fetching: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<FetchError>,
}

impl Default for StudentsSlice {
  fn default() -> Self {
    Self { fetching: true, data: None, error: None }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;

  #[test]
  fn fresh_slice_is_fetching() {
    assert_eq!(State::default().students, StudentsSlice { fetching: true, data: None, error: None });
  }

  #[test]
  fn slice_serializes_without_empty_fields() {
    assert_eq!(serde_json::to_value(StudentsSlice::default()).unwrap(), json!({ "fetching": true }));

    let settled =
      StudentsSlice { fetching: false, data: Some(json!([{ "id": 1 }])), error: Some(FetchError::MissingBaseUrl) };
    assert_eq!(
      serde_json::to_value(settled).unwrap(),
      json!({
        "fetching": false,
        "data": [{ "id": 1 }],
        "error": "no API base URL configured (set REACT_APP_API_BASE_URL)",
      })
    );
  }
}
