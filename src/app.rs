use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use redux_rs::{Store, StoreApi};
use tokio::sync::watch;

use crate::{
  api::{HttpStudentsApi, StudentsApi},
  config::Config,
  redux::{
    action::{fetch_students, Action},
    epic::EpicMiddleware,
    reducer::reducer,
    selector::select_students,
    state::{State, StudentsSlice},
  },
};

pub struct App {
  pub api_base_url: Option<String>,
}

impl App {
  pub fn new(api_base_url: Option<String>) -> Result<Self> {
    let config = Config::new()?;
    log::info!("Config directory: {}", config.config._config_dir.display());
    Ok(Self::with_config(&config, api_base_url))
  }

  /// A base URL given here wins over the configured one.
  pub fn with_config(config: &Config, api_base_url: Option<String>) -> Self {
    Self { api_base_url: api_base_url.or_else(|| config.api_base_url.clone()) }
  }

  pub async fn run(&self) -> Result<()> {
    log::info!("Starting app..");
    let api = Arc::new(HttpStudentsApi::new()?);
    let students = self.fetch_once(api).await?;

    println!("{}", serde_json::to_string_pretty(&students)?);
    match students.error {
      Some(error) => Err(eyre!("Failed to fetch students: {error}")),
      None => Ok(()),
    }
  }

  /// Dispatches a single fetch and waits for the slice to settle.
  pub async fn fetch_once(&self, api: Arc<dyn StudentsApi>) -> Result<StudentsSlice> {
    let store = Store::new_with_state(reducer, State::default()).wrap(EpicMiddleware::new(api)).await;

    let (students_tx, mut students_rx) = watch::channel(StudentsSlice::default());
    store
      .subscribe(move |state: &State| {
        students_tx.send_replace(select_students(state).clone());
      })
      .await;

    store.dispatch(Action::SetApiBaseUrl { base_url: self.api_base_url.clone() }).await;
    match &self.api_base_url {
      Some(base_url) => log::info!("Using API base URL {base_url}"),
      None => log::warn!("No API base URL configured"),
    }

    store.dispatch(fetch_students()).await;
    let students = students_rx.wait_for(|students| !students.fetching).await?.clone();
    log::info!("Students slice settled: data={}, error={}", students.data.is_some(), students.error.is_some());
    Ok(students)
  }
}

#[cfg(test)]
mod tests {
  use async_trait::async_trait;
  use pretty_assertions::assert_eq;
  use serde_json::{json, Value};

  use super::*;
  use crate::api::FetchError;

  struct EchoBaseUrl;

  #[async_trait]
  impl StudentsApi for EchoBaseUrl {
    async fn fetch_students(&self, base_url: Option<&str>) -> Result<Value, FetchError> {
      let base_url = base_url.ok_or(FetchError::MissingBaseUrl)?;
      Ok(json!({ "from": base_url }))
    }
  }

  fn config_with(api_base_url: Option<&str>) -> Config {
    Config { api_base_url: api_base_url.map(str::to_string), ..Config::default() }
  }

  #[test]
  fn cli_base_url_wins_over_config() {
    let app = App::with_config(&config_with(Some("http://config")), Some("http://cli".into()));
    assert_eq!(app.api_base_url.as_deref(), Some("http://cli"));

    let app = App::with_config(&config_with(Some("http://config")), None);
    assert_eq!(app.api_base_url.as_deref(), Some("http://config"));
  }

  #[tokio::test(start_paused = true)]
  async fn fetch_once_settles_with_data() {
    let app = App::with_config(&config_with(Some("http://config")), None);

    let students = app.fetch_once(Arc::new(EchoBaseUrl)).await.unwrap();

    assert_eq!(students, StudentsSlice { fetching: false, data: Some(json!({ "from": "http://config" })), error: None });
  }

  #[tokio::test(start_paused = true)]
  async fn fetch_once_without_base_url_settles_with_error() {
    let app = App::with_config(&Config::default(), None);

    let students = app.fetch_once(Arc::new(EchoBaseUrl)).await.unwrap();

    assert_eq!(students, StudentsSlice { fetching: false, data: None, error: Some(FetchError::MissingBaseUrl) });
  }
}
