use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use redux_rs::{middlewares::thunk::Thunk, StoreApi};

use crate::{
  api::StudentsApi,
  redux::{
    action::{fetch_students_error, fetch_students_success, Action},
    state::State,
  },
};

/// Fixed wait between the trigger and the request. Not a timeout.
pub const FETCH_DELAY: Duration = Duration::from_millis(1000);

pub struct FetchStudentsThunk {
  pub api: Arc<dyn StudentsApi>,
}

impl FetchStudentsThunk {
  pub fn new(api: Arc<dyn StudentsApi>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl<Api> Thunk<State, Action, Api> for FetchStudentsThunk
where
  Api: StoreApi<State, Action> + Send + Sync + 'static,
{
  async fn execute(&self, store: Arc<Api>) {
    tokio::time::sleep(FETCH_DELAY).await;
    let base_url = store.select(|state: &State| state.api_base_url.clone()).await;

    let outcome = request_students(self.api.as_ref(), base_url.as_deref()).await;
    store.dispatch(outcome).await;
  }
}

/// Runs one request and turns its result into the follow-up action.
pub async fn request_students(api: &dyn StudentsApi, base_url: Option<&str>) -> Action {
  match api.fetch_students(base_url).await {
    Ok(data) => fetch_students_success(data),
    Err(error) => {
      tracing::error!("Failed to fetch students: {error}");
      fetch_students_error(error)
    },
  }
}
