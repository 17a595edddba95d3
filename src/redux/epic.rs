use std::sync::Arc;

use async_trait::async_trait;
use redux_rs::{MiddleWare, StoreApi};

use super::{
  action::{Action, StudentsAction},
  state::State,
  thunk::{thunk_impl, ThunkAction},
};
use crate::api::StudentsApi;

/// Maps a dispatched action to the side effect it triggers, if any.
pub fn epic(action: &Action) -> Option<ThunkAction> {
  match action {
    Action::Students(StudentsAction::Fetch) => Some(ThunkAction::FetchStudents),
    _ => None,
  }
}

/// Passes every action to the store, then runs the effect [`epic`] picks for
/// it on a task of its own. Effects of overlapping triggers run side by side.
pub struct EpicMiddleware {
  api: Arc<dyn StudentsApi>,
}

impl EpicMiddleware {
  pub fn new(api: Arc<dyn StudentsApi>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl<Inner> MiddleWare<State, Action, Inner> for EpicMiddleware
where
  Inner: StoreApi<State, Action> + Send + Sync + 'static,
{
  async fn dispatch(&self, action: Action, inner: &Arc<Inner>) {
    let effect = epic(&action);
    if let Action::Students(students_action) = &action {
      log::debug!("Redux action: {}", students_action.type_tag());
    }
    inner.dispatch(action).await;

    if let Some(effect) = effect {
      log::debug!("Thunk action: {effect:?}");
      let thunk = thunk_impl::<Inner>(effect, self.api.clone());
      let store = inner.clone();
      tokio::spawn(async move {
        thunk.execute(store).await;
      });
    }
  }
}
