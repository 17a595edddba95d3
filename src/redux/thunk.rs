use std::sync::Arc;

use redux_rs::{middlewares::thunk::Thunk, StoreApi};

use super::{action::Action, state::State};
use crate::api::StudentsApi;

pub mod fetch_students;

#[derive(Debug, Clone, PartialEq)]
pub enum ThunkAction {
  FetchStudents,
}

pub fn thunk_impl<Api>(action: ThunkAction, api: Arc<dyn StudentsApi>) -> Box<dyn Thunk<State, Action, Api> + Send + Sync>
where
  Api: StoreApi<State, Action> + Send + Sync + 'static,
{
  match action {
    ThunkAction::FetchStudents => Box::new(fetch_students::FetchStudentsThunk::new(api)),
  }
}
