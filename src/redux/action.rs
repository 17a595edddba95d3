use serde_json::Value;
use strum::{Display, IntoStaticStr};

use crate::api::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  Students(StudentsAction),
  SetApiBaseUrl { base_url: Option<String> },
}

#[derive(Display, IntoStaticStr, Debug, Clone, PartialEq)]
pub enum StudentsAction {
  #[strum(serialize = "students/START_FETCH")]
  Fetch,
  #[strum(serialize = "students/FETCH_SUCCESS")]
  FetchSuccess { data: Value },
  #[strum(serialize = "students/FETCH_ERROR")]
  FetchError { error: FetchError },
}

impl StudentsAction {
  pub fn type_tag(&self) -> &'static str {
    self.into()
  }
}

impl From<StudentsAction> for Action {
  fn from(action: StudentsAction) -> Self {
    Self::Students(action)
  }
}

pub fn fetch_students() -> Action {
  StudentsAction::Fetch.into()
}

pub fn fetch_students_success(data: Value) -> Action {
  StudentsAction::FetchSuccess { data }.into()
}

pub fn fetch_students_error(error: FetchError) -> Action {
  StudentsAction::FetchError { error }.into()
}
