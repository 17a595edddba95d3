use super::{
  action::{Action, StudentsAction},
  state::{State, StudentsSlice},
};

pub fn reducer(state: State, action: Action) -> State {
  let students = students_reducer(state.students, &action);
  match action {
    Action::SetApiBaseUrl { base_url } => State { api_base_url: base_url, students },
    Action::Students(_) => State { students, ..state },
  }
}

pub fn students_reducer(state: StudentsSlice, action: &Action) -> StudentsSlice {
  match action {
    Action::Students(StudentsAction::Fetch) => on_fetch(state),
    Action::Students(StudentsAction::FetchSuccess { data }) => {
      StudentsSlice { data: Some(data.clone()), fetching: false, ..state }
    },
    Action::Students(StudentsAction::FetchError { error }) => {
      StudentsSlice { fetching: false, error: Some(error.clone()), ..state }
    },
    _ => state,
  }
}

fn on_fetch(state: StudentsSlice) -> StudentsSlice {
  StudentsSlice { fetching: true, ..state }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::{
    api::FetchError,
    redux::action::{fetch_students, fetch_students_error, fetch_students_success},
  };

  fn samples() -> Vec<StudentsSlice> {
    vec![
      StudentsSlice::default(),
      StudentsSlice { fetching: false, data: Some(json!([{ "id": 1 }])), error: None },
      StudentsSlice { fetching: false, data: None, error: Some(FetchError::Transport("reset".into())) },
      StudentsSlice {
        fetching: true,
        data: Some(json!({ "students": [] })),
        error: Some(FetchError::Decode("eof".into())),
      },
    ]
  }

  #[test]
  fn initial_slice_survives_unrelated_action() {
    let next = students_reducer(StudentsSlice::default(), &Action::SetApiBaseUrl { base_url: None });

    assert_eq!(next, StudentsSlice { fetching: true, data: None, error: None });
  }

  #[test]
  fn fetch_only_raises_the_flag() {
    for state in samples() {
      let expected = StudentsSlice { fetching: true, ..state.clone() };
      assert_eq!(students_reducer(state, &fetch_students()), expected);
    }
  }

  #[test]
  fn success_stores_data_and_keeps_stale_error() {
    for state in samples() {
      let data = json!([{ "id": 7, "name": "Grace" }]);
      let expected = StudentsSlice { data: Some(data.clone()), fetching: false, ..state.clone() };
      assert_eq!(students_reducer(state, &fetch_students_success(data)), expected);
    }
  }

  #[test]
  fn error_stores_error_and_keeps_last_data() {
    for state in samples() {
      let error = FetchError::Transport("connection refused".into());
      let expected = StudentsSlice { fetching: false, error: Some(error.clone()), ..state.clone() };
      assert_eq!(students_reducer(state, &fetch_students_error(error)), expected);
    }
  }

  #[test]
  fn unknown_action_is_identity() {
    for state in samples() {
      let action = Action::SetApiBaseUrl { base_url: Some("http://localhost:3000".into()) };
      assert_eq!(students_reducer(state.clone(), &action), state);
    }
  }

  #[test]
  fn root_reducer_routes_both_kinds_of_action() {
    let state = reducer(State::default(), Action::SetApiBaseUrl { base_url: Some("http://api".into()) });
    assert_eq!(state.api_base_url.as_deref(), Some("http://api"));
    assert_eq!(state.students, StudentsSlice::default());

    let state = reducer(state, fetch_students_success(json!([])));
    assert_eq!(state.api_base_url.as_deref(), Some("http://api"));
    assert_eq!(state.students, StudentsSlice { fetching: false, data: Some(json!([])), error: None });
  }
}
