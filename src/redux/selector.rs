use super::state::{State, StudentsSlice};

pub fn select_students(state: &State) -> &StudentsSlice {
  &state.students
}
