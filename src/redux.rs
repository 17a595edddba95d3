pub mod action;
pub mod epic;
pub mod reducer;
pub mod selector;
pub mod state;
pub mod thunk;
