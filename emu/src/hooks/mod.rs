pub mod dump;
pub mod trace;

use crate::model::{Halt, State};

/// Observer of a run. `exec` sees the state before each instruction executes.
pub trait Hook {
    fn init(&mut self, _state: &State) {}
    fn exec(&mut self, time: u64, state: &State);
    fn halt(&mut self, _state: &State, _cause: &Halt) {}
}
