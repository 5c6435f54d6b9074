use arch::mem::Memory;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{Halt, State};

use super::Hook;

/// Pre-execution snapshot of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub time: u64,
    pub pc: u8,
    pub ac: u8,
    pub ic: u64,
    pub mem: Memory,
}

/// Records every step and the halt cause.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<Record>,
    pub halt: Option<Halt>,
    #[serde(rename = "final")]
    pub last: Option<State>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(Error::TraceWrite)
    }
}

impl Hook for Trace {
    fn exec(&mut self, time: u64, state: &State) {
        self.steps.push(Record {
            time,
            pc: state.pc,
            ac: state.ac,
            ic: state.ic,
            mem: state.mem,
        });
    }

    fn halt(&mut self, state: &State, cause: &Halt) {
        self.halt = Some(*cause);
        self.last = Some(state.clone());
    }
}
