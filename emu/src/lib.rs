//! Emulator for SCRAM: 16 bytes of memory, an 8-bit accumulator and a
//! 4-bit program counter.

pub mod config;
pub mod error;
pub mod hooks;
pub mod image;
pub mod model;

pub use config::{Config, Format};
pub use error::Error;
pub use hooks::Hook;
pub use model::{Halt, State, Status};

/// Run until the machine halts.
///
/// Every hook sees the state before each instruction, then the final state
/// together with the halt cause.
pub fn run(mut state: State, tmax: Option<u64>, hooks: &mut [&mut dyn Hook]) -> (State, Halt) {
    for hook in hooks.iter_mut() {
        hook.init(&state);
    }

    let mut time = 0;
    loop {
        for hook in hooks.iter_mut() {
            hook.exec(time, &state);
        }
        let (next, status) = state.step(tmax);
        state = next;
        if let Status::Halted(cause) = status {
            for hook in hooks.iter_mut() {
                hook.halt(&state, &cause);
            }
            return (state, cause);
        }
        time += 1;
    }
}
