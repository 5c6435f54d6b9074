use arch::inst::cformat_word;
use arch::mem::Memory;
use color_print::{cformat, cprintln};

use crate::model::{Halt, State};

use super::Hook;

/// Prints the full machine state before every instruction.
#[derive(Debug, Default)]
pub struct Dump;

impl Dump {
    pub fn new() -> Self {
        Dump
    }

    pub fn format_step(time: u64, state: &State) -> Vec<String> {
        vec![
            " +------+---------------------------------------------".to_string(),
            format!(
                " | {:0>4} | pc: {:X} | ac: {:02X} ({:>3}) | ic: {:<6} | {}",
                time,
                state.pc,
                state.ac,
                state.ac,
                state.ic,
                cformat_word(state.get(state.pc))
            ),
            format!(" |  0-7 | {}", Self::format_row(&state.mem, 0, state.pc)),
            format!(" |  8-F | {}", Self::format_row(&state.mem, 8, state.pc)),
        ]
    }

    fn format_row(mem: &Memory, base: u8, pc: u8) -> String {
        let cells: Vec<String> = (base..base + 8)
            .map(|addr| {
                let byte = mem[addr as usize];
                match addr == pc {
                    true => cformat!("<r,s>{:02X}</>", byte),
                    false => format!("{:02X}", byte),
                }
            })
            .collect();
        cells.join(" ")
    }
}

impl Hook for Dump {
    fn init(&mut self, state: &State) {
        println!(" * Start: pc={:X} ac={:02X} ic={}", state.pc, state.ac, state.ic);
    }

    fn exec(&mut self, time: u64, state: &State) {
        for line in Self::format_step(time, state) {
            println!("{}", line);
        }
    }

    fn halt(&mut self, state: &State, cause: &Halt) {
        println!(" +------+---------------------------------------------");
        match cause {
            Halt::Illegal { .. } => cprintln!(" <r,s>HALT</>: {}", cause),
            _ => cprintln!(" <g,s>HALT</>: {}", cause),
        }
        println!(
            " * Final: pc={:X} ac={:02X} ({}) ic={}",
            state.pc, state.ac, state.ac, state.ic
        );
    }
}
