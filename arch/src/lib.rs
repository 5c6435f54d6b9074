pub mod alu;
pub mod inst;
pub mod mem;
pub mod op;
