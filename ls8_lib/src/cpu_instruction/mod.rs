pub(crate) mod cpu_instruction;
pub mod microcode;

pub use self::cpu_instruction::{format_instruction, CPUInstruction, Effect, LogLine};
pub use self::microcode::MicrocodeError;
