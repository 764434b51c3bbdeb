pub mod alu;
pub mod config;
mod cpu_instruction;
mod disassembler;
pub mod memory;
pub mod opcode;
mod processing_unit;
mod processor;
mod program;
mod registers;

pub use config::{ConfigError, MachineConfig, RegisterWidth, StorePolicy};
pub use cpu_instruction::microcode::format_print;
pub use cpu_instruction::{CPUInstruction, Effect, LogLine, MicrocodeError};
pub use disassembler::disassemble;
pub use memory::AddressableIO;
pub use memory::RAM as Memory;
pub use memory::{MemoryError, MEMORY_SIZE};
pub use processing_unit::*;
pub use processor::{ExecutionError, Processor, RunSummary, State};
pub use program::{LoaderError, Program};
pub use registers::{
    Flags, RegisterError, Registers, Word, REGISTER_COUNT, STACK_POINTER, STACK_POINTER_INIT,
};
