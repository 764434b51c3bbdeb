use std::error;
use std::fmt;
use std::io::Write;

use log::{debug, info, trace};

use super::config::{ConfigError, MachineConfig};
use super::cpu_instruction::microcode::format_print;
use super::cpu_instruction::{Effect, LogLine, MicrocodeError};
use super::memory::{AddressableIO, MemoryError, RAM as Memory};
use super::processing_unit::execute_step;
use super::program::Program;
use super::registers::Registers;

#[derive(Debug)]
pub enum ExecutionError {
    Microcode(MicrocodeError),
    Output(std::io::Error),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExecutionError::Microcode(e) => write!(f, "execution stopped: {}", e),
            ExecutionError::Output(e) => write!(f, "could not write program output: {}", e),
        }
    }
}

impl error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<MicrocodeError> for ExecutionError {
    fn from(err: MicrocodeError) -> ExecutionError {
        ExecutionError::Microcode(err)
    }
}

impl std::convert::From<std::io::Error> for ExecutionError {
    fn from(err: std::io::Error) -> ExecutionError {
        ExecutionError::Output(err)
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum State {
    Running,
    Halted,
}

#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct RunSummary {
    pub steps: usize,
    /// (address, opcode) of every byte skipped because it did not decode
    pub unknown_opcodes: Vec<(usize, u8)>,
}

/*
 * Processor
 * The whole machine: registers, memory and run state. PRN output goes to the
 * given writer.
 */
pub struct Processor<W: Write> {
    registers: Registers,
    memory: Memory,
    config: MachineConfig,
    state: State,
    output: W,
}

impl<W: Write> Processor<W> {
    pub fn new(config: MachineConfig, output: W) -> Result<Processor<W>, ConfigError> {
        config.validate()?;

        Ok(Processor {
            registers: Registers::new(config.register_width),
            memory: Memory::new(config.memory_size),
            config,
            state: State::Running,
            output,
        })
    }

    /// Write the program image at address 0.
    pub fn load(&mut self, program: &Program) -> Result<usize, MemoryError> {
        self.memory.write(0x00, program.bytes())?;
        info!("loaded {} bytes at address #0x00", program.len());

        Ok(program.len())
    }

    pub fn step(&mut self) -> Result<LogLine, ExecutionError> {
        trace!("{}", self.trace());
        let log_line = execute_step(&mut self.registers, &mut self.memory, &self.config)?;
        debug!("{}", log_line);

        match log_line.effect {
            Effect::Print(value) => writeln!(self.output, "{}", format_print(value))?,
            Effect::Halt => self.state = State::Halted,
            Effect::None | Effect::UnknownOpcode => {}
        }

        Ok(log_line)
    }

    /// Execute instructions until HLT. There is no step limit.
    pub fn run(&mut self) -> Result<RunSummary, ExecutionError> {
        self.run_until(|| false)
    }

    /*
     * run_until
     * Execute instructions until HLT or until `stop` returns true. `stop` is
     * checked before every fetch, the state stays Running when it fires.
     */
    pub fn run_until(&mut self, stop: impl Fn() -> bool) -> Result<RunSummary, ExecutionError> {
        let mut summary = RunSummary::default();

        while self.state == State::Running && !stop() {
            let log_line = self.step()?;
            summary.steps += 1;
            if log_line.effect == Effect::UnknownOpcode {
                summary.unknown_opcodes.push((log_line.address, log_line.opcode));
            }
        }
        self.output.flush()?;
        if self.is_halted() {
            info!("halted after {} instructions", summary.steps);
        }

        Ok(summary)
    }

    /*
     * trace
     * PC, the three bytes from PC and the eight registers, in hexadecimal.
     * Bytes past the end of the memory show as "--".
     */
    pub fn trace(&self) -> String {
        let pc = self.registers.command_pointer;
        let bytes = (pc..pc.saturating_add(3))
            .map(|addr| match self.memory.read_byte(addr) {
                Ok(byte) => format!("{:02X}", byte),
                Err(_) => "--".to_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let registers = self
            .registers
            .general()
            .iter()
            .map(|value| format!(" {:02X}", value))
            .collect::<String>();

        format!("TRACE: {:02X} | {} |{}", pc, bytes, registers)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
