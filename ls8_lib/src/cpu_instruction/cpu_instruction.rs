use super::microcode::Result as MicrocodeResult;
use crate::memory::RAM as Memory;
use crate::opcode::Mnemonic;
use crate::registers::{Registers, Word};
use std::fmt;

pub type BoxedMicrocode =
    Box<dyn Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>>;

pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub operands: Vec<u8>,
    /// how far the command pointer moves when the instruction does not branch
    pub length: usize,
    pub microcode: BoxedMicrocode,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: Mnemonic,
        operands: Vec<u8>,
        length: usize,
        microcode: impl Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>
            + 'static,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic,
            operands,
            length,
            microcode: Box::new(microcode),
        }
    }

    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, self)
    }

    /// Operand interpreted as a register index.
    pub fn register_operand(&self, position: usize) -> usize {
        self.operands[position] as usize
    }
}

impl fmt::Debug for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CPUInstruction")
            .field("address", &self.address)
            .field("opcode", &self.opcode)
            .field("mnemonic", &self.mnemonic)
            .field("operands", &self.operands)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_instruction(self.address, self.opcode, Some(self.mnemonic), &self.operands)
        )
    }
}

pub fn format_instruction(
    address: usize,
    opcode: u8,
    mnemonic: Option<Mnemonic>,
    operands: &[u8],
) -> String {
    let mut bytes = vec![opcode];
    bytes.extend_from_slice(operands);
    let byte_sequence = format!(
        "({})",
        bytes
            .iter()
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
    );
    let (mnemonic, arguments) = match mnemonic {
        Some(mnemonic) => (mnemonic.to_string(), format_operands(mnemonic, operands)),
        None => ("???".to_owned(), String::new()),
    };

    format!(
        "#0x{:02X}: {: <13}{: <4} {: <10}",
        address, byte_sequence, mnemonic, arguments
    )
}

fn format_operands(mnemonic: Mnemonic, operands: &[u8]) -> String {
    match (mnemonic, operands) {
        (Mnemonic::Ldi, [register, value]) => format!("R{},0x{:02x}", register, value),
        (_, [register]) => format!("R{}", register),
        (_, [reg_a, reg_b]) => format!("R{},R{}", reg_a, reg_b),
        _ => String::new(),
    }
}

/*
 * What the processor has to do once the microcode returns, beside moving on
 * to the next instruction.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Effect {
    None,
    Print(Word),
    Halt,
    UnknownOpcode,
}

#[derive(Debug)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: Option<Mnemonic>,
    pub operands: Vec<u8>,
    pub outcome: String,
    pub effect: Effect,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, outcome: String) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: Some(cpu_instruction.mnemonic),
            operands: cpu_instruction.operands.clone(),
            outcome,
            effect: Effect::None,
        }
    }

    pub fn unknown(address: usize, opcode: u8) -> LogLine {
        LogLine {
            address,
            opcode,
            mnemonic: None,
            operands: Vec::new(),
            outcome: "[skipped]".to_owned(),
            effect: Effect::UnknownOpcode,
        }
    }

    pub fn with_effect(self, effect: Effect) -> LogLine {
        LogLine { effect, ..self }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}",
            format_instruction(self.address, self.opcode, self.mnemonic, &self.operands),
            self.outcome
        )
    }
}
