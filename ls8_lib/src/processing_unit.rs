use log::warn;

use super::config::{MachineConfig, StorePolicy};
use super::cpu_instruction::microcode;
use super::cpu_instruction::microcode::Result as MicrocodeResult;
use super::cpu_instruction::{CPUInstruction, LogLine};
use super::memory::{AddressableIO, RAM as Memory};
use super::opcode::Mnemonic;
use super::registers::Registers;

/*
 * resolve_opcode
 * Decode the opcode at the given address and read its operands.
 * Unknown opcodes resolve to None, reading operands past the end of the
 * memory is an error.
 */
pub fn resolve_opcode(
    address: usize,
    opcode: u8,
    memory: &Memory,
    store_policy: StorePolicy,
) -> MicrocodeResult<Option<CPUInstruction>> {
    let mnemonic = match Mnemonic::decode(opcode) {
        Some(mnemonic) => mnemonic,
        None => return Ok(None),
    };
    let operands = memory.read(address + 1, mnemonic.operand_count())?;
    let length = 1 + operands.len();

    let cpu_instruction = match mnemonic {
        Mnemonic::Ldi => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::ldi),
        Mnemonic::Prn => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::prn),
        Mnemonic::Hlt => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::hlt),
        Mnemonic::Add => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::add),
        Mnemonic::Mul => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::mul),
        Mnemonic::Pop => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::pop),
        Mnemonic::Push => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::push),
        Mnemonic::St => match store_policy {
            StorePolicy::Reference => CPUInstruction::new(address, opcode, mnemonic, operands, 2, microcode::st),
            StorePolicy::Encoded => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::st),
            StorePolicy::Fault => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::st_undefined),
        },
        Mnemonic::Cmp => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::cmp),
        Mnemonic::Jmp => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::jmp),
        Mnemonic::Jne => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::jne),
        Mnemonic::Jeq => CPUInstruction::new(address, opcode, mnemonic, operands, length, microcode::jeq),
    };

    Ok(Some(cpu_instruction))
}

/*
 * execute_step
 * One fetch, decode, execute cycle.
 * An unknown opcode is skipped: the command pointer moves one byte forward
 * and the returned log line carries the UnknownOpcode effect.
 */
pub fn execute_step(
    registers: &mut Registers,
    memory: &mut Memory,
    config: &MachineConfig,
) -> MicrocodeResult<LogLine> {
    let address = registers.command_pointer;
    let opcode = memory.read_byte(address)?;
    registers.instruction_register = Some(opcode);

    match resolve_opcode(address, opcode, memory, config.store_policy)? {
        Some(cpu_instruction) => cpu_instruction.execute(memory, registers),
        None => {
            warn!(
                "unknown opcode 0x{:02X} (0b{:08b}) at address #0x{:02X}, skipping it",
                opcode, opcode, address
            );
            registers.command_pointer += 1;

            Ok(LogLine::unknown(address, opcode))
        }
    }
}
