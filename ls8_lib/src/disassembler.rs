use super::cpu_instruction::format_instruction;
use super::memory::{AddressableIO, MemoryError, RAM as Memory};
use super::opcode::Mnemonic;

/*
 * disassemble
 * List the instructions found between the start and end addresses. Bytes
 * that do not decode take one line each, shown as "???".
 */
pub fn disassemble(start: usize, end: usize, memory: &Memory) -> Result<Vec<String>, MemoryError> {
    let mut output: Vec<String> = Vec::new();
    let mut address = start;

    while address < end {
        let opcode = memory.read_byte(address)?;
        let mnemonic = Mnemonic::decode(opcode);
        let operands = match mnemonic {
            Some(mnemonic) => memory.read(address + 1, mnemonic.operand_count())?,
            None => Vec::new(),
        };
        output.push(
            format_instruction(address, opcode, mnemonic, &operands)
                .trim_end()
                .to_owned(),
        );
        address += 1 + operands.len();
    }

    Ok(output)
}
