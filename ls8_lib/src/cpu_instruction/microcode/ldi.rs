use super::*;

pub fn ldi(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_operand(0);
    let value = cpu_instruction.operands[1] as Word;

    registers.set(register, value)?;
    registers.command_pointer += cpu_instruction.length;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[R{}=0x{:02x}]", register, registers.get(register)?),
    ))
}
