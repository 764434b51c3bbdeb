use super::*;

pub fn jmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_operand(0);
    registers.command_pointer = registers.get_address(register)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[CP=0x{:02X}]", registers.command_pointer),
    ))
}
