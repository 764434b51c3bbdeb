use super::*;

pub fn jeq(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    if registers.flags.eq == Some(true) {
        registers.command_pointer = registers.get_address(cpu_instruction.register_operand(0))?;
    } else {
        registers.command_pointer += cpu_instruction.length;
    }

    Ok(LogLine::new(
        cpu_instruction,
        format!("[CP=0x{:02X}]", registers.command_pointer),
    ))
}
