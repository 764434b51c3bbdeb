use super::*;

pub fn push(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_operand(0);
    let value = registers.get(register)?;

    registers.stack_push(memory, value)?;
    registers.command_pointer += cpu_instruction.length;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[SP=0x{:02x}]", registers.stack_pointer()),
    ))
}
