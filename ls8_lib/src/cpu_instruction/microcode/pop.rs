use super::*;

pub fn pop(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_operand(0);

    registers.stack_pull(memory, register)?;
    registers.command_pointer += cpu_instruction.length;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[R{}=0x{:02x}][SP=0x{:02x}]",
            register,
            registers.get(register)?,
            registers.stack_pointer()
        ),
    ))
}
