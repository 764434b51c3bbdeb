use super::*;

pub fn prn(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_operand(0);
    let value = registers.get(register)?;
    registers.command_pointer += cpu_instruction.length;

    Ok(LogLine::new(cpu_instruction, format!("[R{}=0x{:02x}]", register, value))
        .with_effect(Effect::Print(value)))
}

/// Output line written for a PRN instruction.
pub fn format_print(value: Word) -> String {
    format!("hex val: {:x}\tdec val: {}\tbin val: {:b}", value, value, value)
}
