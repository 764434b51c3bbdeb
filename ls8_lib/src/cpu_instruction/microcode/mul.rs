use super::*;

pub fn mul(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.register_operand(0);
    let reg_b = cpu_instruction.register_operand(1);

    alu::apply(Mnemonic::Mul, reg_a, reg_b, registers)?;
    registers.command_pointer += cpu_instruction.length;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[R{}=0x{:02x}]", reg_a, registers.get(reg_a)?),
    ))
}
