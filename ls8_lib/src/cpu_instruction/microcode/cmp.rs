use super::*;

pub fn cmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.register_operand(0);
    let reg_b = cpu_instruction.register_operand(1);

    alu::apply(Mnemonic::Cmp, reg_a, reg_b, registers)?;
    registers.command_pointer += cpu_instruction.length;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:02x})[R{}=0x{:02x}][F={}]",
            registers.get(reg_b)?,
            reg_a,
            registers.get(reg_a)?,
            registers.flags.format()
        ),
    ))
}
