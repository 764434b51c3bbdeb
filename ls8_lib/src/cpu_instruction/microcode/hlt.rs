use super::*;

pub fn hlt(
    _memory: &mut Memory,
    _registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(cpu_instruction, "[halted]".to_owned()).with_effect(Effect::Halt))
}
