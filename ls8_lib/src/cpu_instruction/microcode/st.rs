use super::*;

pub fn st(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.register_operand(0);
    let reg_b = cpu_instruction.register_operand(1);
    let address = registers.get_address(reg_a)?;
    let value = registers.get(reg_b)?;
    let byte = u8::try_from(value).map_err(|_| RegisterError::ByteOverflow(value))?;

    memory.write(address, &[byte])?;
    registers.command_pointer += cpu_instruction.length;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[#0x{:02X}=0x{:02x}]", address, byte),
    ))
}

/// ST under the fault store policy.
pub fn st_undefined(
    _memory: &mut Memory,
    _registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Err(MicrocodeError::UndefinedStoreTarget(cpu_instruction.address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_st() {
        let cpu_instruction =
            CPUInstruction::new(0x00, 0x84, Mnemonic::St, vec![0x00, 0x01], 2, st);
        let (mut memory, mut registers) = get_stuff(0x00, vec![0x84, 0x00, 0x01]);
        registers.set(0, 0x80).unwrap();
        registers.set(1, 0x2a).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x2a, memory.read(0x80, 1).unwrap()[0]);
        assert_eq!(0x02, registers.command_pointer);
        assert_eq!(
            "#0x00: (84 00 01)   ST   R0,R1       [#0x80=0x2a]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_st_encoded_length() {
        let cpu_instruction =
            CPUInstruction::new(0x00, 0x84, Mnemonic::St, vec![0x00, 0x01], 3, st);
        let (mut memory, mut registers) = get_stuff(0x00, vec![0x84, 0x00, 0x01]);
        registers.set(0, 0x80).unwrap();
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x03, registers.command_pointer);
    }

    #[test]
    fn test_st_out_of_bounds() {
        let cpu_instruction =
            CPUInstruction::new(0x00, 0x84, Mnemonic::St, vec![0x00, 0x01], 2, st);
        let (mut memory, mut registers) = get_stuff(0x00, vec![0x84, 0x00, 0x01]);
        registers.set(0, 0xff).unwrap();
        let error = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap_err();
        assert!(matches!(error, MicrocodeError::MemoryOverflow(_)));
        assert_eq!(0x00, registers.command_pointer);
    }

    #[test]
    fn test_st_undefined() {
        let cpu_instruction =
            CPUInstruction::new(0x09, 0x84, Mnemonic::St, vec![0x00, 0x01], 2, st_undefined);
        let (mut memory, mut registers) = get_stuff(0x09, vec![0x84, 0x00, 0x01]);
        let error = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap_err();
        assert_eq!(MicrocodeError::UndefinedStoreTarget(0x09), error);
        assert_eq!(0x09, registers.command_pointer);
    }
}
