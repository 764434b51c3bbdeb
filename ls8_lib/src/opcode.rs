use std::fmt;

pub const LDI: u8 = 0b1000_0010;
pub const PRN: u8 = 0b0100_0111;
pub const HLT: u8 = 0b0000_0001;
pub const MUL: u8 = 0b1010_0010;
pub const POP: u8 = 0b0100_0110;
pub const PUSH: u8 = 0b0100_0101;
pub const ST: u8 = 0b1000_0100;
pub const CMP: u8 = 0b1010_0111;
pub const JMP: u8 = 0b0101_0100;
pub const JNE: u8 = 0b0101_0110;
pub const JEQ: u8 = 0b0101_0101;

/*
 * Instruction tags.
 * ADD is understood by the ALU but no opcode decodes to it.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Mnemonic {
    Ldi,
    Prn,
    Hlt,
    Add,
    Mul,
    Pop,
    Push,
    St,
    Cmp,
    Jmp,
    Jne,
    Jeq,
}

impl Mnemonic {
    pub fn decode(opcode: u8) -> Option<Mnemonic> {
        match opcode {
            LDI => Some(Mnemonic::Ldi),
            PRN => Some(Mnemonic::Prn),
            HLT => Some(Mnemonic::Hlt),
            MUL => Some(Mnemonic::Mul),
            POP => Some(Mnemonic::Pop),
            PUSH => Some(Mnemonic::Push),
            ST => Some(Mnemonic::St),
            CMP => Some(Mnemonic::Cmp),
            JMP => Some(Mnemonic::Jmp),
            JNE => Some(Mnemonic::Jne),
            JEQ => Some(Mnemonic::Jeq),
            _ => None,
        }
    }

    pub fn opcode(&self) -> Option<u8> {
        match self {
            Mnemonic::Ldi => Some(LDI),
            Mnemonic::Prn => Some(PRN),
            Mnemonic::Hlt => Some(HLT),
            Mnemonic::Add => None,
            Mnemonic::Mul => Some(MUL),
            Mnemonic::Pop => Some(POP),
            Mnemonic::Push => Some(PUSH),
            Mnemonic::St => Some(ST),
            Mnemonic::Cmp => Some(CMP),
            Mnemonic::Jmp => Some(JMP),
            Mnemonic::Jne => Some(JNE),
            Mnemonic::Jeq => Some(JEQ),
        }
    }

    /// Operand bytes following the opcode, encoded in its two high bits.
    pub fn operand_count(&self) -> usize {
        match self.opcode() {
            Some(opcode) => operand_count(opcode),
            None => 2,
        }
    }
}

pub fn operand_count(opcode: u8) -> usize {
    (opcode >> 6) as usize
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mnemonic::Ldi => "LDI",
            Mnemonic::Prn => "PRN",
            Mnemonic::Hlt => "HLT",
            Mnemonic::Add => "ADD",
            Mnemonic::Mul => "MUL",
            Mnemonic::Pop => "POP",
            Mnemonic::Push => "PUSH",
            Mnemonic::St => "ST",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jne => "JNE",
            Mnemonic::Jeq => "JEQ",
        };

        f.pad(name)
    }
}
