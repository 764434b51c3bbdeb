use std::error;
use std::fmt;

use crate::config::RegisterWidth;
use crate::opcode::Mnemonic;
use crate::registers::{RegisterError, Registers};

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum AluError {
    UnsupportedOperation(Mnemonic),
    Overflow(Mnemonic, u64, u64),
    Register(RegisterError),
}

impl fmt::Display for AluError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AluError::UnsupportedOperation(mnemonic) => {
                write!(f, "unsupported ALU operation {}", mnemonic)
            }
            AluError::Overflow(mnemonic, a, b) => {
                write!(f, "{} {}, {} overflows the register", mnemonic, a, b)
            }
            AluError::Register(e) => write!(f, "register error in ALU: {}", e),
        }
    }
}

impl error::Error for AluError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<RegisterError> for AluError {
    fn from(err: RegisterError) -> AluError {
        AluError::Register(err)
    }
}

/*
 * apply
 * Run an arithmetic or compare operation on registers A and B.
 * ADD and MUL write back into A, CMP only changes the flags.
 */
pub fn apply(
    operation: Mnemonic,
    reg_a: usize,
    reg_b: usize,
    registers: &mut Registers,
) -> Result<(), AluError> {
    let a = registers.get(reg_a)?;
    let b = registers.get(reg_b)?;

    match operation {
        Mnemonic::Add => {
            let result = arithmetic(registers.width(), a, b, u64::checked_add, u64::wrapping_add)
                .ok_or(AluError::Overflow(operation, a, b))?;
            registers.set(reg_a, result)?;
        }
        Mnemonic::Mul => {
            let result = arithmetic(registers.width(), a, b, u64::checked_mul, u64::wrapping_mul)
                .ok_or(AluError::Overflow(operation, a, b))?;
            registers.set(reg_a, result)?;
        }
        Mnemonic::Cmp => registers.flags.set(a.cmp(&b)),
        _ => return Err(AluError::UnsupportedOperation(operation)),
    }

    Ok(())
}

fn arithmetic(
    width: RegisterWidth,
    a: u64,
    b: u64,
    checked: fn(u64, u64) -> Option<u64>,
    wrapping: fn(u64, u64) -> u64,
) -> Option<u64> {
    match width {
        RegisterWidth::Unbounded => checked(a, b),
        RegisterWidth::Wrapping => Some(wrapping(a, b)),
    }
}
