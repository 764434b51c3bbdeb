use crate::alu::AluError;
use crate::memory::MemoryError;
use crate::registers::RegisterError;
use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum MicrocodeError {
    // ↓ when an overflow problem occures during fetch, operand read or store
    MemoryOverflow(MemoryError),
    Register(RegisterError),
    Alu(AluError),
    // ↓ ST under the fault store policy, address of the instruction
    UndefinedStoreTarget(usize),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MicrocodeError::MemoryOverflow(e) => {
                write!(f, "memory overflow during microcode operation: {}", e)
            }
            MicrocodeError::Register(e) => {
                write!(f, "register error caught in microcode operation: {}", e)
            }
            MicrocodeError::Alu(e) => write!(f, "ALU error: {}", e),
            MicrocodeError::UndefinedStoreTarget(address) => write!(
                f,
                "undefined store target for ST at address #0x{:02X}",
                address
            ),
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<MemoryError> for MicrocodeError {
    fn from(err: MemoryError) -> MicrocodeError {
        MicrocodeError::MemoryOverflow(err)
    }
}

impl std::convert::From<RegisterError> for MicrocodeError {
    fn from(err: RegisterError) -> MicrocodeError {
        match err {
            RegisterError::Memory(e) => MicrocodeError::MemoryOverflow(e),
            e => MicrocodeError::Register(e),
        }
    }
}

impl std::convert::From<AluError> for MicrocodeError {
    fn from(err: AluError) -> MicrocodeError {
        MicrocodeError::Alu(err)
    }
}
