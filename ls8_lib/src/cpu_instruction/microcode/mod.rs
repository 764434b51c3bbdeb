mod error;

mod add;
mod cmp;
mod hlt;
mod jeq;
mod jmp;
mod jne;
mod ldi;
mod mul;
mod pop;
mod prn;
mod push;
mod st;

pub use error::{MicrocodeError, Result};

pub use add::add;
pub use cmp::cmp;
pub use hlt::hlt;
pub use jeq::jeq;
pub use jmp::jmp;
pub use jne::jne;
pub use ldi::ldi;
pub use mul::mul;
pub use pop::pop;
pub use prn::{format_print, prn};
pub use push::push;
pub use st::{st, st_undefined};

use super::cpu_instruction::{CPUInstruction, Effect, LogLine};
use crate::alu;
use crate::memory::RAM as Memory;
use crate::memory::AddressableIO;
use crate::opcode::Mnemonic;
use crate::registers::{RegisterError, Registers, Word};
