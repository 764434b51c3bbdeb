use std::cmp::Ordering;
use std::error;
use std::fmt;

use super::config::RegisterWidth;
use super::memory::MemoryError;
use super::memory::{AddressableIO, RAM as Memory};

/*
 * LS-8 registers
 * R0 to R6 are general purpose registers.
 * R7 is the stack pointer, it starts at 0xF4 and grows downward.
 *
 * Registers are 8 bits wide by convention but the cells are 64 bits wide.
 * The register width setting decides whether writes are masked.
 *
 * command pointer: address of the next instruction to fetch.
 * instruction register: last fetched opcode.
 * flags: tri-state comparison flags, unset until the first CMP.
 */
pub type Word = u64;

pub const REGISTER_COUNT: usize = 8;
pub const STACK_POINTER: usize = 7;
pub const STACK_POINTER_INIT: Word = 0xf4;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum RegisterError {
    OutOfRange(usize),        // register index
    StackOverflow(Word),      // stack pointer value
    ByteOverflow(Word),       // value that does not fit in a memory cell
    AddressOverflow(Word),    // value that cannot be used as an address
    Memory(MemoryError),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RegisterError::OutOfRange(index) => write!(
                f,
                "register index {} is out of range, valid registers are R0 to R{}",
                index,
                REGISTER_COUNT - 1
            ),
            RegisterError::StackOverflow(sp) => {
                write!(f, "stack pointer 0x{:02X} cannot move further down", sp)
            }
            RegisterError::ByteOverflow(value) => {
                write!(f, "value {} does not fit in a memory cell", value)
            }
            RegisterError::AddressOverflow(value) => {
                write!(f, "value {} cannot be used as a memory address", value)
            }
            RegisterError::Memory(e) => write!(f, "stack memory error: {}", e),
        }
    }
}

impl error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<MemoryError> for RegisterError {
    fn from(err: MemoryError) -> RegisterError {
        RegisterError::Memory(err)
    }
}

pub type Result<T> = std::result::Result<T, RegisterError>;

#[derive(Debug, Default, Eq, PartialEq, Copy, Clone)]
pub struct Flags {
    pub eq: Option<bool>,
    pub lt: Option<bool>,
    pub gt: Option<bool>,
}

impl Flags {
    /// Exactly one flag is raised, the one matching the comparison result.
    pub fn set(&mut self, ordering: Ordering) {
        self.eq = Some(ordering == Ordering::Equal);
        self.lt = Some(ordering == Ordering::Less);
        self.gt = Some(ordering == Ordering::Greater);
    }

    pub fn format(&self) -> String {
        let letter = |flag: Option<bool>, name: char| match flag {
            Some(true) => name.to_ascii_uppercase(),
            Some(false) => name,
            None => '-',
        };

        format!(
            "{}{}{}",
            letter(self.eq, 'e'),
            letter(self.lt, 'l'),
            letter(self.gt, 'g')
        )
    }
}

#[derive(Clone)]
pub struct Registers {
    general: [Word; REGISTER_COUNT],
    pub command_pointer: usize,
    pub instruction_register: Option<u8>,
    pub flags: Flags,
    width: RegisterWidth,
}

impl Registers {
    pub fn new(width: RegisterWidth) -> Registers {
        let mut general = [0; REGISTER_COUNT];
        general[STACK_POINTER] = STACK_POINTER_INIT;

        Registers {
            general,
            command_pointer: 0,
            instruction_register: None,
            flags: Flags::default(),
            width,
        }
    }

    pub fn width(&self) -> RegisterWidth {
        self.width
    }

    pub fn get(&self, index: usize) -> Result<Word> {
        self.general
            .get(index)
            .copied()
            .ok_or(RegisterError::OutOfRange(index))
    }

    pub fn set(&mut self, index: usize, value: Word) -> Result<()> {
        let width = self.width;
        let register = self
            .general
            .get_mut(index)
            .ok_or(RegisterError::OutOfRange(index))?;
        *register = width.constrain(value);

        Ok(())
    }

    /// Register value as a memory address.
    pub fn get_address(&self, index: usize) -> Result<usize> {
        let value = self.get(index)?;
        usize::try_from(value).map_err(|_| RegisterError::AddressOverflow(value))
    }

    pub fn stack_pointer(&self) -> Word {
        self.general[STACK_POINTER]
    }

    pub fn stack_push(&mut self, memory: &mut Memory, value: Word) -> Result<()> {
        let byte = u8::try_from(value).map_err(|_| RegisterError::ByteOverflow(value))?;
        let sp = match self.width {
            RegisterWidth::Unbounded => self
                .stack_pointer()
                .checked_sub(1)
                .ok_or(RegisterError::StackOverflow(self.stack_pointer()))?,
            RegisterWidth::Wrapping => self.width.constrain(self.stack_pointer().wrapping_sub(1)),
        };
        let address = usize::try_from(sp).map_err(|_| RegisterError::AddressOverflow(sp))?;
        memory.write(address, &[byte])?;
        self.set(STACK_POINTER, sp)?;

        Ok(())
    }

    /*
     * The value is copied into the target register before the stack pointer
     * moves so POP R7 ends up one above the pulled value.
     */
    pub fn stack_pull(&mut self, memory: &Memory, index: usize) -> Result<Word> {
        let address = self.get_address(STACK_POINTER)?;
        let value = memory.read_byte(address)? as Word;
        self.set(index, value)?;
        let sp = self.stack_pointer();
        self.set(STACK_POINTER, sp.wrapping_add(1))?;

        Ok(value)
    }

    pub fn general(&self) -> &[Word] {
        &self.general
    }

    pub fn format_general(&self) -> String {
        self.general
            .iter()
            .enumerate()
            .map(|(i, v)| format!("R{}:0x{:02x}", i, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [{} | CP:0x{:02x} | {}]",
            self.format_general(),
            self.command_pointer,
            self.flags.format()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let registers = Registers::new(RegisterWidth::Unbounded);
        for index in 0..STACK_POINTER {
            assert_eq!(0, registers.get(index).unwrap());
        }
        assert_eq!(0xf4, registers.get(STACK_POINTER).unwrap());
        assert_eq!(0, registers.command_pointer);
        assert_eq!(None, registers.instruction_register);
        assert_eq!(Flags::default(), registers.flags);
    }

    #[test]
    fn test_out_of_range() {
        let mut registers = Registers::new(RegisterWidth::Unbounded);
        assert_eq!(RegisterError::OutOfRange(8), registers.get(8).unwrap_err());
        assert_eq!(
            RegisterError::OutOfRange(255),
            registers.set(255, 1).unwrap_err()
        );
    }

    #[test]
    fn test_set_width() {
        let mut registers = Registers::new(RegisterWidth::Unbounded);
        registers.set(0, 0x1ff).unwrap();
        assert_eq!(0x1ff, registers.get(0).unwrap());

        let mut registers = Registers::new(RegisterWidth::Wrapping);
        registers.set(0, 0x1ff).unwrap();
        assert_eq!(0xff, registers.get(0).unwrap());
    }

    #[test]
    fn test_stack_push_pull() {
        let mut memory = Memory::default();
        let mut registers = Registers::new(RegisterWidth::Unbounded);
        registers.stack_push(&mut memory, 0x2a).unwrap();
        assert_eq!(0xf3, registers.stack_pointer());
        assert_eq!(0x2a, memory.read_byte(0xf3).unwrap());
        assert_eq!(0x2a, registers.stack_pull(&memory, 1).unwrap());
        assert_eq!(0x2a, registers.get(1).unwrap());
        assert_eq!(0xf4, registers.stack_pointer());
    }

    #[test]
    fn test_stack_push_byte_overflow() {
        let mut memory = Memory::default();
        let mut registers = Registers::new(RegisterWidth::Unbounded);
        assert_eq!(
            RegisterError::ByteOverflow(0x100),
            registers.stack_push(&mut memory, 0x100).unwrap_err()
        );
        assert_eq!(0xf4, registers.stack_pointer());
    }

    #[test]
    fn test_stack_push_at_bottom() {
        let mut memory = Memory::default();
        let mut registers = Registers::new(RegisterWidth::Unbounded);
        registers.set(STACK_POINTER, 0).unwrap();
        assert_eq!(
            RegisterError::StackOverflow(0),
            registers.stack_push(&mut memory, 0x01).unwrap_err()
        );

        let mut registers = Registers::new(RegisterWidth::Wrapping);
        registers.set(STACK_POINTER, 0).unwrap();
        assert!(matches!(
            registers.stack_push(&mut memory, 0x01).unwrap_err(),
            RegisterError::Memory(MemoryError::WriteOverflow(1, 0xff, 0xff))
        ));
        assert_eq!(0, registers.stack_pointer());
    }

    #[test]
    fn test_stack_pull_into_stack_pointer() {
        let mut memory = Memory::default();
        memory.write(0xf4, &[0x10]).unwrap();
        let mut registers = Registers::new(RegisterWidth::Unbounded);
        registers.stack_pull(&memory, STACK_POINTER).unwrap();
        assert_eq!(0x11, registers.stack_pointer());
    }

    #[test]
    fn test_format_flags() {
        let mut flags = Flags::default();
        assert_eq!("---", flags.format());
        flags.set(Ordering::Less);
        assert_eq!("eLg", flags.format());
        flags.set(Ordering::Equal);
        assert_eq!("Elg", flags.format());
        flags.set(Ordering::Greater);
        assert_eq!("elG", flags.format());
    }
}
