use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOverflow(usize, usize, usize),  // read len, address, memory size
    WriteOverflow(usize, usize, usize), // write len, address, memory size
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOverflow(read_len, addr, size) => write!(
                f,
                "Could not READ {} bytes at address 0x{:02X}, memory size is 0x{:02X}.",
                read_len, addr, size
            ),
            MemoryError::WriteOverflow(write_len, addr, size) => write!(
                f,
                "Could not WRITE {} bytes at address 0x{:02X}, memory size is 0x{:02X}.",
                write_len, addr, size
            ),
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
