mod error;
mod ram;

pub use error::MemoryError;
pub use ram::RAM;

/*
 * 0xFF cells, not 0x100: the last byte address is 0xFE.
 * This is the default size, it can be changed through the machine configuration.
 */
pub const MEMORY_SIZE: usize = 0xff;

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;

    fn read_byte(&self, addr: usize) -> Result<u8, MemoryError> {
        Ok(self.read(addr, 1)?[0])
    }
}
