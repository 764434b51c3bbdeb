use super::*;

#[derive(Debug, Clone)]
pub struct RAM {
    ram: Vec<u8>,
}

impl RAM {
    pub fn new(size: usize) -> RAM {
        RAM {
            ram: vec![0x00; size],
        }
    }
}

impl Default for RAM {
    fn default() -> Self {
        Self::new(MEMORY_SIZE)
    }
}

impl AddressableIO for RAM {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        match addr.checked_add(len) {
            Some(end) if end <= self.ram.len() => Ok(self.ram[addr..end].to_vec()),
            _ => Err(MemoryError::ReadOverflow(len, addr, self.ram.len())),
        }
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        match location.checked_add(data.len()) {
            Some(end) if end <= self.ram.len() => {
                self.ram[location..end].copy_from_slice(data);

                Ok(())
            }
            _ => Err(MemoryError::WriteOverflow(
                data.len(),
                location,
                self.ram.len(),
            )),
        }
    }

    fn get_size(&self) -> usize {
        self.ram.len()
    }
}
