use serde::Deserialize;
use std::error;
use std::fmt;

use crate::memory::MEMORY_SIZE;
use crate::registers::STACK_POINTER_INIT;

/// Upper bound for the configurable memory size.
pub const MEMORY_SIZE_MAX: usize = 0x10000;

/// How register writes behave when a value does not fit in 8 bits.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegisterWidth {
    /// Registers keep the full result. Exceeding 64 bits is a fatal overflow.
    #[default]
    Unbounded,
    /// Every register write is masked to 8 bits.
    Wrapping,
}

impl RegisterWidth {
    pub fn constrain(&self, value: u64) -> u64 {
        match self {
            RegisterWidth::Unbounded => value,
            RegisterWidth::Wrapping => value & 0xff,
        }
    }
}

/// Behavior of the ST instruction.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorePolicy {
    /// Store `R[b]` at `R[a]` then advance the command pointer by 2.
    #[default]
    Reference,
    /// Store `R[b]` at `R[a]` then advance the command pointer past both operands.
    Encoded,
    /// Refuse to store: the target address is undefined.
    Fault,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    pub register_width: RegisterWidth,
    pub memory_size: usize,
    pub store_policy: StorePolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            register_width: RegisterWidth::default(),
            memory_size: MEMORY_SIZE,
            store_policy: StorePolicy::default(),
        }
    }
}

impl MachineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size <= STACK_POINTER_INIT as usize {
            return Err(ConfigError::MemoryTooSmall(self.memory_size));
        }
        if self.memory_size > MEMORY_SIZE_MAX {
            return Err(ConfigError::MemoryTooLarge(self.memory_size));
        }

        Ok(())
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum ConfigError {
    MemoryTooSmall(usize),
    MemoryTooLarge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::MemoryTooSmall(size) => write!(
                f,
                "memory size {} is too small, the stack starts at 0x{:02X}",
                size, STACK_POINTER_INIT
            ),
            ConfigError::MemoryTooLarge(size) => write!(
                f,
                "memory size {} exceeds the maximum of {}",
                size, MEMORY_SIZE_MAX
            ),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
