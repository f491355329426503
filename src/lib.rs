#![doc = r#"
famicore library crate.

Instruction-interpreter core for a 6502-family console emulator. The crate
owns everything between the raw memory image and the retired instruction:
decode, effective-address resolution, flag arithmetic, stack linkage, and
the fetch-decode-execute loop.

Modules:
- memory: flat 64 KiB memory image with bounds-checked, little-endian access
- cpu: 6502 CPU core (facade + state + addressing + table + dispatch modules)

Program loading, console wiring, and any rendering surface live outside
this crate; they reach the core only through `Memory` and the `Cpu` facade.

In tests, shared program-image builders are available under
`crate::test_utils`.
"#]

// Core emulator modules
pub mod cpu;
pub mod memory;

// Re-export commonly used types at the crate root for convenience.
pub use cpu::core::{Cpu, Step};
pub use cpu::state::CpuState;
pub use cpu::status::Status;
pub use memory::Memory;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

/// Errors surfaced by the memory image and the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A read or write touched an address at or beyond the end of the
    /// memory image. Word accesses probe `addr + 1`, which can exceed
    /// 16 bits, so the offending address is carried as `u32`.
    AddressOutOfRange(u32),
    /// `Memory::with_size` was given a size of zero or larger than the
    /// 64 KiB address space.
    InvalidMemorySize(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::AddressOutOfRange(addr) => {
                write!(f, "address {addr:#06X} is outside the memory image")
            }
            Error::InvalidMemorySize(size) => {
                write!(f, "invalid memory image size {size} (expected 1..=65536)")
            }
        }
    }
}

impl std::error::Error for Error {}
