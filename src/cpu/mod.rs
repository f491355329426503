/*!
cpu::mod - Public façade for the 6502 CPU core.

Module layout:

```text
status.rs     - Status register bitfield.
state.rs      - Architectural registers + stack helpers.
addressing.rs - Addressing mode enum & effective-address resolution.
table.rs      - Static opcode descriptor table.
execute.rs    - Instruction semantic helpers (ALU, flags, RMW, stack).
dispatch/     - Per-family opcode handlers + orchestrator.
core/         - `Cpu` facade: reset / step / run loop.
```

The public surface is the `Cpu` facade (wrapping `CpuState`) plus the
types a caller needs to drive and observe it. Downstream code should not
rely on internal module layout.
*/

pub mod addressing;
pub mod core;
mod dispatch;
mod execute;
pub mod state;
pub mod status;
pub mod table;

// Re-exports:
// - Cpu (facade over CpuState) and Step (step outcome)
// - CpuState (raw state; exposed for hooks, snapshots, test seeding)
// - Status (packed flag byte), Mode, Opcode metadata
pub use crate::cpu::addressing::Mode;
pub use crate::cpu::core::{Cpu, Step};
pub use crate::cpu::state::CpuState;
pub use crate::cpu::status::Status;
pub use crate::cpu::table::{Mnemonic, OPCODE_TABLE, Opcode};
