/*!
core::Cpu - Execution engine facade wrapping `CpuState`.

Owns the fetch-decode-execute loop and the PC advancement policy:

1. Fetch the opcode byte at PC (out-of-range is fatal), advance PC by 1.
2. Look the byte up in the descriptor table. BRK or an undefined byte
   halts the engine cleanly: no instruction retires, no cycles accrue,
   and Halted is terminal.
3. Snapshot PC (now on the first operand byte) and run the family
   handler; the handler reads operands through the resolver against that
   snapshot.
4. If the handler left PC at the snapshot, advance by `len - 1` to skip
   the consumed operand bytes. Branches, jumps, calls and returns moved
   PC themselves and are left alone.
5. Credit the descriptor's base cycles and report the retired step.

`run` repeats until Halted; `run_with_hook` additionally calls a
caller-supplied hook once per retired instruction, strictly between
instructions; the hook returning false is the caller's cancellation
path (the core has no timeout of its own).
*/

use crate::Error;
use crate::cpu::dispatch;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;
use crate::cpu::table::{self, Mnemonic};
use crate::memory::Memory;

/// Outcome of a single engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One instruction ran to completion.
    Retired { cycles: u32 },
    /// The engine is halted (BRK, undefined opcode, or already halted).
    Halted,
}

/// 6502 execution engine: architectural state plus a retired-cycle count.
#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    cycles: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a new CPU with power-up defaults.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            cycles: 0,
        }
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state (test seeding escape hatch).
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Reset registers and flags, load PC from the reset vector, zero the
    /// cycle counter, and leave the engine running.
    pub fn reset(&mut self, mem: &Memory) {
        self.state.reset(mem);
        self.cycles = 0;
    }

    /// True if execution has halted (BRK or undefined opcode).
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Total base cycles credited to retired instructions since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> Status {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (for seeding preconditions before a run)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: Status) {
        self.state.status = v;
    }
    pub fn set_halted(&mut self, h: bool) {
        self.state.halted = h;
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction.
    pub fn step(&mut self, mem: &mut Memory) -> Result<Step, Error> {
        if self.state.halted {
            return Ok(Step::Halted);
        }

        let code = mem.read(self.state.pc())?;
        self.state.advance_pc_one();

        let Some(op) = table::lookup(code) else {
            // Undefined opcode: clean halt, same as BRK.
            self.state.halt();
            return Ok(Step::Halted);
        };
        if op.mnemonic == Mnemonic::Brk {
            self.state.halt();
            return Ok(Step::Halted);
        }

        let operand_pc = self.state.pc();
        dispatch::execute(op, &mut self.state, mem)?;

        // Handlers that redirected PC (branch/jump/call/return) already
        // consumed their operands; everyone else gets them skipped here.
        if self.state.pc() == operand_pc {
            self.state.set_pc(operand_pc.wrapping_add(op.len as u16 - 1));
        }

        let cycles = op.cycles as u32;
        self.cycles += cycles as u64;
        Ok(Step::Retired { cycles })
    }

    /// Execute until a halting instruction or an invalid address.
    pub fn run(&mut self, mem: &mut Memory) -> Result<(), Error> {
        self.run_with_hook(mem, |_| true)
    }

    /// Execute until halt, invoking `hook` after each retired instruction.
    ///
    /// The hook sees the post-instruction state and may return false to
    /// stop the loop without halting the CPU (stepping can resume later).
    /// The halting fetch itself never reaches the hook.
    pub fn run_with_hook<F>(&mut self, mem: &mut Memory, mut hook: F) -> Result<(), Error>
    where
        F: FnMut(&CpuState) -> bool,
    {
        loop {
            match self.step(mem)? {
                Step::Halted => return Ok(()),
                Step::Retired { .. } => {
                    if !hook(&self.state) {
                        return Ok(());
                    }
                }
            }
        }
    }
}
