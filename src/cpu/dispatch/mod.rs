/*!
dispatch - Per-family instruction handlers and their orchestrator.

The engine fetches and decodes; this module executes. `execute` walks the
family handlers in a fixed chain, each of which either recognizes the
descriptor's mnemonic (performs the instruction, returns `Ok(true)`) or
passes (`Ok(false)`).

Family split:
    load_store   - LDA/LDX/LDY, STA/STX/STY
    arithmetic   - ADC/SBC
    logical      - AND/ORA/EOR/BIT
    compare      - CMP/CPX/CPY
    rmw          - shifts/rotates, INC/DEC (memory and register forms)
    branches     - the eight conditional branches
    control_flow - JMP/JSR/RTS/RTI
    misc         - transfers, stack pushes/pulls, flag ops, NOP

BRK never reaches this layer: the engine halts on it (and on undefined
opcodes) before dispatch. Every other table entry is claimed by exactly
one family, so falling off the end of the chain means the table and the
handlers disagree, which is a crate bug and not a runtime condition.

Handlers run with PC parked on the first operand byte and must leave it
there unless the instruction itself redirects control flow; the engine
uses that to decide whether to skip operand bytes afterwards.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::Error;
use crate::cpu::state::CpuState;
use crate::cpu::table::Opcode;
use crate::memory::Memory;

/// Execute one decoded instruction.
pub(crate) fn execute(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<(), Error> {
    if load_store::handle(op, cpu, mem)? {
        return Ok(());
    }
    if arithmetic::handle(op, cpu, mem)? {
        return Ok(());
    }
    if logical::handle(op, cpu, mem)? {
        return Ok(());
    }
    if compare::handle(op, cpu, mem)? {
        return Ok(());
    }
    if rmw::handle(op, cpu, mem)? {
        return Ok(());
    }
    if branches::handle(op, cpu, mem)? {
        return Ok(());
    }
    if control_flow::handle(op, cpu, mem)? {
        return Ok(());
    }
    if misc::handle(op, cpu, mem)? {
        return Ok(());
    }
    unreachable!(
        "opcode {:#04X} ({:?}) has no family handler",
        op.code, op.mnemonic
    )
}
