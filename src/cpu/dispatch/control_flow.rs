/*!
control_flow.rs - JMP / JSR / RTS / RTI opcode family handler.

These are the unconditional PC redirects. JSR pushes the address of its
own last byte (big-endian on the stack) before jumping, and RTS undoes
that by popping and adding one, landing on the instruction after the
call. RTI restores the status
byte first, then the interrupted PC, with no +1.

BRK is absent on purpose: the engine halts on it before dispatch.
*/

use crate::Error;
use crate::cpu::addressing::operand_address;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    match op.mnemonic {
        Mnemonic::Jmp => {
            let target = operand_address(op.mode, cpu, mem)?;
            cpu.set_pc(target);
        }
        Mnemonic::Jsr => {
            // PC sits on the first operand byte; the instruction's last
            // byte is one past it.
            let ret = cpu.pc().wrapping_add(1);
            cpu.push_word(mem, ret)?;
            let target = mem.read_word(cpu.pc())?;
            cpu.set_pc(target);
        }
        Mnemonic::Rts => {
            let ret = cpu.pop_word(mem)?;
            cpu.set_pc(ret.wrapping_add(1));
        }
        Mnemonic::Rti => {
            let bits = cpu.pop(mem)?;
            cpu.set_status(Status::from_bits_retain(bits));
            let pc = cpu.pop_word(mem)?;
            cpu.set_pc(pc);
        }
        _ => return Ok(false),
    }
    Ok(true)
}
