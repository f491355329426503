/*!
load_store.rs - Load / Store opcode family handler.

Loads move memory into a register and set Z/N from the value; stores move
a register into memory and touch no flags. Both resolve their operand
through the descriptor's addressing mode, so one arm per mnemonic covers
every encoding.
*/

use crate::Error;
use crate::cpu::addressing::{operand_address, read_operand};
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::state::CpuState;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    match op.mnemonic {
        Mnemonic::Lda => {
            let v = read_operand(op, cpu, mem)?;
            lda(cpu, v);
        }
        Mnemonic::Ldx => {
            let v = read_operand(op, cpu, mem)?;
            ldx(cpu, v);
        }
        Mnemonic::Ldy => {
            let v = read_operand(op, cpu, mem)?;
            ldy(cpu, v);
        }
        Mnemonic::Sta => {
            let addr = operand_address(op.mode, cpu, mem)?;
            mem.write(addr, cpu.a())?;
        }
        Mnemonic::Stx => {
            let addr = operand_address(op.mode, cpu, mem)?;
            mem.write(addr, cpu.x())?;
        }
        Mnemonic::Sty => {
            let addr = operand_address(op.mode, cpu, mem)?;
            mem.write(addr, cpu.y())?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
