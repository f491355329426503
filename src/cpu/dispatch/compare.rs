/*!
compare.rs - CMP / CPX / CPY opcode family handler.

Flags-only subtraction: carry means register >= operand, Z/N come from the
wrapping difference, and the compared register is never written.
*/

use crate::Error;
use crate::cpu::addressing::read_operand;
use crate::cpu::execute::compare;
use crate::cpu::state::CpuState;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    match op.mnemonic {
        Mnemonic::Cmp => {
            let v = read_operand(op, cpu, mem)?;
            compare(cpu, cpu.a(), v);
        }
        Mnemonic::Cpx => {
            let v = read_operand(op, cpu, mem)?;
            compare(cpu, cpu.x(), v);
        }
        Mnemonic::Cpy => {
            let v = read_operand(op, cpu, mem)?;
            compare(cpu, cpu.y(), v);
        }
        _ => return Ok(false),
    }
    Ok(true)
}
