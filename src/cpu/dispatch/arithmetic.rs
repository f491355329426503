/*!
arithmetic.rs - ADC / SBC opcode family handler.

Both instructions funnel through the shared add core in `execute`; SBC
substitutes the operand's two's complement. Carry, overflow, zero and
negative are recomputed on every operation.
*/

use crate::Error;
use crate::cpu::addressing::read_operand;
use crate::cpu::execute::{adc, sbc};
use crate::cpu::state::CpuState;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    match op.mnemonic {
        Mnemonic::Adc => {
            let v = read_operand(op, cpu, mem)?;
            adc(cpu, v);
        }
        Mnemonic::Sbc => {
            let v = read_operand(op, cpu, mem)?;
            sbc(cpu, v);
        }
        _ => return Ok(false),
    }
    Ok(true)
}
