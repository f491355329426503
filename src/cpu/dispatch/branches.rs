/*!
branches.rs - Conditional branch opcode family handler.

Each branch tests one flag and, when taken, redirects PC through Relative
resolution (target = address after the offset byte + sign-extended
offset). A branch that is not taken leaves PC alone so the engine skips
the offset byte; no branch touches any flag.
*/

use crate::Error;
use crate::cpu::addressing::operand_address;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    let take = match op.mnemonic {
        Mnemonic::Bcc => !cpu.is_flag_set(Status::CARRY),
        Mnemonic::Bcs => cpu.is_flag_set(Status::CARRY),
        Mnemonic::Beq => cpu.is_flag_set(Status::ZERO),
        Mnemonic::Bne => !cpu.is_flag_set(Status::ZERO),
        Mnemonic::Bmi => cpu.is_flag_set(Status::NEGATIVE),
        Mnemonic::Bpl => !cpu.is_flag_set(Status::NEGATIVE),
        Mnemonic::Bvc => !cpu.is_flag_set(Status::OVERFLOW),
        Mnemonic::Bvs => cpu.is_flag_set(Status::OVERFLOW),
        _ => return Ok(false),
    };

    if take {
        let target = operand_address(op.mode, cpu, mem)?;
        cpu.set_pc(target);
    }
    Ok(true)
}
