/*!
logical.rs - AND / ORA / EOR / BIT opcode family handler.

The three combiners write back to the accumulator and set Z/N. BIT is the
odd one out: nothing is stored, Z reflects the AND, and N/V are copied
straight from bits 7 and 6 of the memory operand.
*/

use crate::Error;
use crate::cpu::addressing::read_operand;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::state::CpuState;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    match op.mnemonic {
        Mnemonic::And => {
            let v = read_operand(op, cpu, mem)?;
            and(cpu, v);
        }
        Mnemonic::Ora => {
            let v = read_operand(op, cpu, mem)?;
            ora(cpu, v);
        }
        Mnemonic::Eor => {
            let v = read_operand(op, cpu, mem)?;
            eor(cpu, v);
        }
        Mnemonic::Bit => {
            let v = read_operand(op, cpu, mem)?;
            bit(cpu, v);
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::test_utils::load_program;

    #[test]
    fn and_masks_accumulator() {
        let (mut cpu, mut mem) = load_program(&[0x29, 0x0F, 0x00]);
        cpu.set_a(0xF5);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x05);
        assert!(!cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn ora_sets_negative() {
        let (mut cpu, mut mem) = load_program(&[0x09, 0x80, 0x00]);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.status().contains(Status::NEGATIVE));
    }

    #[test]
    fn eor_self_clears() {
        let (mut cpu, mut mem) = load_program(&[0x49, 0xAA, 0x00]);
        cpu.set_a(0xAA);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn bit_zero_page_all_flags() {
        // BIT $A0 with A=0 and memory $FF: N, V, Z all set
        let (mut cpu, mut mem) = load_program(&[0x24, 0xA0, 0x00]);
        mem.write(0x00A0, 0xFF).unwrap();
        cpu.set_a(0x00);
        cpu.run(&mut mem).unwrap();
        assert!(cpu.status().contains(Status::NEGATIVE));
        assert!(cpu.status().contains(Status::OVERFLOW));
        assert!(cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn bit_absolute_no_flags() {
        let (mut cpu, mut mem) = load_program(&[0x2C, 0xAC, 0x07, 0x00]);
        mem.write(0x07AC, 0x3F).unwrap();
        cpu.set_a(0x01);
        cpu.run(&mut mem).unwrap();
        let status = cpu.status();
        assert_eq!(status, Status::power_up());
    }

    #[test]
    fn bit_leaves_accumulator_untouched() {
        let (mut cpu, mut mem) = load_program(&[0x24, 0x10, 0x00]);
        mem.write(0x0010, 0xC3).unwrap();
        cpu.set_a(0x5A);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x5A);
    }
}
