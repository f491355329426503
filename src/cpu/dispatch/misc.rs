/*!
misc.rs - Transfers, stack pushes/pulls, flag instructions, NOP.

The leftovers once every addressed family is carved out: all of these are
single-byte instructions. Transfers copy between registers (Z/N on the
destination, except TXS); PHA/PLA/PHP/PLP move the accumulator or raw
status byte through the stack; the flag instructions set or clear exactly
one bit; NOP consumes its byte and nothing else.
*/

use crate::Error;
use crate::cpu::execute::{pha, php, pla, plp, tax, tay, tsx, txa, txs, tya};
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    match op.mnemonic {
        Mnemonic::Tax => tax(cpu),
        Mnemonic::Tay => tay(cpu),
        Mnemonic::Txa => txa(cpu),
        Mnemonic::Tya => tya(cpu),
        Mnemonic::Tsx => tsx(cpu),
        Mnemonic::Txs => txs(cpu),

        Mnemonic::Pha => pha(cpu, mem)?,
        Mnemonic::Pla => pla(cpu, mem)?,
        Mnemonic::Php => php(cpu, mem)?,
        Mnemonic::Plp => plp(cpu, mem)?,

        Mnemonic::Sec => cpu.assign_flag(Status::CARRY, true),
        Mnemonic::Clc => cpu.assign_flag(Status::CARRY, false),
        Mnemonic::Sei => cpu.assign_flag(Status::INTERRUPT_DISABLE, true),
        Mnemonic::Cli => cpu.assign_flag(Status::INTERRUPT_DISABLE, false),
        Mnemonic::Sed => cpu.assign_flag(Status::DECIMAL, true),
        Mnemonic::Cld => cpu.assign_flag(Status::DECIMAL, false),
        Mnemonic::Clv => cpu.assign_flag(Status::OVERFLOW, false),

        Mnemonic::Nop => {}

        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::test_utils::{load_program, run_program};

    #[test]
    fn tax_copies_and_flags() {
        let (mut cpu, mut mem) = load_program(&[0xAA, 0x00]);
        cpu.set_a(0x80);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.x(), 0x80);
        assert!(cpu.status().contains(Status::NEGATIVE));
    }

    #[test]
    fn txs_moves_without_flags() {
        let (mut cpu, mut mem) = load_program(&[0x9A, 0x00]);
        cpu.set_x(0x00);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.sp(), 0x00);
        assert!(!cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn tsx_reads_stack_pointer() {
        let (mut cpu, mut mem) = load_program(&[0xBA, 0x00]);
        cpu.set_sp(0x00);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.x(), 0x00);
        assert!(cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn pha_pla_round_trip() {
        // LDA #$42; PHA; LDA #$00; PLA
        let (cpu, _mem) = run_program(&[0xA9, 0x42, 0x48, 0xA9, 0x00, 0x68, 0x00]);
        assert_eq!(cpu.a(), 0x42);
        assert!(!cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn php_plp_round_trip_raw_byte() {
        // SEC; SED; PHP; CLC; CLD; PLP restores both flags
        let (cpu, _mem) = run_program(&[0x38, 0xF8, 0x08, 0x18, 0xD8, 0x28, 0x00]);
        assert!(cpu.status().contains(Status::CARRY));
        assert!(cpu.status().contains(Status::DECIMAL));
    }

    #[test]
    fn flag_set_clear_pairs() {
        let (cpu, _mem) = run_program(&[0x38, 0x00]); // SEC
        assert!(cpu.status().contains(Status::CARRY));

        let (cpu, _mem) = run_program(&[0x38, 0x18, 0x00]); // SEC; CLC
        assert!(!cpu.status().contains(Status::CARRY));

        let (cpu, _mem) = run_program(&[0x78, 0x00]); // SEI
        assert!(cpu.status().contains(Status::INTERRUPT_DISABLE));

        let (cpu, _mem) = run_program(&[0x58, 0x00]); // CLI
        assert!(!cpu.status().contains(Status::INTERRUPT_DISABLE));

        let (cpu, _mem) = run_program(&[0xF8, 0x00]); // SED
        assert!(cpu.status().contains(Status::DECIMAL));

        let (cpu, _mem) = run_program(&[0xF8, 0xD8, 0x00]); // SED; CLD
        assert!(!cpu.status().contains(Status::DECIMAL));
    }

    #[test]
    fn clv_clears_overflow_from_adc() {
        // ADC #$7F with A=$7F sets V; CLV clears it
        let (mut cpu, mut mem) = load_program(&[0x69, 0x7F, 0xB8, 0x00]);
        cpu.set_a(0x7F);
        cpu.run(&mut mem).unwrap();
        assert!(!cpu.status().contains(Status::OVERFLOW));
    }

    #[test]
    fn nop_only_consumes_its_byte() {
        let (cpu, _mem) = run_program(&[0xEA, 0xEA, 0x00]);
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.status(), Status::power_up());
        assert_eq!(cpu.pc(), crate::test_utils::PROGRAM_START + 3);
    }

    #[test]
    fn decimal_flag_never_changes_arithmetic() {
        // SED; ADC #$15 with A=$27: plain binary add, no BCD correction.
        let (mut cpu, mut mem) = load_program(&[0xF8, 0x69, 0x15, 0x00]);
        cpu.set_a(0x27);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x3C); // a BCD unit would have produced 0x42
        assert!(cpu.status().contains(Status::DECIMAL));
    }
}
