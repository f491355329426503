/*!
rmw.rs - Shift / rotate / increment / decrement opcode family handler.

Shifts and rotates come in accumulator and memory forms, told apart by the
descriptor's addressing mode. The memory forms read-modify-write through
the resolver; INC/DEC are memory-only, INX/INY/DEX/DEY are their register
counterparts. All of them set Z/N from the new value.
*/

use crate::Error;
use crate::cpu::addressing::{Mode, operand_address};
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, dex, dey, inc_mem, inx, iny, lsr_acc, lsr_mem, rol_acc, rol_mem,
    ror_acc, ror_mem,
};
use crate::cpu::state::CpuState;
use crate::cpu::table::{Mnemonic, Opcode};
use crate::memory::Memory;

pub(super) fn handle(op: &Opcode, cpu: &mut CpuState, mem: &mut Memory) -> Result<bool, Error> {
    match op.mnemonic {
        Mnemonic::Asl => {
            if op.mode == Mode::Accumulator {
                asl_acc(cpu);
            } else {
                let addr = operand_address(op.mode, cpu, mem)?;
                asl_mem(cpu, mem, addr)?;
            }
        }
        Mnemonic::Lsr => {
            if op.mode == Mode::Accumulator {
                lsr_acc(cpu);
            } else {
                let addr = operand_address(op.mode, cpu, mem)?;
                lsr_mem(cpu, mem, addr)?;
            }
        }
        Mnemonic::Rol => {
            if op.mode == Mode::Accumulator {
                rol_acc(cpu);
            } else {
                let addr = operand_address(op.mode, cpu, mem)?;
                rol_mem(cpu, mem, addr)?;
            }
        }
        Mnemonic::Ror => {
            if op.mode == Mode::Accumulator {
                ror_acc(cpu);
            } else {
                let addr = operand_address(op.mode, cpu, mem)?;
                ror_mem(cpu, mem, addr)?;
            }
        }
        Mnemonic::Inc => {
            let addr = operand_address(op.mode, cpu, mem)?;
            inc_mem(cpu, mem, addr)?;
        }
        Mnemonic::Dec => {
            let addr = operand_address(op.mode, cpu, mem)?;
            dec_mem(cpu, mem, addr)?;
        }
        Mnemonic::Inx => inx(cpu),
        Mnemonic::Iny => iny(cpu),
        Mnemonic::Dex => dex(cpu),
        Mnemonic::Dey => dey(cpu),
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::test_utils::{load_program, run_program};

    #[test]
    fn asl_accumulator_and_memory() {
        let (mut cpu, mut mem) = load_program(&[0x0A, 0x00]); // ASL A
        cpu.set_a(0xC0);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.status().contains(Status::CARRY));
        assert!(cpu.status().contains(Status::NEGATIVE));

        let (mut cpu, mut mem) = load_program(&[0x06, 0x10, 0x00]); // ASL $10
        mem.write(0x0010, 0x40).unwrap();
        cpu.run(&mut mem).unwrap();
        assert_eq!(mem.read(0x0010), Ok(0x80));
        assert!(!cpu.status().contains(Status::CARRY));
    }

    #[test]
    fn lsr_shifts_into_carry() {
        let (mut cpu, mut mem) = load_program(&[0x4A, 0x00]); // LSR A
        cpu.set_a(0x03);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x01);
        assert!(cpu.status().contains(Status::CARRY));
    }

    #[test]
    fn rol_ror_use_previous_carry() {
        // SEC; ROL A: carry folds into bit 0
        let (mut cpu, mut mem) = load_program(&[0x38, 0x2A, 0x00]);
        cpu.set_a(0x40);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x81);
        assert!(!cpu.status().contains(Status::CARRY));

        // SEC; ROR $20: carry folds into bit 7
        let (mut cpu, mut mem) = load_program(&[0x38, 0x66, 0x20, 0x00]);
        mem.write(0x0020, 0x02).unwrap();
        cpu.run(&mut mem).unwrap();
        assert_eq!(mem.read(0x0020), Ok(0x81));
        assert!(!cpu.status().contains(Status::CARRY));
    }

    #[test]
    fn inc_dec_memory_wraparound() {
        let (mut cpu, mut mem) = load_program(&[0xE6, 0x10, 0x00]); // INC $10
        mem.write(0x0010, 0xFF).unwrap();
        cpu.run(&mut mem).unwrap();
        assert_eq!(mem.read(0x0010), Ok(0x00));
        assert!(cpu.status().contains(Status::ZERO));

        let (mut cpu, mut mem) = load_program(&[0xC6, 0x10, 0x00]); // DEC $10
        cpu.run(&mut mem).unwrap();
        assert_eq!(mem.read(0x0010), Ok(0xFF));
        assert!(cpu.status().contains(Status::NEGATIVE));
    }

    #[test]
    fn inc_dec_memory_do_not_touch_registers() {
        let (mut cpu, mut mem) = load_program(&[0xE6, 0x10, 0x00]);
        mem.write(0x0010, 0x07).unwrap();
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(0x33);
        cpu.run(&mut mem).unwrap();
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x11, 0x22, 0x33));
    }

    #[test]
    fn inx_three_times() {
        let (cpu, _mem) = run_program(&[0xE8, 0xE8, 0xE8, 0x00]);
        assert_eq!(cpu.x(), 3);
        assert_eq!(cpu.status(), Status::power_up());
    }

    #[test]
    fn inx_wraps_to_zero() {
        let (mut cpu, mut mem) = load_program(&[0xE8, 0x00]);
        cpu.set_x(0xFF);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.x(), 0x00);
        assert!(cpu.status().contains(Status::ZERO));
    }

    #[test]
    fn dey_from_zero_wraps_negative() {
        let (mut cpu, mut mem) = load_program(&[0x88, 0x00]);
        cpu.run(&mut mem).unwrap();
        assert_eq!(cpu.y(), 0xFF);
        assert!(cpu.status().contains(Status::NEGATIVE));
    }
}
