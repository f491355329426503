/*!
table.rs - Static opcode descriptor table.

One immutable descriptor per legally defined opcode byte: mnemonic,
instruction length in bytes, base cycle count, and addressing mode. The
table is a 256-entry array built in a const block, so lookup is a single
index; unassigned opcode bytes are `None` and halt the engine when
fetched.

Base cycle counts are the documented per-opcode figures. Conditional
extras (taken branches, page crossings) are not modeled, which is why a
descriptor carries a single number.
*/

use crate::cpu::addressing::Mode;

/// Instruction mnemonics of the documented 6502 instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
}

/// Immutable opcode descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub code: u8,
    pub mnemonic: Mnemonic,
    /// Total instruction length in bytes, opcode included.
    pub len: u8,
    /// Base cycle count (no conditional extras).
    pub cycles: u8,
    pub mode: Mode,
}

const fn op(code: u8, mnemonic: Mnemonic, len: u8, cycles: u8, mode: Mode) -> Option<Opcode> {
    Some(Opcode {
        code,
        mnemonic,
        len,
        cycles,
        mode,
    })
}

/// Look up the descriptor for an opcode byte.
#[inline]
pub fn lookup(code: u8) -> Option<&'static Opcode> {
    OPCODE_TABLE[code as usize].as_ref()
}

/// Descriptors for all 151 documented opcodes, indexed by opcode byte.
pub static OPCODE_TABLE: [Option<Opcode>; 256] = {
    use Mnemonic::*;
    let mut t: [Option<Opcode>; 256] = [None; 256];

    // ADC
    t[0x69] = op(0x69, Adc, 2, 2, Mode::Immediate);
    t[0x65] = op(0x65, Adc, 2, 3, Mode::ZeroPage);
    t[0x75] = op(0x75, Adc, 2, 4, Mode::ZeroPageX);
    t[0x6D] = op(0x6D, Adc, 3, 4, Mode::Absolute);
    t[0x7D] = op(0x7D, Adc, 3, 4, Mode::AbsoluteX);
    t[0x79] = op(0x79, Adc, 3, 4, Mode::AbsoluteY);
    t[0x61] = op(0x61, Adc, 2, 6, Mode::IndirectX);
    t[0x71] = op(0x71, Adc, 2, 5, Mode::IndirectY);

    // AND
    t[0x29] = op(0x29, And, 2, 2, Mode::Immediate);
    t[0x25] = op(0x25, And, 2, 3, Mode::ZeroPage);
    t[0x35] = op(0x35, And, 2, 4, Mode::ZeroPageX);
    t[0x2D] = op(0x2D, And, 3, 4, Mode::Absolute);
    t[0x3D] = op(0x3D, And, 3, 4, Mode::AbsoluteX);
    t[0x39] = op(0x39, And, 3, 4, Mode::AbsoluteY);
    t[0x21] = op(0x21, And, 2, 6, Mode::IndirectX);
    t[0x31] = op(0x31, And, 2, 5, Mode::IndirectY);

    // ASL
    t[0x0A] = op(0x0A, Asl, 1, 2, Mode::Accumulator);
    t[0x06] = op(0x06, Asl, 2, 5, Mode::ZeroPage);
    t[0x16] = op(0x16, Asl, 2, 6, Mode::ZeroPageX);
    t[0x0E] = op(0x0E, Asl, 3, 6, Mode::Absolute);
    t[0x1E] = op(0x1E, Asl, 3, 7, Mode::AbsoluteX);

    // Branches
    t[0x90] = op(0x90, Bcc, 2, 2, Mode::Relative);
    t[0xB0] = op(0xB0, Bcs, 2, 2, Mode::Relative);
    t[0xF0] = op(0xF0, Beq, 2, 2, Mode::Relative);
    t[0x30] = op(0x30, Bmi, 2, 2, Mode::Relative);
    t[0xD0] = op(0xD0, Bne, 2, 2, Mode::Relative);
    t[0x10] = op(0x10, Bpl, 2, 2, Mode::Relative);
    t[0x50] = op(0x50, Bvc, 2, 2, Mode::Relative);
    t[0x70] = op(0x70, Bvs, 2, 2, Mode::Relative);

    // BIT
    t[0x24] = op(0x24, Bit, 2, 3, Mode::ZeroPage);
    t[0x2C] = op(0x2C, Bit, 3, 4, Mode::Absolute);

    // BRK
    t[0x00] = op(0x00, Brk, 1, 7, Mode::Implied);

    // Flag clears
    t[0x18] = op(0x18, Clc, 1, 2, Mode::Implied);
    t[0xD8] = op(0xD8, Cld, 1, 2, Mode::Implied);
    t[0x58] = op(0x58, Cli, 1, 2, Mode::Implied);
    t[0xB8] = op(0xB8, Clv, 1, 2, Mode::Implied);

    // CMP
    t[0xC9] = op(0xC9, Cmp, 2, 2, Mode::Immediate);
    t[0xC5] = op(0xC5, Cmp, 2, 3, Mode::ZeroPage);
    t[0xD5] = op(0xD5, Cmp, 2, 4, Mode::ZeroPageX);
    t[0xCD] = op(0xCD, Cmp, 3, 4, Mode::Absolute);
    t[0xDD] = op(0xDD, Cmp, 3, 4, Mode::AbsoluteX);
    t[0xD9] = op(0xD9, Cmp, 3, 4, Mode::AbsoluteY);
    t[0xC1] = op(0xC1, Cmp, 2, 6, Mode::IndirectX);
    t[0xD1] = op(0xD1, Cmp, 2, 5, Mode::IndirectY);

    // CPX / CPY
    t[0xE0] = op(0xE0, Cpx, 2, 2, Mode::Immediate);
    t[0xE4] = op(0xE4, Cpx, 2, 3, Mode::ZeroPage);
    t[0xEC] = op(0xEC, Cpx, 3, 4, Mode::Absolute);
    t[0xC0] = op(0xC0, Cpy, 2, 2, Mode::Immediate);
    t[0xC4] = op(0xC4, Cpy, 2, 3, Mode::ZeroPage);
    t[0xCC] = op(0xCC, Cpy, 3, 4, Mode::Absolute);

    // DEC
    t[0xC6] = op(0xC6, Dec, 2, 5, Mode::ZeroPage);
    t[0xD6] = op(0xD6, Dec, 2, 6, Mode::ZeroPageX);
    t[0xCE] = op(0xCE, Dec, 3, 6, Mode::Absolute);
    t[0xDE] = op(0xDE, Dec, 3, 7, Mode::AbsoluteX);

    t[0xCA] = op(0xCA, Dex, 1, 2, Mode::Implied);
    t[0x88] = op(0x88, Dey, 1, 2, Mode::Implied);

    // EOR
    t[0x49] = op(0x49, Eor, 2, 2, Mode::Immediate);
    t[0x45] = op(0x45, Eor, 2, 3, Mode::ZeroPage);
    t[0x55] = op(0x55, Eor, 2, 4, Mode::ZeroPageX);
    t[0x4D] = op(0x4D, Eor, 3, 4, Mode::Absolute);
    t[0x5D] = op(0x5D, Eor, 3, 4, Mode::AbsoluteX);
    t[0x59] = op(0x59, Eor, 3, 4, Mode::AbsoluteY);
    t[0x41] = op(0x41, Eor, 2, 6, Mode::IndirectX);
    t[0x51] = op(0x51, Eor, 2, 5, Mode::IndirectY);

    // INC
    t[0xE6] = op(0xE6, Inc, 2, 5, Mode::ZeroPage);
    t[0xF6] = op(0xF6, Inc, 2, 6, Mode::ZeroPageX);
    t[0xEE] = op(0xEE, Inc, 3, 6, Mode::Absolute);
    t[0xFE] = op(0xFE, Inc, 3, 7, Mode::AbsoluteX);

    t[0xE8] = op(0xE8, Inx, 1, 2, Mode::Implied);
    t[0xC8] = op(0xC8, Iny, 1, 2, Mode::Implied);

    // JMP / JSR
    t[0x4C] = op(0x4C, Jmp, 3, 3, Mode::Absolute);
    t[0x6C] = op(0x6C, Jmp, 3, 5, Mode::Indirect);
    t[0x20] = op(0x20, Jsr, 3, 6, Mode::Absolute);

    // LDA
    t[0xA9] = op(0xA9, Lda, 2, 2, Mode::Immediate);
    t[0xA5] = op(0xA5, Lda, 2, 3, Mode::ZeroPage);
    t[0xB5] = op(0xB5, Lda, 2, 4, Mode::ZeroPageX);
    t[0xAD] = op(0xAD, Lda, 3, 4, Mode::Absolute);
    t[0xBD] = op(0xBD, Lda, 3, 4, Mode::AbsoluteX);
    t[0xB9] = op(0xB9, Lda, 3, 4, Mode::AbsoluteY);
    t[0xA1] = op(0xA1, Lda, 2, 6, Mode::IndirectX);
    t[0xB1] = op(0xB1, Lda, 2, 5, Mode::IndirectY);

    // LDX
    t[0xA2] = op(0xA2, Ldx, 2, 2, Mode::Immediate);
    t[0xA6] = op(0xA6, Ldx, 2, 3, Mode::ZeroPage);
    t[0xB6] = op(0xB6, Ldx, 2, 4, Mode::ZeroPageY);
    t[0xAE] = op(0xAE, Ldx, 3, 4, Mode::Absolute);
    t[0xBE] = op(0xBE, Ldx, 3, 4, Mode::AbsoluteY);

    // LDY
    t[0xA0] = op(0xA0, Ldy, 2, 2, Mode::Immediate);
    t[0xA4] = op(0xA4, Ldy, 2, 3, Mode::ZeroPage);
    t[0xB4] = op(0xB4, Ldy, 2, 4, Mode::ZeroPageX);
    t[0xAC] = op(0xAC, Ldy, 3, 4, Mode::Absolute);
    t[0xBC] = op(0xBC, Ldy, 3, 4, Mode::AbsoluteX);

    // LSR
    t[0x4A] = op(0x4A, Lsr, 1, 2, Mode::Accumulator);
    t[0x46] = op(0x46, Lsr, 2, 5, Mode::ZeroPage);
    t[0x56] = op(0x56, Lsr, 2, 6, Mode::ZeroPageX);
    t[0x4E] = op(0x4E, Lsr, 3, 6, Mode::Absolute);
    t[0x5E] = op(0x5E, Lsr, 3, 7, Mode::AbsoluteX);

    // NOP
    t[0xEA] = op(0xEA, Nop, 1, 2, Mode::Implied);

    // ORA
    t[0x09] = op(0x09, Ora, 2, 2, Mode::Immediate);
    t[0x05] = op(0x05, Ora, 2, 3, Mode::ZeroPage);
    t[0x15] = op(0x15, Ora, 2, 4, Mode::ZeroPageX);
    t[0x0D] = op(0x0D, Ora, 3, 4, Mode::Absolute);
    t[0x1D] = op(0x1D, Ora, 3, 4, Mode::AbsoluteX);
    t[0x19] = op(0x19, Ora, 3, 4, Mode::AbsoluteY);
    t[0x01] = op(0x01, Ora, 2, 6, Mode::IndirectX);
    t[0x11] = op(0x11, Ora, 2, 5, Mode::IndirectY);

    // Stack ops
    t[0x48] = op(0x48, Pha, 1, 3, Mode::Implied);
    t[0x08] = op(0x08, Php, 1, 3, Mode::Implied);
    t[0x68] = op(0x68, Pla, 1, 4, Mode::Implied);
    t[0x28] = op(0x28, Plp, 1, 4, Mode::Implied);

    // ROL
    t[0x2A] = op(0x2A, Rol, 1, 2, Mode::Accumulator);
    t[0x26] = op(0x26, Rol, 2, 5, Mode::ZeroPage);
    t[0x36] = op(0x36, Rol, 2, 6, Mode::ZeroPageX);
    t[0x2E] = op(0x2E, Rol, 3, 6, Mode::Absolute);
    t[0x3E] = op(0x3E, Rol, 3, 7, Mode::AbsoluteX);

    // ROR
    t[0x6A] = op(0x6A, Ror, 1, 2, Mode::Accumulator);
    t[0x66] = op(0x66, Ror, 2, 5, Mode::ZeroPage);
    t[0x76] = op(0x76, Ror, 2, 6, Mode::ZeroPageX);
    t[0x6E] = op(0x6E, Ror, 3, 6, Mode::Absolute);
    t[0x7E] = op(0x7E, Ror, 3, 7, Mode::AbsoluteX);

    // Returns
    t[0x40] = op(0x40, Rti, 1, 6, Mode::Implied);
    t[0x60] = op(0x60, Rts, 1, 6, Mode::Implied);

    // SBC
    t[0xE9] = op(0xE9, Sbc, 2, 2, Mode::Immediate);
    t[0xE5] = op(0xE5, Sbc, 2, 3, Mode::ZeroPage);
    t[0xF5] = op(0xF5, Sbc, 2, 4, Mode::ZeroPageX);
    t[0xED] = op(0xED, Sbc, 3, 4, Mode::Absolute);
    t[0xFD] = op(0xFD, Sbc, 3, 4, Mode::AbsoluteX);
    t[0xF9] = op(0xF9, Sbc, 3, 4, Mode::AbsoluteY);
    t[0xE1] = op(0xE1, Sbc, 2, 6, Mode::IndirectX);
    t[0xF1] = op(0xF1, Sbc, 2, 5, Mode::IndirectY);

    // Flag sets
    t[0x38] = op(0x38, Sec, 1, 2, Mode::Implied);
    t[0xF8] = op(0xF8, Sed, 1, 2, Mode::Implied);
    t[0x78] = op(0x78, Sei, 1, 2, Mode::Implied);

    // STA
    t[0x85] = op(0x85, Sta, 2, 3, Mode::ZeroPage);
    t[0x95] = op(0x95, Sta, 2, 4, Mode::ZeroPageX);
    t[0x8D] = op(0x8D, Sta, 3, 4, Mode::Absolute);
    t[0x9D] = op(0x9D, Sta, 3, 5, Mode::AbsoluteX);
    t[0x99] = op(0x99, Sta, 3, 5, Mode::AbsoluteY);
    t[0x81] = op(0x81, Sta, 2, 6, Mode::IndirectX);
    t[0x91] = op(0x91, Sta, 2, 6, Mode::IndirectY);

    // STX / STY
    t[0x86] = op(0x86, Stx, 2, 3, Mode::ZeroPage);
    t[0x96] = op(0x96, Stx, 2, 4, Mode::ZeroPageY);
    t[0x8E] = op(0x8E, Stx, 3, 4, Mode::Absolute);
    t[0x84] = op(0x84, Sty, 2, 3, Mode::ZeroPage);
    t[0x94] = op(0x94, Sty, 2, 4, Mode::ZeroPageX);
    t[0x8C] = op(0x8C, Sty, 3, 4, Mode::Absolute);

    // Transfers
    t[0xAA] = op(0xAA, Tax, 1, 2, Mode::Implied);
    t[0xA8] = op(0xA8, Tay, 1, 2, Mode::Implied);
    t[0xBA] = op(0xBA, Tsx, 1, 2, Mode::Implied);
    t[0x8A] = op(0x8A, Txa, 1, 2, Mode::Implied);
    t[0x9A] = op(0x9A, Txs, 1, 2, Mode::Implied);
    t[0x98] = op(0x98, Tya, 1, 2, Mode::Implied);

    t
};
