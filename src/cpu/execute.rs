/*!
execute.rs - Instruction semantic helpers (ALU, flags, transfers, RMW).

Centralizes the side-effect logic of the instruction set so the dispatch
family handlers stay declarative: each handler resolves an operand and
calls one of these helpers. Pure register/flag helpers take only the CPU
state; memory read-modify-write helpers also take the memory image and are
fallible because every bus access is.

Carry capture order matters for shifts and rotates: the outgoing bit is
latched from the OLD value before the shift, and rotates fold the carry
that was live BEFORE the operation into the vacated bit.
*/

use crate::Error;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;
use crate::memory::Memory;

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda(cpu: &mut CpuState, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx(cpu: &mut CpuState, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy(cpu: &mut CpuState, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax(cpu: &mut CpuState) {
    cpu.set_x(cpu.a());
    cpu.update_zn(cpu.x());
}

#[inline]
pub(crate) fn tay(cpu: &mut CpuState) {
    cpu.set_y(cpu.a());
    cpu.update_zn(cpu.y());
}

#[inline]
pub(crate) fn txa(cpu: &mut CpuState) {
    cpu.set_a(cpu.x());
    cpu.update_zn(cpu.a());
}

#[inline]
pub(crate) fn tya(cpu: &mut CpuState) {
    cpu.set_a(cpu.y());
    cpu.update_zn(cpu.a());
}

#[inline]
pub(crate) fn tsx(cpu: &mut CpuState) {
    cpu.set_x(cpu.sp());
    cpu.update_zn(cpu.x());
}

/// TXS is the one transfer that touches no flags.
#[inline]
pub(crate) fn txs(cpu: &mut CpuState) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() & v);
    cpu.update_zn(cpu.a());
}

#[inline]
pub(crate) fn ora(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() | v);
    cpu.update_zn(cpu.a());
}

#[inline]
pub(crate) fn eor(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() ^ v);
    cpu.update_zn(cpu.a());
}

/// BIT: Z from A & M; N and V copied straight from bits 7 and 6 of the
/// memory operand, not computed from the AND.
#[inline]
pub(crate) fn bit(cpu: &mut CpuState, v: u8) {
    cpu.assign_flag(Status::ZERO, (cpu.a() & v) == 0);
    cpu.assign_flag(Status::NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(Status::OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx(cpu: &mut CpuState) {
    cpu.set_x(cpu.x().wrapping_add(1));
    cpu.update_zn(cpu.x());
}

#[inline]
pub(crate) fn iny(cpu: &mut CpuState) {
    cpu.set_y(cpu.y().wrapping_add(1));
    cpu.update_zn(cpu.y());
}

#[inline]
pub(crate) fn dex(cpu: &mut CpuState) {
    cpu.set_x(cpu.x().wrapping_sub(1));
    cpu.update_zn(cpu.x());
}

#[inline]
pub(crate) fn dey(cpu: &mut CpuState) {
    cpu.set_y(cpu.y().wrapping_sub(1));
    cpu.update_zn(cpu.y());
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

/// Add `v` plus carry-in to the accumulator.
///
/// Carry is recomputed every time (set iff the 9-bit sum exceeds 0xFF).
/// Overflow uses the signed test: set iff both addends share a sign and
/// the truncated result's sign differs: `(r ^ a) & (r ^ v) & 0x80`.
#[inline]
pub(crate) fn adc(cpu: &mut CpuState, v: u8) {
    let a = cpu.a();
    let carry_in = if cpu.is_flag_set(Status::CARRY) { 1u16 } else { 0 };
    let sum = a as u16 + v as u16 + carry_in;
    let result = sum as u8;

    cpu.update_carry(sum > 0xFF);
    cpu.update_overflow(((result ^ a) & (result ^ v) & 0x80) != 0);

    cpu.set_a(result);
    cpu.update_zn(result);
}

/// SBC reuses the ADC math against the memory operand's two's complement,
/// with carry and overflow computed against that complemented operand.
#[inline]
pub(crate) fn sbc(cpu: &mut CpuState, v: u8) {
    adc(cpu, v.wrapping_neg());
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// Shared CMP/CPX/CPY core: flags from `reg - v`, register untouched.
#[inline]
pub(crate) fn compare(cpu: &mut CpuState, reg: u8, v: u8) {
    cpu.update_carry(reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Shifts / Rotates - Accumulator
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    cpu.update_carry((v & 0x80) != 0);
    cpu.set_a(v << 1);
    cpu.update_zn(cpu.a());
}

#[inline]
pub(crate) fn lsr_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    cpu.update_carry((v & 0x01) != 0);
    cpu.set_a(v >> 1);
    cpu.update_zn(cpu.a());
}

#[inline]
pub(crate) fn rol_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    let carry_in = if cpu.is_flag_set(Status::CARRY) { 1 } else { 0 };
    cpu.update_carry((v & 0x80) != 0);
    cpu.set_a((v << 1) | carry_in);
    cpu.update_zn(cpu.a());
}

#[inline]
pub(crate) fn ror_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    let carry_in = if cpu.is_flag_set(Status::CARRY) { 0x80 } else { 0 };
    cpu.update_carry((v & 0x01) != 0);
    cpu.set_a((v >> 1) | carry_in);
    cpu.update_zn(cpu.a());
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory)
// ---------------------------------------------------------------------------

/// Canonical RMW sequence: read, transform, write back, Z/N from the new
/// value. Returns the written value for the few callers that inspect it.
fn rmw_memory<F>(cpu: &mut CpuState, mem: &mut Memory, addr: u16, transform: F) -> Result<u8, Error>
where
    F: FnOnce(&mut CpuState, u8) -> u8,
{
    let old = mem.read(addr)?;
    let new = transform(cpu, old);
    mem.write(addr, new)?;
    cpu.update_zn(new);
    Ok(new)
}

#[inline]
pub(crate) fn asl_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) -> Result<(), Error> {
    rmw_memory(cpu, mem, addr, |c, old| {
        c.update_carry((old & 0x80) != 0);
        old << 1
    })?;
    Ok(())
}

#[inline]
pub(crate) fn lsr_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) -> Result<(), Error> {
    rmw_memory(cpu, mem, addr, |c, old| {
        c.update_carry((old & 0x01) != 0);
        old >> 1
    })?;
    Ok(())
}

#[inline]
pub(crate) fn rol_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) -> Result<(), Error> {
    rmw_memory(cpu, mem, addr, |c, old| {
        let carry_in = if c.is_flag_set(Status::CARRY) { 1 } else { 0 };
        c.update_carry((old & 0x80) != 0);
        (old << 1) | carry_in
    })?;
    Ok(())
}

#[inline]
pub(crate) fn ror_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) -> Result<(), Error> {
    rmw_memory(cpu, mem, addr, |c, old| {
        let carry_in = if c.is_flag_set(Status::CARRY) { 0x80 } else { 0 };
        c.update_carry((old & 0x01) != 0);
        (old >> 1) | carry_in
    })?;
    Ok(())
}

#[inline]
pub(crate) fn inc_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) -> Result<(), Error> {
    rmw_memory(cpu, mem, addr, |_, old| old.wrapping_add(1))?;
    Ok(())
}

#[inline]
pub(crate) fn dec_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) -> Result<(), Error> {
    rmw_memory(cpu, mem, addr, |_, old| old.wrapping_sub(1))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Stack instruction bodies
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn pha(cpu: &mut CpuState, mem: &mut Memory) -> Result<(), Error> {
    let a = cpu.a();
    cpu.push(mem, a)
}

#[inline]
pub(crate) fn pla(cpu: &mut CpuState, mem: &Memory) -> Result<(), Error> {
    let v = cpu.pop(mem)?;
    cpu.set_a(v);
    cpu.update_zn(v);
    Ok(())
}

#[inline]
pub(crate) fn php(cpu: &mut CpuState, mem: &mut Memory) -> Result<(), Error> {
    let bits = cpu.status().bits();
    cpu.push(mem, bits)
}

/// PLP installs the pulled byte verbatim; BRK/IRQ break-bit choreography
/// is out of scope for this core.
#[inline]
pub(crate) fn plp(cpu: &mut CpuState, mem: &Memory) -> Result<(), Error> {
    let bits = cpu.pop(mem)?;
    cpu.set_status(Status::from_bits_retain(bits));
    Ok(())
}
