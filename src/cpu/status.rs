/*!
status.rs - Processor status register (packed flag byte).

Bit layout:

```text
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
```

  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (set at power-up; conventionally reads as 1)
  B = BREAK
  D = DECIMAL (tracked but never consulted by arithmetic; the modeled
      hardware ships with BCD disabled)
  I = INTERRUPT_DISABLE
  Z = ZERO
  C = CARRY

Branches and arithmetic consult individual flags; PHP/PLP move the whole
packed byte through the stack unmasked.
*/

use bitflags::bitflags;

bitflags! {
    /// Packed processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl Status {
    /// Reset pattern: interrupts disabled, unused bit set, everything else clear.
    #[inline]
    pub fn power_up() -> Self {
        Status::INTERRUPT_DISABLE | Status::UNUSED
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::power_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_up_pattern() {
        let s = Status::power_up();
        assert_eq!(s.bits(), 0b0010_0100);
        assert!(s.contains(Status::INTERRUPT_DISABLE));
        assert!(s.contains(Status::UNUSED));
        assert!(!s.contains(Status::CARRY));
    }

    #[test]
    fn set_and_clear_round_trip() {
        let mut s = Status::power_up();
        s.insert(Status::CARRY);
        assert!(s.contains(Status::CARRY));
        s.remove(Status::CARRY);
        assert!(!s.contains(Status::CARRY));
        s.set(Status::DECIMAL, true);
        assert!(s.contains(Status::DECIMAL));
        s.set(Status::DECIMAL, false);
        assert!(!s.contains(Status::DECIMAL));
    }

    #[test]
    fn raw_byte_round_trip() {
        let s = Status::from_bits_retain(0b1100_0011);
        assert!(s.contains(Status::NEGATIVE));
        assert!(s.contains(Status::OVERFLOW));
        assert!(s.contains(Status::ZERO));
        assert!(s.contains(Status::CARRY));
        assert_eq!(s.bits(), 0b1100_0011);
    }
}
