//! Bitmask flag algebra.
//!
//! Engine code models option sets as bitmask enums — `bitflags!`-generated
//! types whose underlying integer bits each carry independent meaning. The
//! helpers here give that code a uniform set/clear/test call style without
//! manual casts to the underlying integer. None of them store anything;
//! flag values pass through as transient inputs and outputs.

pub use bitflags::{bitflags, Bits, Flags};

/// Returns `value` with every bit of `flag` raised.
///
/// Pure; OR can never leave the representable bit width, so there is no
/// failure mode.
#[inline]
pub fn set_flag<F: Flags>(value: F, flag: F) -> F {
    F::from_bits_retain(value.bits() | flag.bits())
}

/// Returns `value` with every bit of `flag` lowered.
#[inline]
pub fn clear_flag<F: Flags>(value: F, flag: F) -> F {
    F::from_bits_retain(value.bits() & !flag.bits())
}

/// True when `value` and `flag` share at least one bit.
///
/// This is an any-bit intersection, not an exact match: with a multi-bit
/// `flag` it reports true as soon as one of those bits is present. Callers
/// that need every bit present should use the flag type's `contains`
/// instead of this helper.
#[inline]
pub fn test_flag<F: Flags>(value: F, flag: F) -> bool {
    value.bits() & flag.bits() != F::Bits::EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;

    bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Probe: u8 {
            const A = 1;
            const B = 2;
            const C = 4;
        }
    }

    fn every_probe_value() -> impl Iterator<Item = Probe> {
        (0u8..=7).map(Probe::from_bits_retain)
    }

    #[test]
    fn three_bit_walkthrough() {
        let v = Probe::empty();
        let v = set_flag(v, Probe::A);
        assert_eq!(v.bits(), 1);

        let v = set_flag(v, Probe::C);
        assert_eq!(v.bits(), 5);

        assert!(!test_flag(v, Probe::B));
        assert!(test_flag(v, Probe::A));

        let v = clear_flag(v, Probe::A);
        assert_eq!(v.bits(), 4);
    }

    #[test]
    fn set_then_clear_matches_direct_clear() {
        for v in every_probe_value() {
            for f in every_probe_value() {
                assert_eq!(
                    clear_flag(set_flag(v, f), f),
                    clear_flag(v, f),
                    "v={v:?} f={f:?}"
                );
            }
        }
    }

    #[test]
    fn set_and_clear_are_idempotent() {
        for v in every_probe_value() {
            for f in every_probe_value() {
                assert_eq!(set_flag(set_flag(v, f), f), set_flag(v, f));
                assert_eq!(clear_flag(clear_flag(v, f), f), clear_flag(v, f));
            }
        }
    }

    #[test]
    fn test_reflects_set_and_clear() {
        for v in every_probe_value() {
            for f in every_probe_value() {
                if f.is_empty() {
                    continue;
                }
                assert!(test_flag(set_flag(v, f), f));
                assert!(!test_flag(clear_flag(set_flag(v, f), f), f));
            }
        }
    }

    #[test]
    fn test_flag_matches_any_set_bit() {
        let combined = Probe::A | Probe::B;
        let v = Probe::A;
        // One shared bit is enough, even though B is absent.
        assert!(test_flag(v, combined));
        // The all-bits question is answered by `contains`, not `test_flag`.
        assert!(!v.contains(combined));
    }
}
