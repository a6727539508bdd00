use crate::error::{BitError, BitResult};
use log::trace;

/// Bit primitives for fixed-width unsigned integers
///
/// The width of every call is `Self::BITS`. Positions at or above the width and mask sizes
/// above it are rejected with [`BitError`], never wrapped or truncated.
pub trait BitMan: Sized + Copy {
    /// A value with the lowest `size` bits set
    fn bitmask(size: u32) -> BitResult<Self>;
    fn get_bit(self, bit: u32) -> BitResult<bool>;
    fn set_bit(self, bit: u32) -> BitResult<Self>;
    fn clear_bit(self, bit: u32) -> BitResult<Self>;
    fn toggle_bit(self, bit: u32) -> BitResult<Self>;
    /// Sets the bit if `value` is true, clears it otherwise
    #[inline]
    fn with_bit(self, bit: u32, value: bool) -> BitResult<Self> {
        if value {
            self.set_bit(bit)
        } else {
            self.clear_bit(bit)
        }
    }
}

#[inline]
fn check_bit(op: &str, bit: u32, width: u32) -> BitResult<()> {
    if bit < width {
        Ok(())
    } else {
        trace!("{}: bit {} rejected, width {}", op, bit, width);
        Err(BitError::out_of_range(bit, width))
    }
}

macro_rules! impl_bitman {
    (for $($tp:ident),+) => {
        $(impl BitMan for $tp {
            fn bitmask(size: u32) -> BitResult<Self> {
                match size {
                    s if s < $tp::BITS => Ok(((1 as $tp) << s) - 1),
                    s if s == $tp::BITS => Ok($tp::MAX),
                    s => {
                        trace!("bitmask: size {} rejected, width {}", s, $tp::BITS);
                        Err(BitError::invalid_size(s, $tp::BITS))
                    }
                }
            }
            #[inline]
            fn get_bit(self, bit: u32) -> BitResult<bool> {
                check_bit("get_bit", bit, $tp::BITS)?;
                Ok(self >> bit & 1 != 0)
            }
            #[inline]
            fn set_bit(self, bit: u32) -> BitResult<Self> {
                check_bit("set_bit", bit, $tp::BITS)?;
                Ok(self | 1 << bit)
            }
            #[inline]
            fn clear_bit(self, bit: u32) -> BitResult<Self> {
                check_bit("clear_bit", bit, $tp::BITS)?;
                Ok(self & !(1 << bit))
            }
            #[inline]
            fn toggle_bit(self, bit: u32) -> BitResult<Self> {
                check_bit("toggle_bit", bit, $tp::BITS)?;
                Ok(self ^ 1 << bit)
            }
        })+
    };
}
impl_bitman!(for u8, u16, u32, u64, u128);
