//! Primitive bit operations over fixed-width unsigned integers
//!
//! The free functions work on [`Value`] (64 bits). [`BitMan`] provides the same operations for
//! every unsigned primitive from `u8` to `u128`. Out-of-range positions and oversized masks are
//! returned as [`BitError`] by every operation.
pub mod bitman;
pub mod error;

pub use bitman::BitMan;
pub use error::{BitError, BitResult};

pub type Value = u64;

/// Width of [`Value`] in bits
pub const WIDTH: u32 = Value::BITS;

/// Value with the lowest `size` bits set, `size` must not exceed [`WIDTH`]
#[inline]
pub fn bitmask(size: u32) -> BitResult<Value> {
    Value::bitmask(size)
}

#[inline]
pub fn get_bit(value: Value, position: u32) -> BitResult<bool> {
    value.get_bit(position)
}

#[inline]
pub fn set_bit(value: Value, position: u32) -> BitResult<Value> {
    value.set_bit(position)
}

#[inline]
pub fn clear_bit(value: Value, position: u32) -> BitResult<Value> {
    value.clear_bit(position)
}

#[inline]
pub fn toggle_bit(value: Value, position: u32) -> BitResult<Value> {
    value.toggle_bit(position)
}

/// Sets or clears the bit at `position` depending on `bit`
#[inline]
pub fn with_bit(value: Value, position: u32, bit: bool) -> BitResult<Value> {
    value.with_bit(position, bit)
}

pub mod prelude {
    pub use crate::bitman::BitMan;
    pub use crate::error::{BitError, BitResult};
    pub use crate::{bitmask, clear_bit, get_bit, set_bit, toggle_bit, with_bit, Value, WIDTH};
}
