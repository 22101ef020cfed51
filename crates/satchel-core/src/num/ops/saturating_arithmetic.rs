// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::ops::Add;

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

/// Saturating addition by value.
///
/// Search statistics are plain unsigned counters that are bumped once per
/// node. On pathological instances those counters can run for a very long
/// time, so they clamp at the numeric bound of the type instead of wrapping.
///
/// # Examples
///
/// ```rust
/// # use satchel_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let nodes: u64 = u64::MAX - 1;
/// assert_eq!(nodes.saturating_add_val(5), u64::MAX);
///
/// let depth: usize = 3;
/// assert_eq!(depth.saturating_add_val(1), 4);
///
/// let x: i8 = 120;
/// assert_eq!(x.saturating_add_val(10), 127);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(
    SaturatingAddVal,
    saturating_add_val,
    saturating_add,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_add_val_unsigned_clamps_at_max() {
        assert_eq!(u8::MAX.saturating_add_val(1), u8::MAX);
        assert_eq!(u64::MAX.saturating_add_val(u64::MAX), u64::MAX);
        assert_eq!(250u8.saturating_add_val(5), 255);
    }

    #[test]
    fn test_saturating_add_val_signed_clamps_both_ends() {
        assert_eq!(120i8.saturating_add_val(10), i8::MAX);
        assert_eq!((-120i8).saturating_add_val(-20), i8::MIN);
        assert_eq!((-5i64).saturating_add_val(7), 2);
    }

    #[test]
    fn test_saturating_add_val_matches_plain_add_in_range() {
        for a in 0u32..50 {
            for b in 0u32..50 {
                assert_eq!(a.saturating_add_val(b), a + b);
            }
        }
    }
}
