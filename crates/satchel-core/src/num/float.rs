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

//! # Solver Float Trait
//!
//! Unified numeric bounds for item values, item weights and capacities.
//! Callers hand the solver whatever float width their data comes in
//! (`f32` for compact inputs, `f64` otherwise); the search itself always
//! accumulates in `f64` so that long item lists do not lose precision when
//! the input is single precision.
//!
//! ## Highlights
//!
//! - Requires `num_traits::Float` for the usual IEEE operations and
//!   classification (`is_finite`, `is_sign_negative`, ...).
//! - Requires `AsPrimitive<f64>` for the lossless widening into the search
//!   accumulator; see [`SolverFloat::widen`].
//! - Requires `FromStr` so loaders can parse tokens directly into `T`.
//! - `Send + Sync + 'static` so independent solves can run on worker threads.

use num_traits::{AsPrimitive, Float};
use std::str::FromStr;

/// A trait alias for the floating point types accepted as item values,
/// weights and capacities. In practice this is `f32` and `f64`.
pub trait SolverFloat:
    Float
    + AsPrimitive<f64>
    + FromStr
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Widens the value into the `f64` accumulator used by the search.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use satchel_core::num::float::SolverFloat;
    ///
    /// assert_eq!(1.5f32.widen(), 1.5f64);
    /// assert_eq!(2.25f64.widen(), 2.25f64);
    /// ```
    #[inline(always)]
    fn widen(self) -> f64 {
        self.as_()
    }
}

impl<T> SolverFloat for T where
    T: Float
        + AsPrimitive<f64>
        + FromStr
        + Default
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widen_generic<T: SolverFloat>(value: T) -> f64 {
        value.widen()
    }

    #[test]
    fn test_widen_is_exact_for_f32() {
        let samples = [0.0f32, 1.0, 0.1, 1e-30, 3.4e38, -7.25];
        for &s in &samples {
            assert_eq!(widen_generic(s), s as f64);
        }
    }

    #[test]
    fn test_widen_is_identity_for_f64() {
        let samples = [0.0f64, 0.1, 1e300, f64::INFINITY];
        for &s in &samples {
            assert_eq!(widen_generic(s), s);
        }
    }

    #[test]
    fn test_widen_preserves_nan() {
        assert!(widen_generic(f32::NAN).is_nan());
    }
}
