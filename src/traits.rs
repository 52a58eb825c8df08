// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg};

/// The numeric capabilities required of a polynomial coefficient.
///
/// Automatically implemented for every type with the required operations,
/// e.g. the primitive signed integers, floats, `Ratio<_>` and `BigInt`.
pub trait Coefficient:
    Clone
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + AddAssign
    + Neg<Output = Self>
    + Mul<Output = Self>
    + MulAssign
{
}

impl<T> Coefficient for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + AddAssign
        + Neg<Output = T>
        + Mul<Output = T>
        + MulAssign
{
}

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}
