// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::Coefficient;
use crate::util::Sign;
use num_traits::Zero;
use std::fmt;
use std::ops::{Mul, Neg};

/// A single `coefficient * pow(x, exponent)` term of a [`Polynomial`](crate::polynomial::Polynomial).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
pub struct Term<T> {
    coefficient: T,
    exponent: usize,
}

impl<T> Term<T> {
    pub fn new(coefficient: T, exponent: usize) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }
    pub fn coefficient(&self) -> &T {
        &self.coefficient
    }
    pub fn exponent(&self) -> usize {
        self.exponent
    }
    pub fn into_coefficient(self) -> T {
        self.coefficient
    }
    pub fn set_coefficient(&mut self, coefficient: T) {
        self.coefficient = coefficient;
    }
    pub fn set_exponent(&mut self, exponent: usize) {
        self.exponent = exponent;
    }
    pub fn is_zero(&self) -> bool
    where
        T: Zero,
    {
        self.coefficient.is_zero()
    }
    /// writes the term without its sign; `sign` must be the sign of the coefficient
    pub(crate) fn fmt_unsigned(&self, sign: Sign, f: &mut fmt::Formatter) -> fmt::Result
    where
        T: Coefficient + fmt::Display,
    {
        let magnitude = sign.magnitude(self.coefficient.clone());
        if self.exponent == 0 || !magnitude.is_one() {
            write!(f, "{}", magnitude)?;
        }
        match self.exponent {
            0 => Ok(()),
            1 => write!(f, "x"),
            exponent => write!(f, "x^{}", exponent),
        }
    }
}

impl<T> From<(T, usize)> for Term<T> {
    fn from((coefficient, exponent): (T, usize)) -> Self {
        Self::new(coefficient, exponent)
    }
}

impl<T: Neg<Output = T>> Neg for Term<T> {
    type Output = Term<T>;
    fn neg(self) -> Term<T> {
        Term::new(-self.coefficient, self.exponent)
    }
}

impl<T: Neg<Output = T> + Clone> Neg for &'_ Term<T> {
    type Output = Term<T>;
    fn neg(self) -> Term<T> {
        -self.clone()
    }
}

fn product_exponent(lhs: usize, rhs: usize) -> usize {
    match lhs.checked_add(rhs) {
        Some(exponent) => exponent,
        None => panic!("exponent overflow: x^{} * x^{}", lhs, rhs),
    }
}

/// # Panics
///
/// Panics if the sum of the exponents doesn't fit in a `usize`.
impl<T: Mul<Output = T>> Mul for Term<T> {
    type Output = Term<T>;
    fn mul(self, rhs: Term<T>) -> Term<T> {
        Term::new(
            self.coefficient * rhs.coefficient,
            product_exponent(self.exponent, rhs.exponent),
        )
    }
}

/// # Panics
///
/// Panics if the sum of the exponents doesn't fit in a `usize`.
impl<'a, T: Mul<Output = T> + Clone> Mul for &'a Term<T> {
    type Output = Term<T>;
    fn mul(self, rhs: &'a Term<T>) -> Term<T> {
        Term::new(
            self.coefficient.clone() * rhs.coefficient.clone(),
            product_exponent(self.exponent, rhs.exponent),
        )
    }
}

impl<T: Coefficient + PartialOrd + fmt::Display> fmt::Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = Sign::new(&self.coefficient).unwrap_or_default();
        if sign == Sign::Negative {
            write!(f, "-")?;
        }
        self.fmt_unsigned(sign, f)
    }
}
