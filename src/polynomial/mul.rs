// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use crate::term::Term;
use crate::traits::Coefficient;
use num_traits::{One, Zero};
use std::ops::{Mul, MulAssign};

/// Multiplies every pair of terms and sums the products.
///
/// # Panics
///
/// Panics if the sum of two multiplied exponents doesn't fit in a `usize`.
/// The other `Mul`/`MulAssign` impls forward here and panic the same way.
impl<'a, T: Coefficient> Mul for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let mut retval = Polynomial::zero();
        for l in self {
            for r in rhs {
                retval.insert_term(l * r);
            }
        }
        retval
    }
}

impl<'a, T: Coefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T: Coefficient> Mul<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: Coefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<'a, T: Coefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Coefficient> MulAssign<Term<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Term<T>) {
        *self *= Polynomial::from(rhs);
    }
}

impl<'a, T: Coefficient> MulAssign<&'a Term<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Term<T>) {
        *self *= Polynomial::from(rhs.clone());
    }
}

impl<T: Coefficient> Mul<Term<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(mut self, rhs: Term<T>) -> Polynomial<T> {
        self *= rhs;
        self
    }
}

impl<'a, T: Coefficient> Mul<&'a Term<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(mut self, rhs: &Term<T>) -> Polynomial<T> {
        self *= rhs;
        self
    }
}

impl<'a, T: Coefficient> Mul<Term<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Term<T>) -> Polynomial<T> {
        self * Polynomial::from(rhs)
    }
}

impl<'a, 'b, T: Coefficient> Mul<&'b Term<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Term<T>) -> Polynomial<T> {
        self * Polynomial::from(rhs.clone())
    }
}

impl<T: Coefficient> One for Polynomial<T> {
    fn one() -> Self {
        Polynomial::new(T::one(), 0)
    }
    #[inline]
    fn is_one(&self) -> bool {
        match &*self.terms {
            [term] => term.exponent() == 0 && term.coefficient().is_one(),
            _ => false,
        }
    }
}
