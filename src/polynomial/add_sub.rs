// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use crate::term::Term;
use crate::traits::Coefficient;
use num_traits::Zero;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl<T: Coefficient> AddAssign<Term<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: Term<T>) {
        self.insert_term(rhs);
    }
}

impl<'a, T: Coefficient> AddAssign<&'a Term<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &'a Term<T>) {
        self.insert_term(rhs.clone());
    }
}

impl<T: Coefficient> SubAssign<Term<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Term<T>) {
        self.insert_term(-rhs);
    }
}

impl<'a, T: Coefficient> SubAssign<&'a Term<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &'a Term<T>) {
        self.insert_term(-rhs);
    }
}

impl<T: Coefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        for term in rhs {
            *self += term;
        }
    }
}

impl<'a, T: Coefficient> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &'a Polynomial<T>) {
        for term in rhs {
            *self += term;
        }
    }
}

impl<T: Coefficient> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        for term in rhs {
            *self -= term;
        }
    }
}

impl<'a, T: Coefficient> SubAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &'a Polynomial<T>) {
        for term in rhs {
            *self -= term;
        }
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: &'a Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Polynomial<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs += rhs;
        lhs
    }
}

impl<'a, T: Coefficient> Add for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut lhs = self.clone();
        lhs += rhs;
        lhs
    }
}

impl<T: Coefficient> Add<Term<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: Term<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<&'a Term<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: &'a Term<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<Term<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Term<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs += rhs;
        lhs
    }
}

impl<'a, 'b, T: Coefficient> Add<&'b Term<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: &'b Term<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs += rhs;
        lhs
    }
}

impl<T: Coefficient> Zero for Polynomial<T> {
    fn zero() -> Self {
        Default::default()
    }
    fn set_zero(&mut self) {
        self.terms.clear()
    }
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: &'a Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<'a, T: Coefficient> Sub for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<T: Coefficient> Sub<Term<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: Term<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<&'a Term<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: &'a Term<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: Coefficient> Sub<Term<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Term<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<'a, 'b, T: Coefficient> Sub<&'b Term<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: &'b Term<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

// negating every coefficient keeps the terms sorted and non-zero
impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        Polynomial {
            terms: self.terms.into_iter().map(Neg::neg).collect(),
        }
    }
}

impl<T: Coefficient> Neg for &'_ Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        Polynomial {
            terms: self.terms.iter().map(Neg::neg).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::{assert_canonical, random_polynomial, test_op_helper};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn make_poly(terms: &[(i32, usize)]) -> Polynomial<i32> {
        terms.iter().map(|&term| Term::from(term)).collect()
    }

    #[test]
    fn test_add() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(
            make_poly(&[(3, 2), (5, 0)]),
            make_poly(&[(2, 1)]),
            &make_poly(&[(3, 2), (2, 1), (5, 0)]),
        );
        test(
            make_poly(&[(1, 4), (2, 3), (3, 2), (4, 0)]),
            make_poly(&[(5, 5), (6, 3), (7, 2), (8, 1)]),
            &make_poly(&[(5, 5), (1, 4), (8, 3), (10, 2), (8, 1), (4, 0)]),
        );
        test(
            make_poly(&[(1, 2), (3, 0)]),
            make_poly(&[(-1, 2), (1, 1)]),
            &make_poly(&[(1, 1), (3, 0)]),
        );
        test(
            make_poly(&[(1, 2)]),
            make_poly(&[(-1, 2)]),
            &Polynomial::zero(),
        );
        test(make_poly(&[(4, 1)]), Zero::zero(), &make_poly(&[(4, 1)]));
        test(Zero::zero(), make_poly(&[(4, 1)]), &make_poly(&[(4, 1)]));
    }

    #[test]
    fn test_add_term() {
        let test = |l: Polynomial<i32>, r: Term<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(
            make_poly(&[(3, 2), (5, 0)]),
            Term::new(2, 1),
            &make_poly(&[(3, 2), (2, 1), (5, 0)]),
        );
        test(
            make_poly(&[(3, 2), (5, 0)]),
            Term::new(-3, 2),
            &make_poly(&[(5, 0)]),
        );
        test(make_poly(&[(3, 2)]), Term::new(0, 7), &make_poly(&[(3, 2)]));
    }

    #[test]
    fn test_sub() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test(
            make_poly(&[(1, 3), (2, 2), (3, 1), (4, 0)]),
            make_poly(&[(8, 3), (7, 2), (6, 1), (5, 0)]),
            &make_poly(&[(-7, 3), (-5, 2), (-3, 1), (-1, 0)]),
        );
        test(
            make_poly(&[(10, 4), (1, 0)]),
            make_poly(&[(10, 4), (2, 1)]),
            &make_poly(&[(-2, 1), (1, 0)]),
        );
        test(Zero::zero(), make_poly(&[(2, 3)]), &make_poly(&[(-2, 3)]));
    }

    #[test]
    fn test_sub_term() {
        let test = |l: Polynomial<i32>, r: Term<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test(
            make_poly(&[(3, 2), (5, 0)]),
            Term::new(5, 0),
            &make_poly(&[(3, 2)]),
        );
        test(
            make_poly(&[(3, 2)]),
            Term::new(1, 3),
            &make_poly(&[(-1, 3), (3, 2)]),
        );
    }

    #[test]
    fn test_neg() {
        let poly = make_poly(&[(3, 2), (-2, 1), (5, 0)]);
        let expected = make_poly(&[(-3, 2), (2, 1), (-5, 0)]);
        assert_eq!(-&poly, expected);
        assert_eq!(-poly, expected);
        assert_eq!(-Polynomial::<i32>::zero(), Zero::zero());
    }

    #[test]
    fn test_zero() {
        let mut poly = make_poly(&[(3, 2)]);
        assert!(!poly.is_zero());
        poly.set_zero();
        assert!(poly.is_zero());
        assert_eq!(poly.highest_degree(), 0);
    }

    #[test]
    fn test_add_sub_laws() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        for _ in 0..200 {
            let p = random_polynomial(&mut rng);
            let q = random_polynomial(&mut rng);
            let sum = &p + &q;
            assert_canonical(&sum);
            assert_eq!(sum, &q + &p);
            assert_eq!(&p + Polynomial::zero(), p);
            assert!((&p - &p).is_zero());
            assert_eq!(&sum - &q, p);
            assert_eq!(&p - &q, &p + -&q);
        }
    }
}
