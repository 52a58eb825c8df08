// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::term::Term;
use crate::traits::{Coefficient, PolynomialEval};
use crate::util::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

mod add_sub;
mod mul;
mod stream;

pub use self::stream::ReadPolynomialError;

/// A sparse single-variable polynomial.
///
/// the polynomial is the sum of `term.coefficient() * pow(x, term.exponent())`
/// over all of `self.terms()`
///
/// # Invariants
///
/// * `self.terms()` is sorted by strictly decreasing exponent, so no two terms
///   share an exponent
/// * no term has a zero coefficient; the zero polynomial has no terms at all
///
/// All mutation goes through [`insert_term`](Polynomial::insert_term), which
/// maintains both.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    terms: Vec<Term<T>>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self { terms: Vec::new() }
    }
}

impl<T> Polynomial<T> {
    pub fn terms(&self) -> &[Term<T>] {
        &self.terms
    }
    pub fn into_terms(self) -> Vec<Term<T>> {
        self.terms
    }
    pub fn iter(&self) -> slice::Iter<Term<T>> {
        self.terms.iter()
    }
    /// number of non-zero terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    /// the largest exponent, or `0` for the zero polynomial
    pub fn highest_degree(&self) -> usize {
        self.terms.first().map_or(0, Term::exponent)
    }
    pub fn leading_term(&self) -> Option<&Term<T>> {
        self.terms.first()
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// `coefficient * pow(x, degree)`; a zero `coefficient` gives the zero polynomial
    pub fn new(coefficient: T, degree: usize) -> Self {
        let mut retval = Self::default();
        retval.insert_term(Term::new(coefficient, degree));
        retval
    }
    /// the coefficient of `pow(x, exponent)`, zero if there is no such term
    pub fn coefficient(&self, exponent: usize) -> T {
        self.terms
            .iter()
            .take_while(|term| term.exponent() >= exponent)
            .find(|term| term.exponent() == exponent)
            .map_or_else(T::zero, |term| term.coefficient().clone())
    }
    /// Adds `term` into `self`, merging it with the term of the same exponent
    /// if there is one.
    ///
    /// Runs a single scan from the highest exponent down, stopping at the
    /// first term whose exponent is not greater than `term.exponent()`.
    pub fn insert_term(&mut self, term: Term<T>) {
        if term.is_zero() {
            return;
        }
        for index in 0..self.terms.len() {
            match self.terms[index].exponent().cmp(&term.exponent()) {
                Ordering::Greater => {}
                Ordering::Equal => {
                    let existing = &mut self.terms[index];
                    let sum = existing.coefficient().clone() + term.into_coefficient();
                    if sum.is_zero() {
                        self.terms.remove(index);
                    } else {
                        existing.set_coefficient(sum);
                    }
                    return;
                }
                Ordering::Less => {
                    self.terms.insert(index, term);
                    return;
                }
            }
        }
        self.terms.push(term);
    }
    /// evaluates `self` at `x`, computing each power by repeated multiplication
    pub fn evaluate(&self, x: &T) -> T {
        let mut retval = T::zero();
        for term in &self.terms {
            retval += term.coefficient().clone() * power(x, term.exponent());
        }
        retval
    }
}

fn power<T: Coefficient>(x: &T, exponent: usize) -> T {
    let mut retval = T::one();
    for _ in 0..exponent {
        retval *= x.clone();
    }
    retval
}

impl<T: Coefficient> From<Term<T>> for Polynomial<T> {
    fn from(term: Term<T>) -> Self {
        let mut retval = Self::default();
        retval.insert_term(term);
        retval
    }
}

impl<T: Coefficient> From<Vec<Term<T>>> for Polynomial<T> {
    fn from(terms: Vec<Term<T>>) -> Self {
        terms.into_iter().collect()
    }
}

impl<T: Coefficient> FromIterator<Term<T>> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = Term<T>>>(iter: I) -> Self {
        let mut retval = Self::default();
        retval.extend(iter);
        retval
    }
}

impl<T: Coefficient> Extend<Term<T>> for Polynomial<T> {
    fn extend<I: IntoIterator<Item = Term<T>>>(&mut self, iter: I) {
        for term in iter {
            self.insert_term(term);
        }
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = Term<T>;
    type IntoIter = vec::IntoIter<Term<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a Term<T>;
    type IntoIter = slice::Iter<'a, Term<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Coefficient> PolynomialEval<T> for Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.evaluate(x)
    }
}

impl<'a, T: Coefficient> PolynomialEval<T> for &'a Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.evaluate(x)
    }
}

impl<T: Coefficient + PartialOrd + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.terms.iter();
        let first = match iter.next() {
            None => return write!(f, "0"),
            Some(first) => first,
        };
        write!(f, "{}", first)?;
        for term in iter {
            let sign = Sign::new(term.coefficient()).unwrap_or_default();
            match sign {
                Sign::Negative => write!(f, " - ")?,
                Sign::Positive => write!(f, " + ")?,
            }
            term.fmt_unsigned(sign, f)?;
        }
        Ok(())
    }
}
