// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::Zero;
use std::cmp::Ordering;
use std::ops::Neg;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// returns `None` for zero and for values that don't compare with zero (NaN)
    pub fn new<T: PartialOrd + Zero>(v: &T) -> Option<Sign> {
        match v.partial_cmp(&Zero::zero()) {
            Some(Ordering::Less) => Some(Sign::Negative),
            Some(Ordering::Greater) => Some(Sign::Positive),
            _ => None,
        }
    }
    /// returns `v` with this sign removed, so the result is non-negative
    pub fn magnitude<T: Neg<Output = T>>(self, v: T) -> T {
        match self {
            Sign::Negative => -v,
            Sign::Positive => v,
        }
    }
}

impl Default for Sign {
    fn default() -> Sign {
        Sign::Positive
    }
}
