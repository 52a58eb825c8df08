// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    polynomial::{Polynomial, ReadPolynomialError},
    term::Term,
    traits::{Coefficient, PolynomialEval as _},
};
pub use num_traits::{One as _, Zero as _};
