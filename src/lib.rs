// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Sparse single-variable polynomials over a generic coefficient type.
//!
//! ```
//! use sparse_polynomials::prelude::*;
//!
//! let mut p = Polynomial::new(3, 2);
//! p += Term::new(2, 1);
//! p += Term::new(5, 0);
//! assert_eq!(p.to_string(), "3x^2 + 2x + 5");
//! assert_eq!(p.evaluate(&2), 21);
//!
//! let q: Polynomial<i64> = "2 1 0".parse().unwrap();
//! assert_eq!(&q * &q, Polynomial::new(4, 2));
//! ```

pub mod polynomial;
pub mod prelude;
pub mod term;
pub mod traits;
pub mod util;
