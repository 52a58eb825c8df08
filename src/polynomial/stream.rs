// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Reading polynomials from and writing them to byte streams.
//!
//! The input format is a flat sequence of whitespace-separated
//! `coefficient exponent` pairs, ended by a lone zero coefficient:
//!
//! ```text
//! 3 2 2 1 5 0 0
//! ```
//!
//! is `3x^2 + 2x + 5`.

use crate::polynomial::Polynomial;
use crate::term::Term;
use crate::traits::Coefficient;
use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, trace};

#[derive(Debug)]
pub enum ReadPolynomialError {
    Io(io::Error),
    InvalidCoefficient { token: String },
    InvalidExponent { token: String },
    /// the input ended right after a non-zero coefficient
    MissingExponent,
    /// the input ended before the zero coefficient that ends a polynomial
    MissingTerminator,
    TrailingInput { token: String },
}

impl fmt::Display for ReadPolynomialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadPolynomialError::Io(err) => write!(f, "failed to read polynomial: {}", err),
            ReadPolynomialError::InvalidCoefficient { token } => write!(
                f,
                "malformed polynomial literal: invalid coefficient {:?}",
                token
            ),
            ReadPolynomialError::InvalidExponent { token } => write!(
                f,
                "malformed polynomial literal: invalid exponent {:?}",
                token
            ),
            ReadPolynomialError::MissingExponent => write!(
                f,
                "malformed polynomial literal: coefficient without exponent"
            ),
            ReadPolynomialError::MissingTerminator => write!(
                f,
                "malformed polynomial literal: missing terminating zero coefficient"
            ),
            ReadPolynomialError::TrailingInput { token } => write!(
                f,
                "malformed polynomial literal: unexpected {:?} after terminating zero coefficient",
                token
            ),
        }
    }
}

impl Error for ReadPolynomialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadPolynomialError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadPolynomialError {
    fn from(err: io::Error) -> Self {
        ReadPolynomialError::Io(err)
    }
}

impl From<ReadPolynomialError> for io::Error {
    fn from(err: ReadPolynomialError) -> Self {
        match err {
            ReadPolynomialError::Io(err) => err,
            err => Self::new(io::ErrorKind::InvalidData, err),
        }
    }
}

/// reads the next whitespace-delimited token, leaving the delimiter after it unread.
///
/// returns `None` at end of input
fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut at_delimiter = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    at_delimiter = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if at_delimiter {
            break;
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn read_terms<T: Coefficient + FromStr, R: BufRead + ?Sized>(
    reader: &mut R,
) -> Result<Polynomial<T>, ReadPolynomialError> {
    let mut retval = Polynomial::<T>::default();
    loop {
        let token = read_token(reader)?.ok_or(ReadPolynomialError::MissingTerminator)?;
        let coefficient: T = token
            .parse()
            .map_err(|_| ReadPolynomialError::InvalidCoefficient { token })?;
        if coefficient.is_zero() {
            trace!(term_count = retval.term_count(), "read polynomial terminator");
            return Ok(retval);
        }
        let token = read_token(reader)?.ok_or(ReadPolynomialError::MissingExponent)?;
        let exponent: usize = token
            .parse()
            .map_err(|_| ReadPolynomialError::InvalidExponent { token })?;
        trace!(exponent, "read polynomial term");
        retval.insert_term(Term::new(coefficient, exponent));
    }
}

impl<T: Coefficient + FromStr> Polynomial<T> {
    /// Reads `coefficient exponent` pairs from `reader` and adds each term into
    /// `self`, stopping after a zero coefficient.
    ///
    /// `self` is left unchanged if reading fails. Input after the terminating
    /// zero is left in `reader`.
    pub fn read_terms_into<R: BufRead + ?Sized>(
        &mut self,
        reader: &mut R,
    ) -> Result<(), ReadPolynomialError> {
        *self += Self::read_from(reader)?;
        Ok(())
    }
    /// reads one polynomial from `reader`, see [`read_terms_into`](Polynomial::read_terms_into)
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<Self, ReadPolynomialError> {
        read_terms(reader).map_err(|err| {
            debug!(%err, "failed to read polynomial");
            err
        })
    }
}

impl<T: Coefficient + FromStr> FromStr for Polynomial<T> {
    type Err = ReadPolynomialError;
    fn from_str(text: &str) -> Result<Self, ReadPolynomialError> {
        let mut reader = text.as_bytes();
        let retval = Self::read_from(&mut reader)?;
        match read_token(&mut reader)? {
            None => Ok(retval),
            Some(token) => Err(ReadPolynomialError::TrailingInput { token }),
        }
    }
}

impl<T: Coefficient + PartialOrd + fmt::Display> Polynomial<T> {
    /// writes a `Number Terms: <term count>` line followed by a line with `self`
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Number Terms: {}", self.term_count())?;
        writeln!(writer, "{}", self)
    }
}
